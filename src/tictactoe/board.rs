//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    game::{GameOutcome, Move},
    lines::LineAnalyzer,
};
use crate::error::{Error, InvalidMoveError, Result, StateError};

/// Utility of a terminal state won by the AI
pub const UTILITY_WIN: i32 = 10;
/// Utility of a terminal state won by the AI's opponent
pub const UTILITY_LOSS: i32 = -10;
/// Utility of a drawn terminal state
pub const UTILITY_DRAW: i32 = 0;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game, identified by the mark it places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Parse a player token (`x`/`X`/`o`/`O`)
    pub fn parse(token: &str) -> Result<Player> {
        match token.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(Error::InvalidPlayerString {
                player: other.to_string(),
                context: token.to_string(),
            }),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Complete board state including cells and whose turn it is
///
/// The side to move is stored and kept consistent with the piece counts on
/// every transition. The type is `Copy` (10 bytes), so each transition yields
/// a fresh snapshot and the search never mutates a caller's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    /// Create a new empty board with a specified player to move first.
    ///
    /// Either mark may open. Whichever side opens is allowed to be one piece
    /// ahead of the other; the counts never differ by more than one.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts::tictactoe::{BoardState, Move, Player};
    ///
    /// let board = BoardState::new_with_player(Player::O);
    /// let after = board.apply_move(Move::new(1, 1), Player::O).unwrap();
    /// assert_eq!(after.to_move, Player::X);
    /// ```
    pub fn new_with_player(first_player: Player) -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: first_player,
        }
    }

    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; 9]> {
        if chars.len() != 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Side to move when none is given: the side that is behind, X on ties.
    fn determine_turn_from_counts(count: &PieceCount) -> Player {
        if count.o + 1 == count.x {
            Player::O
        } else {
            Player::X
        }
    }

    fn ensure_turn_consistent_with_counts(
        count: &PieceCount,
        player: Player,
        context: &str,
    ) -> Result<()> {
        let (mine, theirs) = match player {
            Player::X => (count.x, count.o),
            Player::O => (count.o, count.x),
        };

        if mine == theirs || theirs == mine + 1 {
            Ok(())
        } else {
            Err(Error::InvalidConfiguration {
                message: format!(
                    "piece counts (X={}, O={}) are inconsistent with {player} to move in '{context}'",
                    count.x, count.o
                ),
            })
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string holds 9 cells in row-major order (whitespace and `/` row
    /// separators are ignored; `.` `_` `-` mark empty cells) and may end with
    /// `_X` or `_O` to name the player to move. Without the suffix the player
    /// is inferred from the piece counts.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The board part does not hold exactly 9 cells
    /// - Any character is not a valid cell representation
    /// - The piece counts differ by more than one
    /// - A provided `_X`/`_O` suffix conflicts with the piece counts
    pub fn from_string(s: &str) -> Result<Self> {
        let cleaned: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        let (board_part, specified_turn) = Self::split_board_and_turn(&cleaned)?;
        let chars: Vec<char> = board_part.chars().collect();
        let cells = Self::parse_cells(&chars, s)?;
        let count = Self::count_pieces(&cells);

        if count.x.abs_diff(count.o) > 1 {
            return Err(StateError::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            }
            .into());
        }

        let to_move = match specified_turn {
            Some(turn) => {
                Self::ensure_turn_consistent_with_counts(&count, turn, s)?;
                turn
            }
            None => Self::determine_turn_from_counts(&count),
        };

        Ok(BoardState { cells, to_move })
    }

    fn split_board_and_turn(cleaned: &str) -> Result<(&str, Option<Player>)> {
        // A trailing "_X"/"_O" names the side to move; "_" elsewhere is an empty cell.
        if cleaned.len() > 2 && cleaned.is_char_boundary(cleaned.len() - 2) {
            let (board, suffix) = cleaned.split_at(cleaned.len() - 2);
            if let Some(token) = suffix.strip_prefix('_')
                && board.chars().count() == 9
            {
                return Ok((board, Some(Player::parse(token)?)));
            }
        }
        Ok((cleaned, None))
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = Self::count_pieces(&self.cells);
        count.x + count.o
    }

    /// Get the cell under a move's coordinates
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    /// True iff the move is inside the board and its cell is empty
    pub fn is_valid_move(&self, mv: Move) -> bool {
        mv.in_range() && self.cells[mv.index()] == Cell::Empty
    }

    /// Every empty cell in row-major order.
    ///
    /// The order is fixed so that search order, pruning and tie-breaking are
    /// reproducible. Empty iff the board is full.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Move::from_index(i))
            .collect()
    }

    /// Place `player`'s mark on `mv` and return the resulting state.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMoveError`] when the coordinates are out of range, the
    /// cell is occupied, `player` is not the side to move, or the game is
    /// already over.
    #[must_use = "apply_move returns a new board state; the original is unchanged"]
    pub fn apply_move(&self, mv: Move, player: Player) -> Result<BoardState> {
        if !mv.in_range() {
            return Err(InvalidMoveError::OutOfRange {
                row: mv.row,
                col: mv.col,
            }
            .into());
        }

        if self.get(mv) != Cell::Empty {
            return Err(InvalidMoveError::Occupied {
                row: mv.row,
                col: mv.col,
            }
            .into());
        }

        if self.is_terminal() {
            return Err(InvalidMoveError::GameOver.into());
        }

        if player != self.to_move {
            return Err(InvalidMoveError::OutOfTurn {
                expected: self.to_move,
                got: player,
            }
            .into());
        }

        Ok(self.play_unchecked(mv))
    }

    /// Place the side to move's mark on `mv`.
    #[must_use = "play returns a new board state; the original is unchanged"]
    pub fn play(&self, mv: Move) -> Result<BoardState> {
        self.apply_move(mv, self.to_move)
    }

    /// Successor for a move already known to be legal.
    pub(crate) fn play_unchecked(&self, mv: Move) -> BoardState {
        let mut next = *self;
        next.cells[mv.index()] = self.to_move.to_cell();
        next.to_move = self.to_move.opponent();
        next
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winning_line().is_some() || !self.cells.contains(&Cell::Empty)
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && self.winner().is_none()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        self.winning_line()
            .and_then(|line| self.cells[line[0]].player())
    }

    /// Cell indices of the first completed line (rows, then columns, then diagonals)
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        LineAnalyzer::winning_line(&self.cells)
    }

    /// Outcome of a terminal state, `None` while the game is in progress
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(winner) = self.winner() {
            Some(GameOutcome::Win(winner))
        } else if self.is_draw() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Value of a terminal state from `ai`'s perspective.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NotTerminal`] when the game is still in progress.
    pub fn utility(&self, ai: Player) -> Result<i32> {
        match self.outcome() {
            Some(GameOutcome::Win(winner)) if winner == ai => Ok(UTILITY_WIN),
            Some(GameOutcome::Win(_)) => Ok(UTILITY_LOSS),
            Some(GameOutcome::Draw) => Ok(UTILITY_DRAW),
            None => Err(StateError::NotTerminal.into()),
        }
    }

    /// Human-readable summary of the game outcome
    pub fn result_message(&self) -> String {
        match self.outcome() {
            Some(GameOutcome::Win(winner)) => format!("Player {winner} wins!"),
            Some(GameOutcome::Draw) => "It's a draw!".to_string(),
            None => "Game in progress".to_string(),
        }
    }

    /// One-line label `cells_player`, e.g. `XX.OO...._X`
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells.iter().map(|&c| c.to_char()).collect::<String>(),
            self.to_move
        )
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
