//! Moves and outcomes

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::Player;

/// A move: the (row, column) coordinates of the cell to mark
///
/// Coordinates are not checked on construction; [`BoardState::apply_move`]
/// rejects anything outside `[0,2]×[0,2]`.
///
/// [`BoardState::apply_move`]: super::BoardState::apply_move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Move for a row-major cell index (0-8)
    pub fn from_index(index: usize) -> Self {
        Move {
            row: index / 3,
            col: index % 3,
        }
    }

    /// Row-major cell index (0-8)
    ///
    /// Only meaningful when [`Move::in_range`] holds.
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    pub fn in_range(self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}
