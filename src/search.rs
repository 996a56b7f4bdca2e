//! Minimax search with optional alpha-beta pruning
//!
//! The engine walks the complete game tree below a [`BoardState`]. Nodes where
//! the AI's mark is to move maximize, nodes where the opponent's mark is to move
//! minimize; one recursive function covers both roles by reading the side to
//! move from the state.
//!
//! With pruning enabled the walk carries an `[alpha, beta]` window and stops
//! expanding the siblings of a node once its running value falls outside the
//! window. Pruned branches are never visited and never counted. Pruning never
//! changes the returned value or the chosen move, only the node count.
//!
//! Children are generated in row-major order and the first child reaching the
//! best value wins ties, so results are fully deterministic.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use crate::{
    error::{Result, StateError},
    tictactoe::{BoardState, Move, Player},
};

/// Outcome of one root search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Chosen move, `None` when the searched state is terminal
    pub best_move: Option<Move>,
    /// Best utility the AI can force: -10, 0 or +10
    pub value: i32,
    /// Nodes visited, terminal and internal, root included
    pub nodes_expanded: usize,
    /// Wall-clock time of the whole search
    pub elapsed: Duration,
}

impl SearchResult {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Search configuration: which mark the AI plays and whether to prune
///
/// # Examples
///
/// ```
/// use noughts::search::SearchEngine;
/// use noughts::tictactoe::{BoardState, Move, Player};
///
/// // X threatens the middle row; O must block at (1,2)
/// let state = BoardState::from_string("O.. XX. ..._O").unwrap();
/// let result = SearchEngine::new(Player::O).search(&state).unwrap();
/// assert_eq!(result.best_move, Some(Move::new(1, 2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEngine {
    ai: Player,
    use_alpha_beta: bool,
}

impl SearchEngine {
    /// Engine playing `ai`, with alpha-beta pruning enabled
    pub fn new(ai: Player) -> Self {
        Self {
            ai,
            use_alpha_beta: true,
        }
    }

    /// Enable or disable alpha-beta pruning
    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.use_alpha_beta = enabled;
        self
    }

    pub fn ai(&self) -> Player {
        self.ai
    }

    pub fn uses_alpha_beta(&self) -> bool {
        self.use_alpha_beta
    }

    /// Compute the value-optimal move for the side to move in `state`.
    ///
    /// `state` is only read. A terminal state yields its utility and no move.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NoLegalMoves`] if a non-terminal state has no
    /// empty cell. Correct terminal detection makes this unreachable.
    pub fn search(&self, state: &BoardState) -> Result<SearchResult> {
        let start = Instant::now();
        let mut walk = TreeWalk::new(self.ai, self.use_alpha_beta);
        let (value, best_move) = walk.value(state, i32::MIN, i32::MAX)?;

        let result = SearchResult {
            best_move,
            value,
            nodes_expanded: walk.nodes,
            elapsed: start.elapsed(),
        };

        debug!(
            board = %state.encode(),
            ai = %self.ai,
            alpha_beta = self.use_alpha_beta,
            value = result.value,
            best_move = ?result.best_move,
            nodes = result.nodes_expanded,
            elapsed_us = result.elapsed.as_micros() as u64,
            "search complete"
        );

        Ok(result)
    }

    /// Unpruned minimax value of every legal move in `state`, in row-major order.
    ///
    /// Returns an empty list for terminal states.
    pub fn evaluate_moves(&self, state: &BoardState) -> Result<Vec<(Move, i32)>> {
        if state.is_terminal() {
            return Ok(Vec::new());
        }

        let mut walk = TreeWalk::new(self.ai, false);
        let mut values = Vec::with_capacity(9);
        for mv in state.legal_moves() {
            let child = state.play_unchecked(mv);
            let (value, _) = walk.value(&child, i32::MIN, i32::MAX)?;
            values.push((mv, value));
        }
        Ok(values)
    }
}

/// Search `state` for `ai` with or without pruning.
pub fn search(state: &BoardState, ai: Player, use_alpha_beta: bool) -> Result<SearchResult> {
    SearchEngine::new(ai)
        .with_alpha_beta(use_alpha_beta)
        .search(state)
}

/// Per-search recursion state
struct TreeWalk {
    ai: Player,
    use_alpha_beta: bool,
    nodes: usize,
}

impl TreeWalk {
    fn new(ai: Player, use_alpha_beta: bool) -> Self {
        Self {
            ai,
            use_alpha_beta,
            nodes: 0,
        }
    }

    /// Value of `state` and the first child move reaching it.
    ///
    /// `alpha` is the value the maximizer can already guarantee on this path,
    /// `beta` the value the minimizer can. They only cut when pruning is on.
    fn value(
        &mut self,
        state: &BoardState,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<(i32, Option<Move>)> {
        self.nodes += 1;

        if state.is_terminal() {
            return Ok((state.utility(self.ai)?, None));
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return Err(StateError::NoLegalMoves.into());
        }

        let maximizing = state.to_move == self.ai;
        let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for mv in moves {
            let child = state.play_unchecked(mv);
            let (child_value, _) = self.value(&child, alpha, beta)?;

            let improves = if maximizing {
                child_value > best_value
            } else {
                child_value < best_value
            };
            if improves {
                best_value = child_value;
                best_move = Some(mv);
            }

            if !self.use_alpha_beta {
                continue;
            }

            if maximizing {
                if best_value >= beta {
                    break;
                }
                alpha = alpha.max(best_value);
            } else {
                if best_value <= alpha {
                    break;
                }
                beta = beta.min(best_value);
            }
        }

        Ok((best_value, best_move))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{UTILITY_DRAW, UTILITY_LOSS, UTILITY_WIN};

    #[test]
    fn test_terminal_state_returns_utility_without_move() {
        let state = BoardState::from_string("XXX OO. ..._O").unwrap();
        for use_alpha_beta in [false, true] {
            let result = search(&state, Player::O, use_alpha_beta).unwrap();
            assert_eq!(result.best_move, None);
            assert_eq!(result.value, UTILITY_LOSS);
            assert_eq!(result.nodes_expanded, 1);
        }
    }

    #[test]
    fn test_full_game_tree_node_count() {
        // Every node of the tic-tac-toe game tree, root included
        let result = search(&BoardState::new(), Player::X, false).unwrap();
        assert_eq!(result.nodes_expanded, 549_946);
        assert_eq!(result.value, UTILITY_DRAW);
        assert_eq!(result.best_move, Some(Move::new(0, 0)));
    }

    #[test]
    fn test_pruning_matches_minimax_on_empty_board() {
        let plain = search(&BoardState::new(), Player::X, false).unwrap();
        let pruned = search(&BoardState::new(), Player::X, true).unwrap();
        assert_eq!(plain.best_move, pruned.best_move);
        assert_eq!(plain.value, pruned.value);
        assert!(pruned.nodes_expanded < plain.nodes_expanded);
    }

    #[test]
    fn test_takes_immediate_win() {
        // O to move with two in the middle row
        let state = BoardState::from_string("XX. OO. X.._O").unwrap();
        let result = search(&state, Player::O, true).unwrap();
        assert_eq!(result.best_move, Some(Move::new(1, 2)));
        assert_eq!(result.value, UTILITY_WIN);
    }

    #[test]
    fn test_blocks_opponent_win() {
        // Every reply except (1,2) lets X complete the middle row
        let state = BoardState::from_string("O.. XX. ..._O").unwrap();
        for use_alpha_beta in [false, true] {
            let result = search(&state, Player::O, use_alpha_beta).unwrap();
            assert_eq!(result.best_move, Some(Move::new(1, 2)));
            assert_ne!(result.value, UTILITY_LOSS);
        }
    }

    #[test]
    fn test_minimizing_root_is_searched_from_ai_perspective() {
        // X (the opponent) is to move and can win at once
        let state = BoardState::from_string("XX. OO. ..._X").unwrap();
        let result = search(&state, Player::O, false).unwrap();
        assert_eq!(result.value, UTILITY_LOSS);
        assert_eq!(result.best_move, Some(Move::new(0, 2)));
    }

    #[test]
    fn test_search_leaves_state_untouched() {
        let state = BoardState::from_string("X.. .O. ...").unwrap();
        let copy = state;
        let _ = search(&state, Player::X, true).unwrap();
        assert_eq!(state, copy);
    }

    #[test]
    fn test_evaluate_moves_row_major() {
        let state = BoardState::from_string("XX. OO. X.._O").unwrap();
        let engine = SearchEngine::new(Player::O);
        let values = engine.evaluate_moves(&state).unwrap();
        let moves: Vec<Move> = values.iter().map(|(mv, _)| *mv).collect();
        assert_eq!(moves, state.legal_moves());
        assert!(values.contains(&(Move::new(1, 2), UTILITY_WIN)));

        let terminal = BoardState::from_string("XOX XOO OXX").unwrap();
        assert!(engine.evaluate_moves(&terminal).unwrap().is_empty());
    }
}
