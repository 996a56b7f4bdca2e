//! Common test utilities for the noughts test suite.

#![allow(dead_code)]

use noughts::{
    analysis::reachable_states,
    tictactoe::{BoardState, Player},
};

/// Parse a board literal, panicking on malformed fixtures.
pub fn board(s: &str) -> BoardState {
    BoardState::from_string(s).unwrap_or_else(|e| panic!("bad fixture '{s}': {e}"))
}

/// Every state reachable from an empty board, for both opening players.
pub fn all_reachable_states() -> Vec<BoardState> {
    let mut states = reachable_states(Player::X);
    states.extend(reachable_states(Player::O));
    states
}

/// Every reachable state that still has a move to make.
pub fn non_terminal_states() -> Vec<BoardState> {
    all_reachable_states()
        .into_iter()
        .filter(|state| !state.is_terminal())
        .collect()
}
