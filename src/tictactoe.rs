//! Tic-Tac-Toe game state

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BoardState, Cell, Player, UTILITY_DRAW, UTILITY_LOSS, UTILITY_WIN};
pub use game::{GameOutcome, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
