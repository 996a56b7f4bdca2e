//! Optimal tic-tac-toe play through adversarial search
//!
//! This crate provides:
//! - The game-state model: board, legal moves, terminal detection and utility
//! - A minimax search engine with optional alpha-beta pruning and node/time
//!   instrumentation
//! - A game session layer for presentation front ends
//! - Exhaustive verification of optimality and pruning equivalence
//! - A command-line analysis toolkit

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod session;
pub mod tictactoe;

pub use config::GameConfig;
pub use error::{Error, InvalidMoveError, Result, StateError};
pub use search::{SearchEngine, SearchResult, search};
pub use session::{GameSession, MoveRecord, SessionMetrics};
pub use tictactoe::{BoardState, Cell, GameOutcome, Move, Player};
