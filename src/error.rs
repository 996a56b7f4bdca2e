//! Error types for the noughts crate

use thiserror::Error;

use crate::tictactoe::Player;

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMoveError),

    #[error("state error: {0}")]
    State(#[from] StateError),

    #[error("board must have {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid player '{player}' in '{context}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String, context: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl Error {
    /// True for rejections a caller can recover from by asking for another move.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, Error::InvalidMove(_))
    }

    /// True for contract violations (programmer or integration defects).
    pub fn is_state_error(&self) -> bool {
        matches!(self, Error::State(_))
    }
}

/// Rejection of an attempted move
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveError {
    #[error("cell ({row}, {col}) is out of range (must be 0-2)")]
    OutOfRange { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("it is {expected}'s turn, not {got}'s")]
    OutOfTurn { expected: Player, got: Player },

    #[error("game already over")]
    GameOver,
}

/// Violation of a state precondition
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    #[error("utility requested for a non-terminal state")]
    NotTerminal,

    #[error("non-terminal state has no legal moves")]
    NoLegalMoves,

    #[error("invalid piece counts: X={x_count}, O={o_count} (must differ by at most 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_helpers() {
        let err = Error::from(InvalidMoveError::Occupied { row: 1, col: 1 });
        assert!(err.is_invalid_move());
        assert!(!err.is_state_error());
        assert!(err.to_string().contains("occupied"));

        let err = Error::from(StateError::NotTerminal);
        assert!(err.is_state_error());
        assert!(!err.is_invalid_move());
    }

    #[test]
    fn test_out_of_turn_message_names_players() {
        let err = InvalidMoveError::OutOfTurn {
            expected: Player::X,
            got: Player::O,
        };
        assert_eq!(err.to_string(), "it is X's turn, not O's");
    }
}
