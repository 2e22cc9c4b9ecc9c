//! Error types for the engine.

use thiserror::Error;

/// Errors raised by the transition function, board parsing and the play
/// driver. Rule predicates and the search never fail.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GameError {
    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    InvalidMove { row: usize, col: usize },

    #[error("invalid move: cell ({row}, {col}) is off the 3x3 board")]
    OutOfBounds { row: usize, col: usize },

    #[error("board string has {got} cells, expected {expected}, in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at cell {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("agent '{agent}' returned no action on a live board")]
    NoActionAvailable { agent: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GameError::InvalidMove { row: 0, col: 2 };
        assert_eq!(err.to_string(), "invalid move: cell (0, 2) is already occupied");

        let err = GameError::OutOfBounds { row: 3, col: 0 };
        assert_eq!(err.to_string(), "invalid move: cell (3, 0) is off the 3x3 board");

        let err = GameError::NoActionAvailable { agent: "random".to_string() };
        assert!(err.to_string().contains("random"));
    }
}
