use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::BoardLocation;

pub type ChessResult<T> = Result<T, ChessError>;

/// Represents all possible error types that can occur in the rules engine.
/// Used throughout the codebase for error handling and reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Indicates an attempted access outside the bounds of the chess board.
    OutOfBounds(BoardLocation),
    /// A caller attempted to apply a move that is not in the legal-move set.
    IllegalMove {
        from: BoardLocation,
        to: BoardLocation,
    },
    /// Serializer input that cannot be meaningfully decoded.
    MalformedText(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::OutOfBounds((file, rank)) => {
                write!(f, "board location ({file}, {rank}) is out of bounds")
            }
            ChessError::IllegalMove { from, to } => write!(
                f,
                "illegal move from ({}, {}) to ({}, {})",
                from.0, from.1, to.0, to.1
            ),
            ChessError::MalformedText(msg) => write!(f, "malformed text input: {msg}"),
        }
    }
}

impl Error for ChessError {}
