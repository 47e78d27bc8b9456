//! Error types for the checkers engine
//!
//! Every failure is reported synchronously at the call site. Nothing here is
//! fatal: the caller decides whether to re-prompt a player or abort an AI turn.

use thiserror::Error;

use crate::board::piece_move::Move;

/// Errors that can occur while driving a game
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The move is not among the legal moves of the player to move
    #[error("Invalid move: {0}")]
    InvalidMove(Move),

    /// The operation does not make sense for the current game state
    #[error("Invalid state: {0}")]
    InvalidState(&'static str),

    /// A coordinate outside the 8x8 grid
    #[error("Square [{row}, {col}] is off the board")]
    OutOfBounds { row: i32, col: i32 },

    /// A text position that could not be parsed
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
