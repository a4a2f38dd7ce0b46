//! Error types for the casting engine.

use thiserror::Error;

use zy_core::CoreError;

/// Result type for divination operations.
pub type DivinationResult<T> = Result<T, DivinationError>;

/// Errors that can occur while casting or driving a session.
#[derive(Debug, Error)]
pub enum DivinationError {
    /// The requested divination method is not recognized.
    ///
    /// This is a caller error (a bad request string), never retried.
    #[error("invalid method: \"{0}\" (expected \"yarrow\" or \"coins\")")]
    InvalidMethod(String),

    /// Invalid choice or input in a session command.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Unknown session command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Core data-model error.
    #[error("{0}")]
    Core(#[from] CoreError),
}
