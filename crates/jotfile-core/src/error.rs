//! Error types for jotfile.

use thiserror::Error;

/// Result type alias using jotfile's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for jotfile operations.
///
/// Three recoverable families: invalid input (caller corrects and retries),
/// not found (missing id), and storage failures (I/O or parse, surfaced to
/// the caller, not retried automatically).
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Note not found
    #[error("Note not found: {0}")]
    NoteNotFound(uuid::Uuid),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
