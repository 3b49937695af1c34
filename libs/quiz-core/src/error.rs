//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using DataLoadError.
pub type Result<T> = std::result::Result<T, DataLoadError>;

/// Errors that prevent the quiz from starting.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("card source {source_name} unreachable: {reason}")]
    Unreachable { source_name: String, reason: String },

    #[error("card source has no header row")]
    MissingHeader,
}

/// Errors raised by a progress slot. Never fatal to a session.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read saved progress: {0}")]
    Read(String),

    #[error("failed to write progress: {0}")]
    Write(String),

    #[error("malformed progress record: {0}")]
    Malformed(#[from] serde_json::Error),
}
