//! Error types for the chambercal crates.

use thiserror::Error;

/// Errors that can occur in chambercal operations.
#[derive(Error, Debug)]
pub enum ChamberCalError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Feed error: {0}")]
    Feed(String),
}

/// Result type alias for chambercal operations.
pub type ChamberCalResult<T> = Result<T, ChamberCalError>;
