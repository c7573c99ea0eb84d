//! Error types for trackr
//!
//! Centralized error handling using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// All error types that can occur in a record store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Malformed or missing required field(s); the message names them
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Positional selection outside the current sequence bounds
    #[error("Index out of bounds: {index} (store has {len} records)")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Backing file exists but is not parseable as a record sequence
    #[error("Corrupt data in {}: {reason}", path.display())]
    CorruptData { path: PathBuf, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
