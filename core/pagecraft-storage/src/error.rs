//! Error types for the storage layer.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Page not found.
    #[error("page not found: {0}")]
    NotFound(String),

    /// A page with the same path already exists.
    #[error("path already in use: {0}")]
    Conflict(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File name that cannot be stored as given.
    #[error("invalid file name: {0}")]
    InvalidName(String),

    /// Failure reported by a remote backend.
    #[error("backend error: {0}")]
    Backend(String),
}
