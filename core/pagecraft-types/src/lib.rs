//! Core type definitions for Pagecraft.
//!
//! This crate defines the small, domain-agnostic types shared by every other
//! crate in the workspace:
//! - Page identifiers (UUID v7)
//! - Upload tokens used to make stored file names unique
//!
//! Page, block and layout types live in `pagecraft-model`, not here.

mod ids;
mod token;

pub use ids::PageId;
pub use token::UploadToken;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
