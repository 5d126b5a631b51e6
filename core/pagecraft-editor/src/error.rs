//! Error types for the editor.

use pagecraft_storage::StorageError;
use pagecraft_types::PageId;
use thiserror::Error;

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Why an upload was rejected. Checked before any I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("file is {size} bytes, the limit is {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
}

/// Errors that can occur while loading or editing a page.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Upload rejected by the attachment policy.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Persistence or file storage failure.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Neither a path nor an id lookup found the page.
    #[error("page not found: {0}")]
    NotFound(String),

    #[error("no block at index {index} (page has {len})")]
    BlockIndexOutOfRange { index: usize, len: usize },

    #[error("no document at index {index} (block has {len})")]
    DocumentIndexOutOfRange { index: usize, len: usize },

    /// The draft has no usable path.
    #[error("invalid page path: {0:?}")]
    InvalidPath(String),

    #[error("draft already published as page {0}")]
    AlreadyPublished(PageId),

    /// Sessions spawn their persister on the ambient tokio runtime.
    #[error("no tokio runtime available: {0}")]
    NoRuntime(String),
}
