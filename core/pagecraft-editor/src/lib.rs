//! Page editing for Pagecraft.
//!
//! - [`PageDraft`]: a new page seeded from its layout's starter template
//! - [`PageEditSession`]: the mutation surface of a stored page, with
//!   auto-persist after every change
//! - [`AttachmentManager`]: upload validation and document bookkeeping
//! - [`load_page`] / [`delete_page`]: lookup by path or id, and cascading delete
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pagecraft_editor::{EditorConfig, PageDraft, PageEditSession};
//! use pagecraft_model::{LayoutId, PresentationType};
//! use pagecraft_storage::{MemoryFileStore, MemoryPageStore};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let store = Arc::new(MemoryPageStore::new());
//! let files = Arc::new(MemoryFileStore::new());
//!
//! let mut draft = PageDraft::new("Science Club", LayoutId::Hero);
//! let page = draft.publish(store.as_ref()).await.unwrap();
//!
//! let mut session = PageEditSession::new(page, store, files, &EditorConfig::default()).unwrap();
//! session.add_block(PresentationType::Card);
//! session.flush().await;
//! assert!(!session.is_dirty());
//! # });
//! ```

mod attachment;
mod config;
mod draft;
mod error;
mod loader;
mod persist;
mod session;

pub use attachment::{
    AttachmentManager, AttachmentPolicy, FileUpload, DEFAULT_ALLOWED_MIME_TYPES, MAX_UPLOAD_BYTES,
};
pub use config::EditorConfig;
pub use draft::PageDraft;
pub use error::{EditorError, EditorResult, ValidationError};
pub use loader::{delete_page, load_page};
pub use persist::{Feedback, FeedbackKind, SaveStatus};
pub use session::PageEditSession;
