//! Storage collaborators for Pagecraft.
//!
//! The engine never talks to a database or object store directly. It goes
//! through two narrow traits:
//!
//! - [`PageStore`]: page rows (lookup by path or id, create, full-list block
//!   saves, config saves, delete)
//! - [`FileStore`]: uploaded attachment bytes, returning a public URL
//!
//! # Stored row shape
//!
//! A page row ([`PageRecord`]) keeps its block list as a JSON array in
//! `content` and its layout/theme as a JSON object in `config`. Both are
//! decoded leniently by [`PageRecord::to_page`].
//!
//! In-memory implementations back tests and local tooling;
//! [`DirectoryFileStore`] writes uploads to a local directory.

mod directory;
mod error;
mod memory;
mod record;
mod traits;

pub use directory::{DirectoryFileStore, DirectoryFileStoreConfig};
pub use error::{StorageError, StorageResult};
pub use memory::{MemoryFileStore, MemoryPageStore};
pub use record::{NewPage, PageRecord};
pub use traits::{FileStore, PageStore};
