//! Collaborator traits consumed by the editor.

use crate::error::StorageResult;
use crate::record::{NewPage, PageRecord};
use async_trait::async_trait;
use pagecraft_model::{Block, PageConfig};
use pagecraft_types::PageId;

/// Persistent store of page rows.
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Looks a page up by its slug path.
    async fn find_by_path(&self, path: &str) -> StorageResult<Option<PageRecord>>;

    /// Looks a page up by its id.
    async fn find_by_id(&self, id: &PageId) -> StorageResult<Option<PageRecord>>;

    /// Creates a page. Fails with `Conflict` if the path is taken.
    async fn create_page(&self, page: NewPage) -> StorageResult<PageRecord>;

    /// Replaces the whole block list of a page.
    async fn save_page_blocks(&self, id: &PageId, blocks: &[Block]) -> StorageResult<()>;

    /// Replaces the layout/theme config of a page.
    async fn save_page_config(&self, id: &PageId, config: &PageConfig) -> StorageResult<()>;

    /// Deletes a page together with its blocks and their documents.
    async fn delete_page(&self, id: &PageId) -> StorageResult<()>;

    /// Lists every stored page.
    async fn list_pages(&self) -> StorageResult<Vec<PageRecord>>;
}

/// Object storage for uploaded attachments.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Returns the name of the storage provider.
    fn provider_name(&self) -> &'static str;

    /// Stores `bytes` under `name` and returns a public URL for it.
    ///
    /// Callers make `name` unique; an existing object with the same name may
    /// be overwritten.
    async fn put_file(&self, bytes: &[u8], name: &str) -> StorageResult<String>;
}
