//! In-memory stores for tests and local tooling.

use crate::error::{StorageError, StorageResult};
use crate::record::{NewPage, PageRecord};
use crate::traits::{FileStore, PageStore};
use async_trait::async_trait;
use pagecraft_model::{encode_blocks, Block, PageConfig};
use pagecraft_types::PageId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Page rows held in a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryPageStore {
    pages: Arc<RwLock<HashMap<PageId, PageRecord>>>,
}

impl MemoryPageStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a raw row as-is, bypassing path checks. Useful for seeding
    /// rows with hand-written or corrupt content.
    pub async fn insert_record(&self, record: PageRecord) {
        self.pages.write().await.insert(record.id, record);
    }

    /// Returns the number of stored pages.
    pub async fn len(&self) -> usize {
        self.pages.read().await.len()
    }

    /// Returns `true` if no page is stored.
    pub async fn is_empty(&self) -> bool {
        self.pages.read().await.is_empty()
    }

    async fn update<F>(&self, id: &PageId, apply: F) -> StorageResult<()>
    where
        F: FnOnce(&mut PageRecord),
    {
        let mut pages = self.pages.write().await;
        let record = pages
            .get_mut(id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;
        apply(record);
        Ok(())
    }
}

#[async_trait]
impl PageStore for MemoryPageStore {
    async fn find_by_path(&self, path: &str) -> StorageResult<Option<PageRecord>> {
        let pages = self.pages.read().await;
        Ok(pages.values().find(|r| r.path == path).cloned())
    }

    async fn find_by_id(&self, id: &PageId) -> StorageResult<Option<PageRecord>> {
        Ok(self.pages.read().await.get(id).cloned())
    }

    async fn create_page(&self, page: NewPage) -> StorageResult<PageRecord> {
        let content = encode_blocks(&page.blocks)?;
        let config = page.config.encode()?;

        let mut pages = self.pages.write().await;
        if pages.values().any(|r| r.path == page.path) {
            return Err(StorageError::Conflict(page.path));
        }

        let record = PageRecord {
            id: PageId::new(),
            title: page.title,
            path: page.path,
            content: Some(content),
            config: Some(config),
        };
        pages.insert(record.id, record.clone());
        info!(page_id = %record.id, path = %record.path, "Page created");
        Ok(record)
    }

    async fn save_page_blocks(&self, id: &PageId, blocks: &[Block]) -> StorageResult<()> {
        let content = encode_blocks(blocks)?;
        self.update(id, |record| record.content = Some(content)).await?;
        debug!(page_id = %id, blocks = blocks.len(), "Page blocks saved");
        Ok(())
    }

    async fn save_page_config(&self, id: &PageId, config: &PageConfig) -> StorageResult<()> {
        let encoded = config.encode()?;
        self.update(id, |record| record.config = Some(encoded)).await
    }

    async fn delete_page(&self, id: &PageId) -> StorageResult<()> {
        match self.pages.write().await.remove(id) {
            Some(record) => {
                info!(page_id = %id, path = %record.path, "Page deleted");
                Ok(())
            }
            None => Err(StorageError::NotFound(id.to_string())),
        }
    }

    async fn list_pages(&self) -> StorageResult<Vec<PageRecord>> {
        let mut pages: Vec<_> = self.pages.read().await.values().cloned().collect();
        pages.sort_by_key(|r| r.id);
        Ok(pages)
    }
}

/// Uploaded files held in a map, addressed as `memory://<name>`.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileStore {
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryFileStore {
    pub const URL_SCHEME: &'static str = "memory://";

    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bytes stored under `name`.
    pub async fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.files.read().await.get(name).cloned()
    }

    /// Returns the stored names, sorted.
    pub async fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.files.read().await.keys().cloned().collect();
        names.sort();
        names
    }
}

#[async_trait]
impl FileStore for MemoryFileStore {
    fn provider_name(&self) -> &'static str {
        "memory"
    }

    async fn put_file(&self, bytes: &[u8], name: &str) -> StorageResult<String> {
        if name.is_empty() {
            return Err(StorageError::InvalidName(name.to_string()));
        }
        self.files
            .write()
            .await
            .insert(name.to_string(), bytes.to_vec());
        Ok(format!("{}{}", Self::URL_SCHEME, name))
    }
}
