//! Shared test doubles for editor tests.

#![allow(dead_code)]

use async_trait::async_trait;
use pagecraft_editor::FileUpload;
use pagecraft_model::{Block, LayoutId, PageConfig, ThemeId};
use pagecraft_storage::{
    FileStore, MemoryPageStore, NewPage, PageRecord, PageStore, StorageError, StorageResult,
};
use pagecraft_types::PageId;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// A page store that records every save call before delegating to an
/// in-memory store. Saves can be made to fail or to wait for a permit.
#[derive(Default)]
pub struct RecordingStore {
    pub inner: MemoryPageStore,
    block_saves: Mutex<Vec<Vec<Block>>>,
    config_saves: Mutex<Vec<PageConfig>>,
    fail_saves: AtomicBool,
    gate: Option<Arc<Semaphore>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves wait for a permit on the returned semaphore.
    pub fn gated() -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        let store = Self {
            gate: Some(gate.clone()),
            ..Self::default()
        };
        (store, gate)
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn block_saves(&self) -> Vec<Vec<Block>> {
        self.block_saves.lock().unwrap().clone()
    }

    pub fn config_saves(&self) -> Vec<PageConfig> {
        self.config_saves.lock().unwrap().clone()
    }

    async fn pass_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
    }

    fn check_fail(&self) -> StorageResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("database offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PageStore for RecordingStore {
    async fn find_by_path(&self, path: &str) -> StorageResult<Option<PageRecord>> {
        self.inner.find_by_path(path).await
    }

    async fn find_by_id(&self, id: &PageId) -> StorageResult<Option<PageRecord>> {
        self.inner.find_by_id(id).await
    }

    async fn create_page(&self, page: NewPage) -> StorageResult<PageRecord> {
        self.inner.create_page(page).await
    }

    async fn save_page_blocks(&self, id: &PageId, blocks: &[Block]) -> StorageResult<()> {
        self.pass_gate().await;
        self.block_saves.lock().unwrap().push(blocks.to_vec());
        self.check_fail()?;
        self.inner.save_page_blocks(id, blocks).await
    }

    async fn save_page_config(&self, id: &PageId, config: &PageConfig) -> StorageResult<()> {
        self.pass_gate().await;
        self.config_saves.lock().unwrap().push(config.clone());
        self.check_fail()?;
        self.inner.save_page_config(id, config).await
    }

    async fn delete_page(&self, id: &PageId) -> StorageResult<()> {
        self.inner.delete_page(id).await
    }

    async fn list_pages(&self) -> StorageResult<Vec<PageRecord>> {
        self.inner.list_pages().await
    }
}

/// A file store whose uploads always fail.
pub struct FailingFileStore;

#[async_trait]
impl FileStore for FailingFileStore {
    fn provider_name(&self) -> &'static str {
        "failing"
    }

    async fn put_file(&self, _bytes: &[u8], _name: &str) -> StorageResult<String> {
        Err(StorageError::Backend("bucket unavailable".into()))
    }
}

/// Creates a stored page with the given layout and block titles.
pub async fn seed_page(store: &dyn PageStore, path: &str, layout: LayoutId, titles: &[&str]) -> PageRecord {
    store
        .create_page(NewPage {
            title: format!("Page {path}"),
            path: path.into(),
            config: PageConfig::new(layout, ThemeId::default()),
            blocks: titles.iter().map(|t| Block::new(*t, "")).collect(),
        })
        .await
        .unwrap()
}

pub fn pdf(name: &str) -> FileUpload {
    FileUpload::new(name, "application/pdf", b"%PDF-1.7".to_vec())
}
