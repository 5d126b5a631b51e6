//! Page editing session.
//!
//! The session owns the in-memory page and is its only writer. Each successful
//! mutation schedules exactly one full-list save of the resulting blocks; a
//! rejected mutation (bad index, invalid upload) schedules nothing. Saves never
//! block the caller and a failed save does not roll the page back: the edit
//! stays visible, [`SaveStatus::last_error`] records the failure, and the next
//! mutation or [`PageEditSession::save_now`] writes the full list again.

use crate::attachment::{AttachmentManager, FileUpload};
use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult};
use crate::loader::load_page;
use crate::persist::{Persister, SaveRequest, SaveStatus};
use pagecraft_layout::{arrange, new_block, Arrangement};
use pagecraft_model::{Block, Document, LayoutId, Page, PresentationType, ThemeId};
use pagecraft_storage::{FileStore, PageStore};
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// An administrator's editing session on one page.
pub struct PageEditSession {
    page: Page,
    attachments: AttachmentManager,
    persister: Persister,
}

impl PageEditSession {
    /// Starts a session on an already loaded page.
    ///
    /// The session spawns its persister task on the current tokio runtime and
    /// fails with [`EditorError::NoRuntime`] outside one.
    pub fn new(
        page: Page,
        store: Arc<dyn PageStore>,
        files: Arc<dyn FileStore>,
        config: &EditorConfig,
    ) -> EditorResult<Self> {
        let persister = Persister::spawn(store, page.id, config.feedback_ttl())?;
        let attachments = AttachmentManager::new(config.attachments.clone(), files);
        Ok(Self {
            page,
            attachments,
            persister,
        })
    }

    /// Loads the page named by `identifier` (path or id) and starts a session.
    pub async fn open(
        identifier: &str,
        store: Arc<dyn PageStore>,
        files: Arc<dyn FileStore>,
        config: &EditorConfig,
    ) -> EditorResult<Self> {
        let page = load_page(store.as_ref(), identifier).await?;
        Self::new(page, store, files, config)
    }

    /// Returns the page as currently edited.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Returns the current blocks.
    pub fn blocks(&self) -> &[Block] {
        &self.page.blocks
    }

    /// Arranges the current blocks for the page layout.
    pub fn arrangement(&self) -> Arrangement<'_> {
        arrange(&self.page.config.layout, &self.page.blocks)
    }

    // ── Block mutations ──────────────────────────────────────────

    /// Appends a new block pinned to `presentation` and returns its index.
    pub fn add_block(&mut self, presentation: PresentationType) -> usize {
        self.page.blocks.push(new_block(presentation));
        let index = self.page.blocks.len() - 1;
        debug!(page_id = %self.page.id, index, %presentation, "Block added");
        self.persist_blocks();
        index
    }

    /// Replaces the title and body of a block, keeping its documents and type.
    pub fn edit_block(
        &mut self,
        index: usize,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> EditorResult<()> {
        let block = self.block_mut(index)?;
        block.title = title.into();
        block.body = body.into();
        debug!(page_id = %self.page.id, index, "Block edited");
        self.persist_blocks();
        Ok(())
    }

    /// Removes a block together with its documents.
    pub fn delete_block(&mut self, index: usize) -> EditorResult<Block> {
        self.check_block(index)?;
        let removed = self.page.blocks.remove(index);
        debug!(page_id = %self.page.id, index, docs = removed.docs.len(), "Block deleted");
        self.persist_blocks();
        Ok(removed)
    }

    // ── Attachments ──────────────────────────────────────────────

    /// Uploads a document and appends it to the block at `block_index`.
    pub async fn add_document(
        &mut self,
        block_index: usize,
        upload: FileUpload,
    ) -> EditorResult<Document> {
        self.check_block(block_index)?;
        let block = &mut self.page.blocks[block_index];
        let document = self.attachments.attach(block, upload).await?;
        debug!(page_id = %self.page.id, block_index, name = %document.name, "Document attached");
        self.persist_blocks();
        Ok(document)
    }

    /// Removes the document at `doc_index` from the block at `block_index`.
    pub fn remove_document(&mut self, block_index: usize, doc_index: usize) -> EditorResult<Document> {
        let block = self.block_mut(block_index)?;
        let removed = AttachmentManager::remove(block, doc_index)?;
        debug!(page_id = %self.page.id, block_index, doc_index, "Document removed");
        self.persist_blocks();
        Ok(removed)
    }

    // ── Page config ──────────────────────────────────────────────

    /// Switches the layout of this stored page. Blocks are kept as they are.
    pub fn set_layout(&mut self, layout: LayoutId) {
        self.page.config.layout = layout;
        self.persist_config();
    }

    /// Switches the theme of this stored page.
    pub fn set_theme(&mut self, theme: ThemeId) {
        self.page.config.theme = theme;
        self.persist_config();
    }

    // ── Persistence ──────────────────────────────────────────────

    /// Schedules a save of the full block list without any change, e.g. to
    /// retry after a failed auto-save. After a failure the page config is
    /// written again too. Returns the sequence number of the last save queued.
    pub fn save_now(&mut self) -> u64 {
        if self.persister.status().last_error.is_some() {
            self.persist_config();
        }
        self.persist_blocks()
    }

    /// Returns the current save status.
    pub fn status(&self) -> SaveStatus {
        self.persister.status()
    }

    /// Whether a save is in flight.
    pub fn is_saving(&self) -> bool {
        self.persister.status().is_saving()
    }

    /// Whether stored state may lag behind this session.
    pub fn is_dirty(&self) -> bool {
        self.persister.status().is_dirty()
    }

    /// Subscribes to save status changes.
    pub fn subscribe(&self) -> watch::Receiver<SaveStatus> {
        self.persister.subscribe()
    }

    /// Waits for every save scheduled so far to finish.
    pub async fn flush(&self) {
        self.persister.flush().await;
    }

    fn persist_blocks(&self) -> u64 {
        self.persister
            .schedule(SaveRequest::Blocks(self.page.blocks.clone()))
    }

    fn persist_config(&self) -> u64 {
        self.persister
            .schedule(SaveRequest::Config(self.page.config.clone()))
    }

    fn check_block(&self, index: usize) -> EditorResult<()> {
        if index >= self.page.blocks.len() {
            return Err(EditorError::BlockIndexOutOfRange {
                index,
                len: self.page.blocks.len(),
            });
        }
        Ok(())
    }

    fn block_mut(&mut self, index: usize) -> EditorResult<&mut Block> {
        let len = self.page.blocks.len();
        self.page
            .blocks
            .get_mut(index)
            .ok_or(EditorError::BlockIndexOutOfRange { index, len })
    }
}

impl fmt::Debug for PageEditSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageEditSession")
            .field("page_id", &self.page.id)
            .field("path", &self.page.path)
            .field("blocks", &self.page.blocks.len())
            .field("attachments", &self.attachments)
            .finish_non_exhaustive()
    }
}
