//! Pages that have not been stored yet.

use crate::error::{EditorError, EditorResult};
use pagecraft_layout::starter_blocks;
use pagecraft_model::{slugify, Block, LayoutId, Page, PageConfig, ThemeId};
use pagecraft_storage::{NewPage, PageStore};
use pagecraft_types::PageId;
use tracing::info;

/// A page being set up by an administrator before its first save.
///
/// Until the draft is published, choosing another layout replaces the blocks
/// with that layout's starter template. Once published it never reseeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDraft {
    title: String,
    path: String,
    custom_path: bool,
    config: PageConfig,
    blocks: Vec<Block>,
    published: Option<PageId>,
}

impl PageDraft {
    /// Creates a draft seeded with the starter template of `layout`. The path
    /// is derived from the title until set explicitly.
    pub fn new(title: impl Into<String>, layout: LayoutId) -> Self {
        let title = title.into();
        Self {
            path: slugify(&title),
            title,
            custom_path: false,
            blocks: starter_blocks(&layout),
            config: PageConfig::new(layout, ThemeId::default()),
            published: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Draft content can be edited freely before publishing.
    pub fn blocks_mut(&mut self) -> &mut Vec<Block> {
        &mut self.blocks
    }

    /// Returns the stored page id once published.
    pub fn published_id(&self) -> Option<PageId> {
        self.published
    }

    pub fn is_persisted(&self) -> bool {
        self.published.is_some()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        if !self.custom_path {
            self.path = slugify(&self.title);
        }
    }

    /// Sets the path explicitly; later title changes no longer touch it.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
        self.custom_path = true;
    }

    pub fn set_theme(&mut self, theme: ThemeId) {
        self.config.theme = theme;
    }

    /// Changes the layout. Reseeds the blocks, discarding draft content,
    /// unless the draft has been published.
    pub fn set_layout(&mut self, layout: LayoutId) {
        if !self.is_persisted() {
            self.blocks = starter_blocks(&layout);
        }
        self.config.layout = layout;
    }

    /// Stores the draft as a new page.
    pub async fn publish(&mut self, store: &dyn PageStore) -> EditorResult<Page> {
        if let Some(id) = self.published {
            return Err(EditorError::AlreadyPublished(id));
        }
        if self.path.trim().is_empty() {
            return Err(EditorError::InvalidPath(self.path.clone()));
        }

        let record = store
            .create_page(NewPage {
                title: self.title.clone(),
                path: self.path.clone(),
                config: self.config.clone(),
                blocks: self.blocks.clone(),
            })
            .await?;

        self.published = Some(record.id);
        info!(page_id = %record.id, path = %record.path, layout = %self.config.layout, "Page published");
        Ok(record.to_page())
    }
}
