use crate::{Block, LayoutId, PageConfig, ThemeId};
use pagecraft_types::PageId;
use serde::{Deserialize, Serialize};

/// A named, path-addressable page composed of ordered blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub title: String,
    /// Unique slug used in direct links.
    pub path: String,
    #[serde(flatten)]
    pub config: PageConfig,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Page {
    /// Returns the page layout.
    pub fn layout(&self) -> &LayoutId {
        &self.config.layout
    }

    /// Returns the page theme.
    pub fn theme(&self) -> &ThemeId {
        &self.config.theme
    }

    /// Total number of documents attached across all blocks.
    pub fn doc_count(&self) -> usize {
        self.blocks.iter().map(Block::doc_count).sum()
    }
}
