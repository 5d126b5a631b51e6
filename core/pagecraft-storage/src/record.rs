use pagecraft_model::{decode_blocks, Block, Page, PageConfig};
use pagecraft_types::PageId;
use serde::{Deserialize, Serialize};

/// A page row as the persistence backend keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub id: PageId,
    pub title: String,
    pub path: String,
    /// JSON array of blocks.
    #[serde(default)]
    pub content: Option<String>,
    /// JSON `{layout, theme}` object.
    #[serde(default)]
    pub config: Option<String>,
}

impl PageRecord {
    /// Decodes the row into a [`Page`].
    ///
    /// Corrupt or missing content gives an empty block list and corrupt or
    /// missing config gives the default layout and theme.
    pub fn to_page(&self) -> Page {
        Page {
            id: self.id,
            title: self.title.clone(),
            path: self.path.clone(),
            config: PageConfig::decode(self.config.as_deref()),
            blocks: decode_blocks(self.content.as_deref()),
        }
    }
}

/// The fields an administrator supplies when creating a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPage {
    pub title: String,
    pub path: String,
    pub config: PageConfig,
    pub blocks: Vec<Block>,
}
