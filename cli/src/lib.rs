//! Commands behind the `pagecraft` binary.
//!
//! A page file is the JSON form of a page without its stored id:
//!
//! ```json
//! {"title": "Library", "layout": "left-sidebar", "theme": "default",
//!  "blocks": [{"title": "Sidebar", "body": "", "docs": []}]}
//! ```

use anyhow::{bail, Context, Result};
use pagecraft_editor::{AttachmentManager, EditorConfig, FileUpload};
use pagecraft_layout::{arrange, starter_blocks, Arrangement};
use pagecraft_model::{Block, LayoutId, PageConfig};
use pagecraft_storage::{DirectoryFileStore, DirectoryFileStoreConfig};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// A page as kept in a local JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageFile {
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub config: PageConfig,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl PageFile {
    pub fn read(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read page file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse page file {}", path.display()))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write page file {}", path.display()))
    }
}

/// Reads an editor config file, or returns the defaults.
pub fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    let Some(path) = path else {
        return Ok(EditorConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse config {}", path.display()))
}

/// Renders an arrangement as indented text, one line per slot and block.
pub fn render_arrangement(arrangement: &Arrangement<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "container: {:?}", arrangement.container);
    for slot in &arrangement.slots {
        let _ = writeln!(out, "{}:", slot.name);
        for placement in &slot.placements {
            let _ = writeln!(
                out,
                "  [{}] {} ({}{})",
                placement.index,
                placement.block.title,
                placement.presentation,
                if placement.block.docs.is_empty() {
                    String::new()
                } else {
                    format!(", {} docs", placement.block.docs.len())
                }
            );
        }
    }
    out
}

/// `pagecraft arrange`: shows where each block of a page file lands.
pub fn arrange_command(page_path: &Path, json: bool) -> Result<String> {
    let page = PageFile::read(page_path)?;
    let arrangement = arrange(&page.config.layout, &page.blocks);
    if json {
        return Ok(serde_json::to_string_pretty(&arrangement)?);
    }
    Ok(render_arrangement(&arrangement))
}

/// `pagecraft starter`: prints a new page file for `layout`.
pub fn starter_command(layout: &str, title: &str) -> Result<String> {
    let layout = LayoutId::from(layout);
    if !layout.is_known() {
        bail!("Unknown layout '{layout}'");
    }
    let page = PageFile {
        title: title.to_string(),
        blocks: starter_blocks(&layout),
        config: PageConfig {
            layout,
            ..PageConfig::default()
        },
    };
    Ok(serde_json::to_string_pretty(&page)?)
}

/// `pagecraft check`: runs upload validation on a local file.
pub fn check_command(file: &Path, mime_type: &str, config: &EditorConfig) -> Result<String> {
    let size_bytes = fs::metadata(file)
        .with_context(|| format!("Failed to stat {}", file.display()))?
        .len();
    let upload = FileUpload {
        name: file_name(file)?,
        size_bytes,
        mime_type: mime_type.to_string(),
        bytes: Vec::new(),
    };
    config.attachments.validate(&upload)?;
    Ok(format!("{} ok ({size_bytes} bytes, {mime_type})", upload.name))
}

/// `pagecraft attach`: uploads a file into a directory store and attaches
/// it to a block of a page file, rewriting the page file.
pub async fn attach_command(
    page_path: &Path,
    block_index: usize,
    file: &Path,
    mime_type: &str,
    store: DirectoryFileStoreConfig,
    config: &EditorConfig,
) -> Result<String> {
    let mut page = PageFile::read(page_path)?;
    let block_count = page.blocks.len();
    let Some(block) = page.blocks.get_mut(block_index) else {
        bail!("Page has {block_count} blocks, no block {block_index}");
    };

    let bytes = tokio::fs::read(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let upload = FileUpload::new(file_name(file)?, mime_type, bytes);

    let files = Arc::new(DirectoryFileStore::new(store));
    let manager = AttachmentManager::new(config.attachments.clone(), files);
    let document = manager.attach(block, upload).await?;
    info!(name = %document.name, url = %document.url, block_index, "Attached document");

    page.write(page_path)?;
    Ok(format!("{} -> {}", document.name, document.url))
}

fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("{} has no file name", path.display()))
}
