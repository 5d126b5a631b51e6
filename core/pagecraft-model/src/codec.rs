//! Stored form of a page's block list.

use crate::Block;
use tracing::warn;

/// Serializes blocks to the stored JSON array.
pub fn encode_blocks(blocks: &[Block]) -> serde_json::Result<String> {
    serde_json::to_string(blocks)
}

/// Parses a stored block list.
///
/// Missing, blank, unparsable or non-array content yields an empty list: an
/// empty page the administrator can still edit beats a page that will not open.
pub fn decode_blocks(raw: Option<&str>) -> Vec<Block> {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<Block>>(raw) {
        Ok(blocks) => blocks,
        Err(e) => {
            warn!(error = %e, len = raw.len(), "Unparsable page content, treating as empty");
            Vec::new()
        }
    }
}
