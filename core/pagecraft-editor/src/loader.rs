//! Loading and deleting stored pages.

use crate::error::{EditorError, EditorResult};
use pagecraft_model::Page;
use pagecraft_storage::{PageStore, StorageError};
use pagecraft_types::PageId;
use tracing::{debug, info};

/// Loads a page by slug path or by id.
///
/// The path is tried first (direct links), then the id (internal lists) if
/// `identifier` parses as one. Stored content that fails to parse loads as
/// an empty block list.
pub async fn load_page(store: &dyn PageStore, identifier: &str) -> EditorResult<Page> {
    if let Some(record) = store.find_by_path(identifier).await? {
        debug!(page_id = %record.id, path = identifier, "Page loaded by path");
        return Ok(record.to_page());
    }

    if let Ok(id) = PageId::parse(identifier) {
        if let Some(record) = store.find_by_id(&id).await? {
            debug!(page_id = %id, "Page loaded by id");
            return Ok(record.to_page());
        }
    }

    Err(EditorError::NotFound(identifier.to_string()))
}

/// Deletes a page with all its blocks and their documents.
pub async fn delete_page(store: &dyn PageStore, id: &PageId) -> EditorResult<()> {
    match store.delete_page(id).await {
        Ok(()) => {
            info!(page_id = %id, "Page deleted");
            Ok(())
        }
        Err(StorageError::NotFound(_)) => Err(EditorError::NotFound(id.to_string())),
        Err(e) => Err(e.into()),
    }
}
