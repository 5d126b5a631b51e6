//! Document attachments on blocks.
//!
//! An upload is validated against the [`AttachmentPolicy`] before anything is
//! sent to storage: size first, then MIME type, first failure wins. Only after
//! the file store accepts the bytes is the document appended to the block, so
//! a failed upload never changes `docs`.

use crate::error::{EditorError, EditorResult, ValidationError};
use pagecraft_model::{Block, Document};
use pagecraft_storage::FileStore;
use pagecraft_types::UploadToken;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Largest accepted upload: 50 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// MIME types accepted by default.
pub const DEFAULT_ALLOWED_MIME_TYPES: [&str; 8] = [
    "application/pdf",
    "text/plain",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Limits applied to every upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentPolicy {
    pub max_bytes: u64,
    pub allowed_mime_types: Vec<String>,
}

impl Default for AttachmentPolicy {
    fn default() -> Self {
        Self {
            max_bytes: MAX_UPLOAD_BYTES,
            allowed_mime_types: DEFAULT_ALLOWED_MIME_TYPES
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl AttachmentPolicy {
    /// MIME types compare case-insensitively.
    pub fn allows_mime(&self, mime_type: &str) -> bool {
        let mime_type = mime_type.trim();
        self.allowed_mime_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(mime_type))
    }

    /// Checks an upload against the policy.
    pub fn validate(&self, upload: &FileUpload) -> Result<(), ValidationError> {
        if upload.size_bytes > self.max_bytes {
            return Err(ValidationError::FileTooLarge {
                size: upload.size_bytes,
                limit: self.max_bytes,
            });
        }
        if !self.allows_mime(&upload.mime_type) {
            return Err(ValidationError::UnsupportedFileType(
                upload.mime_type.clone(),
            ));
        }
        Ok(())
    }
}

/// A file picked for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub name: String,
    /// Declared size; the policy checks this, not `bytes.len()`.
    pub size_bytes: u64,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Creates an upload whose declared size is the byte length.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            size_bytes: bytes.len() as u64,
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

impl fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileUpload")
            .field("name", &self.name)
            .field("size_bytes", &self.size_bytes)
            .field("mime_type", &self.mime_type)
            .finish_non_exhaustive()
    }
}

/// Validates uploads and keeps block document lists in step with storage.
#[derive(Clone)]
pub struct AttachmentManager {
    policy: AttachmentPolicy,
    files: Arc<dyn FileStore>,
}

impl AttachmentManager {
    pub fn new(policy: AttachmentPolicy, files: Arc<dyn FileStore>) -> Self {
        Self { policy, files }
    }

    /// Returns the active policy.
    pub fn policy(&self) -> &AttachmentPolicy {
        &self.policy
    }

    /// Validates and stores `upload`, then appends it to `block.docs`.
    ///
    /// The stored object name is prefixed with a fresh [`UploadToken`]; the
    /// document keeps the original name.
    pub async fn attach(&self, block: &mut Block, upload: FileUpload) -> EditorResult<Document> {
        if let Err(e) = self.policy.validate(&upload) {
            warn!(name = %upload.name, mime_type = %upload.mime_type, error = %e, "Upload rejected");
            return Err(e.into());
        }

        let stored_name = UploadToken::now().prefix(&upload.name);
        let url = self.files.put_file(&upload.bytes, &stored_name).await?;
        debug!(
            provider = self.files.provider_name(),
            name = %stored_name,
            size_bytes = upload.size_bytes,
            "Upload stored"
        );

        let document = Document::new(upload.name, url);
        block.docs.push(document.clone());
        Ok(document)
    }

    /// Removes the document at `index` from `block.docs`.
    ///
    /// Confirmation is the caller's concern. The stored object is left in
    /// place.
    pub fn remove(block: &mut Block, index: usize) -> EditorResult<Document> {
        if index >= block.docs.len() {
            return Err(EditorError::DocumentIndexOutOfRange {
                index,
                len: block.docs.len(),
            });
        }
        Ok(block.docs.remove(index))
    }
}

impl fmt::Debug for AttachmentManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachmentManager")
            .field("policy", &self.policy)
            .field("provider", &self.files.provider_name())
            .finish()
    }
}
