//! Local-directory file storage.
//!
//! Writes each upload as a flat file under a root directory and hands back a
//! URL under a configured base. Serving that base is someone else's job.

use crate::error::{StorageError, StorageResult};
use crate::traits::FileStore;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Directory file store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryFileStoreConfig {
    /// Directory uploads are written into. Created on first upload.
    pub root: PathBuf,
    /// URL prefix the directory is served under.
    pub base_url: String,
}

impl Default for DirectoryFileStoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("uploads"),
            base_url: "/uploads".to_string(),
        }
    }
}

/// Stores uploads as files in a local directory.
#[derive(Debug, Clone)]
pub struct DirectoryFileStore {
    config: DirectoryFileStoreConfig,
}

impl DirectoryFileStore {
    pub fn new(config: DirectoryFileStoreConfig) -> Self {
        Self { config }
    }

    /// Returns the upload directory.
    pub fn root(&self) -> &Path {
        &self.config.root
    }

    /// Names are stored flat: anything that could escape the root is refused.
    fn check_name(name: &str) -> StorageResult<()> {
        let invalid = name.is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\', '\0']);
        if invalid {
            return Err(StorageError::InvalidName(name.to_string()));
        }
        Ok(())
    }

    fn url_for(&self, name: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(name)
        )
    }
}

#[async_trait]
impl FileStore for DirectoryFileStore {
    fn provider_name(&self) -> &'static str {
        "directory"
    }

    async fn put_file(&self, bytes: &[u8], name: &str) -> StorageResult<String> {
        Self::check_name(name)?;

        if !fs::try_exists(&self.config.root).await? {
            fs::create_dir_all(&self.config.root).await?;
            info!(root = %self.config.root.display(), "Created upload directory");
        }

        let path = self.config.root.join(name);
        fs::write(&path, bytes).await?;
        debug!(path = %path.display(), size_bytes = bytes.len(), "Stored upload");
        Ok(self.url_for(name))
    }
}
