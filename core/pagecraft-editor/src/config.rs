use crate::attachment::AttachmentPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for editing sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Upload limits.
    pub attachments: AttachmentPolicy,
    /// How long save feedback stays visible (ms).
    pub feedback_ttl_ms: u64,
}

impl EditorConfig {
    /// Returns the feedback lifetime.
    pub fn feedback_ttl(&self) -> Duration {
        Duration::from_millis(self.feedback_ttl_ms)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            attachments: AttachmentPolicy::default(),
            feedback_ttl_ms: 3_000,
        }
    }
}
