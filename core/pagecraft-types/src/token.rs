//! Uniqueness tokens for uploaded file names.
//!
//! Storage backends receive a suggested name and may overwrite an existing
//! object with the same name. The engine prefixes every suggested name with a
//! token derived from the wall clock so two uploads of `notes.pdf` land under
//! different keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Last token issued in this process.
static LAST_ISSUED: AtomicU64 = AtomicU64::new(0);

/// A wall-clock token in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadToken(u64);

impl UploadToken {
    /// Creates a fresh token for the current time.
    ///
    /// Never returns the same token twice within a process, so the value may
    /// run ahead of the wall clock during bursts. A clock set before the
    /// epoch counts as zero rather than failing.
    #[must_use]
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        let next = |last: u64| millis.max(last.saturating_add(1));
        let last = LAST_ISSUED
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(next(last)))
            .unwrap_or_else(|last| last);
        Self(next(last))
    }

    /// Creates a token from a fixed millisecond value (for tests or replay).
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Returns the millisecond value.
    #[must_use]
    pub const fn millis(&self) -> u64 {
        self.0
    }

    /// Prefixes `name` with this token: `<millis>_<name>`.
    #[must_use]
    pub fn prefix(&self, name: &str) -> String {
        format!("{}_{}", self.0, name)
    }
}

impl fmt::Display for UploadToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
