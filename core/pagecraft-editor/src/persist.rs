//! Background persistence for an editing session.
//!
//! Every mutation hands a full snapshot to a per-session persister task over a
//! channel and returns immediately. The task writes snapshots one at a time in
//! the order they were scheduled, so the last scheduled write is the last one
//! applied. Progress is published through a `watch` channel as a
//! [`SaveStatus`].

use crate::error::{EditorError, EditorResult};
use pagecraft_model::{Block, PageConfig};
use pagecraft_storage::PageStore;
use pagecraft_types::PageId;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

/// Kind of transient save feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// A transient message about a finished save. Cleared automatically after
/// the configured feedback lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Sequence number of the save this reports on.
    pub seq: u64,
    pub kind: FeedbackKind,
    pub message: String,
}

/// Observable state of a session's saves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveStatus {
    /// Saves handed to the persister so far.
    pub scheduled: u64,
    /// Sequence number of the last finished save.
    pub completed: u64,
    /// Feedback on the last finished save, until dismissed.
    pub feedback: Option<Feedback>,
    /// Error of the last save, kept until a later save succeeds.
    pub last_error: Option<String>,
}

impl SaveStatus {
    /// Whether a scheduled write has not finished yet.
    pub fn is_saving(&self) -> bool {
        self.completed < self.scheduled
    }

    /// Whether stored state may lag behind the session.
    pub fn is_dirty(&self) -> bool {
        self.is_saving() || self.last_error.is_some()
    }
}

/// What a scheduled save writes.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SaveRequest {
    Blocks(Vec<Block>),
    Config(PageConfig),
}

struct SaveJob {
    seq: u64,
    request: SaveRequest,
}

/// Handle to a session's persister task.
///
/// The task exits once the handle is dropped and every queued save is done.
pub(crate) struct Persister {
    jobs: mpsc::UnboundedSender<SaveJob>,
    status: Arc<watch::Sender<SaveStatus>>,
}

impl Persister {
    /// Spawns the persister task on the current tokio runtime.
    pub(crate) fn spawn(
        store: Arc<dyn PageStore>,
        page_id: PageId,
        feedback_ttl: Duration,
    ) -> EditorResult<Self> {
        let runtime = Handle::try_current().map_err(|e| EditorError::NoRuntime(e.to_string()))?;
        let (jobs, rx) = mpsc::unbounded_channel();
        let (status, _) = watch::channel(SaveStatus::default());
        let status = Arc::new(status);

        runtime.spawn(run(store, page_id, rx, status.clone(), feedback_ttl));

        Ok(Self { jobs, status })
    }

    /// Queues a save and returns its sequence number.
    pub(crate) fn schedule(&self, request: SaveRequest) -> u64 {
        let mut seq = 0;
        self.status.send_modify(|s| {
            s.scheduled += 1;
            seq = s.scheduled;
        });

        if self.jobs.send(SaveJob { seq, request }).is_err() {
            warn!(seq, "Persister task is gone, save dropped");
            self.status.send_modify(|s| {
                s.completed = seq;
                s.last_error = Some("persister stopped".to_string());
            });
        }
        seq
    }

    /// Returns the current status.
    pub(crate) fn status(&self) -> SaveStatus {
        self.status.borrow().clone()
    }

    /// Subscribes to status changes.
    pub(crate) fn subscribe(&self) -> watch::Receiver<SaveStatus> {
        self.status.subscribe()
    }

    /// Waits until every save scheduled so far has finished.
    pub(crate) async fn flush(&self) {
        let mut rx = self.status.subscribe();
        let target = rx.borrow().scheduled;
        // The sender lives in `self`, so the channel cannot close here.
        let _ = rx.wait_for(|s| s.completed >= target).await;
    }
}

async fn run(
    store: Arc<dyn PageStore>,
    page_id: PageId,
    mut jobs: mpsc::UnboundedReceiver<SaveJob>,
    status: Arc<watch::Sender<SaveStatus>>,
    feedback_ttl: Duration,
) {
    // A failure is only cleared by a later successful save of the same kind.
    let mut blocks_error: Option<String> = None;
    let mut config_error: Option<String> = None;

    while let Some(SaveJob { seq, request }) = jobs.recv().await {
        let result = match &request {
            SaveRequest::Blocks(blocks) => store.save_page_blocks(&page_id, blocks).await,
            SaveRequest::Config(config) => store.save_page_config(&page_id, config).await,
        };

        let feedback = match result {
            Ok(()) => {
                debug!(page_id = %page_id, seq, "Page saved");
                Feedback {
                    seq,
                    kind: FeedbackKind::Success,
                    message: "Page saved".to_string(),
                }
            }
            Err(e) => {
                warn!(page_id = %page_id, seq, error = %e, "Page save failed");
                Feedback {
                    seq,
                    kind: FeedbackKind::Error,
                    message: format!("Failed to save page: {e}"),
                }
            }
        };

        let error = match feedback.kind {
            FeedbackKind::Success => None,
            FeedbackKind::Error => Some(feedback.message.clone()),
        };
        match request {
            SaveRequest::Blocks(_) => blocks_error = error,
            SaveRequest::Config(_) => config_error = error,
        }
        let last_error = blocks_error.clone().or_else(|| config_error.clone());

        status.send_modify(|s| {
            s.completed = seq;
            s.last_error = last_error;
            s.feedback = Some(feedback);
        });

        tokio::spawn(dismiss_after(status.clone(), seq, feedback_ttl));
    }
    debug!(page_id = %page_id, "Persister stopped");
}

async fn dismiss_after(status: Arc<watch::Sender<SaveStatus>>, seq: u64, ttl: Duration) {
    tokio::time::sleep(ttl).await;
    status.send_if_modified(|s| match &s.feedback {
        Some(feedback) if feedback.seq == seq => {
            s.feedback = None;
            true
        }
        _ => false,
    });
}
