mod common;

use common::{pdf, FailingFileStore};
use pagecraft_editor::{
    AttachmentManager, AttachmentPolicy, EditorError, FileUpload, ValidationError,
    DEFAULT_ALLOWED_MIME_TYPES, MAX_UPLOAD_BYTES,
};
use pagecraft_model::{Block, Document};
use pagecraft_storage::MemoryFileStore;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn upload(size_bytes: u64, mime_type: &str) -> FileUpload {
    FileUpload {
        name: "file".into(),
        size_bytes,
        mime_type: mime_type.into(),
        bytes: Vec::new(),
    }
}

// ── Policy ───────────────────────────────────────────────────────

#[test]
fn default_policy() {
    let policy = AttachmentPolicy::default();
    assert_eq!(policy.max_bytes, 52_428_800);
    assert_eq!(policy.max_bytes, MAX_UPLOAD_BYTES);
    assert_eq!(policy.allowed_mime_types.len(), DEFAULT_ALLOWED_MIME_TYPES.len());
}

#[test]
fn every_default_type_is_allowed() {
    let policy = AttachmentPolicy::default();
    for mime in DEFAULT_ALLOWED_MIME_TYPES {
        assert_eq!(policy.validate(&upload(1, mime)), Ok(()), "{mime}");
    }
}

#[test]
fn mime_comparison_ignores_case_and_padding() {
    let policy = AttachmentPolicy::default();
    assert!(policy.allows_mime("Application/PDF"));
    assert!(policy.allows_mime(" image/png "));
    assert!(!policy.allows_mime("image/svg+xml"));
    assert!(!policy.allows_mime(""));
}

#[test]
fn exactly_the_limit_is_accepted() {
    let policy = AttachmentPolicy::default();
    assert_eq!(policy.validate(&upload(52_428_800, "text/plain")), Ok(()));
    assert_eq!(
        policy.validate(&upload(52_428_801, "text/plain")),
        Err(ValidationError::FileTooLarge {
            size: 52_428_801,
            limit: 52_428_800
        })
    );
}

#[test]
fn too_large_wins_over_wrong_type() {
    let policy = AttachmentPolicy::default();
    assert!(matches!(
        policy.validate(&upload(u64::MAX, "application/zip")),
        Err(ValidationError::FileTooLarge { .. })
    ));
}

#[test]
fn exe_is_unsupported() {
    let policy = AttachmentPolicy::default();
    assert_eq!(
        policy.validate(&upload(100, "application/x-msdownload")),
        Err(ValidationError::UnsupportedFileType("application/x-msdownload".into()))
    );
}

#[test]
fn custom_policy_deserializes_with_defaults() {
    let policy: AttachmentPolicy = serde_json::from_str(r#"{"max_bytes": 10}"#).unwrap();
    assert_eq!(policy.max_bytes, 10);
    assert!(policy.allows_mime("application/pdf"));
}

#[test]
fn validation_messages() {
    assert_eq!(
        ValidationError::FileTooLarge { size: 2, limit: 1 }.to_string(),
        "file is 2 bytes, the limit is 1 bytes"
    );
    assert_eq!(
        ValidationError::UnsupportedFileType("a/b".into()).to_string(),
        "unsupported file type: a/b"
    );
}

#[test]
fn upload_debug_omits_bytes() {
    let debug = format!("{:?}", pdf("a.pdf"));
    assert!(debug.contains("a.pdf"));
    assert!(!debug.contains("bytes: ["));
}

#[test]
fn new_upload_declares_byte_length() {
    let upload = FileUpload::new("a.txt", "text/plain", b"hello".to_vec());
    assert_eq!(upload.size_bytes, 5);
}

// ── Manager ──────────────────────────────────────────────────────

#[tokio::test]
async fn attach_appends_at_end() {
    let files = Arc::new(MemoryFileStore::new());
    let manager = AttachmentManager::new(AttachmentPolicy::default(), files.clone());
    let mut block = Block::new("Homework", "");
    block.docs.push(Document::new("old.pdf", "memory://old.pdf"));

    let doc = manager.attach(&mut block, pdf("new.pdf")).await.unwrap();

    assert_eq!(block.docs.len(), 2);
    assert_eq!(block.docs[0].name, "old.pdf");
    assert_eq!(block.docs[1], doc);
    assert_eq!(files.names().await.len(), 1);
}

#[tokio::test]
async fn same_name_twice_keeps_both_files() {
    let files = Arc::new(MemoryFileStore::new());
    let manager = AttachmentManager::new(AttachmentPolicy::default(), files.clone());
    let mut block = Block::new("Homework", "");

    let first = FileUpload::new("notes.pdf", "application/pdf", b"first".to_vec());
    let second = FileUpload::new("notes.pdf", "application/pdf", b"second".to_vec());
    manager.attach(&mut block, first).await.unwrap();
    manager.attach(&mut block, second).await.unwrap();

    assert_eq!(block.docs.len(), 2);
    assert_eq!(block.docs[0].name, "notes.pdf");
    assert_eq!(block.docs[1].name, "notes.pdf");
    assert_ne!(block.docs[0].url, block.docs[1].url);
    assert_eq!(files.names().await.len(), 2);

    let stored = |doc: &Document| doc.url.trim_start_matches(MemoryFileStore::URL_SCHEME).to_string();
    assert_eq!(files.get(&stored(&block.docs[0])).await.unwrap(), b"first");
    assert_eq!(files.get(&stored(&block.docs[1])).await.unwrap(), b"second");
}

#[tokio::test]
async fn rejected_upload_never_reaches_storage() {
    let files = Arc::new(MemoryFileStore::new());
    let manager = AttachmentManager::new(AttachmentPolicy::default(), files.clone());
    let mut block = Block::new("Homework", "");

    let err = manager
        .attach(&mut block, upload(10, "application/x-msdownload"))
        .await
        .unwrap_err();

    assert!(matches!(err, EditorError::Validation(_)));
    assert!(block.docs.is_empty());
    assert!(files.names().await.is_empty());
}

#[tokio::test]
async fn storage_failure_is_atomic() {
    let manager = AttachmentManager::new(AttachmentPolicy::default(), Arc::new(FailingFileStore));
    let mut block = Block::new("Homework", "");
    block.docs.push(Document::new("kept.pdf", "u"));

    let err = manager.attach(&mut block, pdf("lost.pdf")).await.unwrap_err();

    assert!(err.to_string().contains("bucket unavailable"));
    assert_eq!(block.docs, vec![Document::new("kept.pdf", "u")]);
}

#[test]
fn remove_out_of_range_mutates_nothing() {
    let mut block = Block::new("Homework", "");
    block.docs.push(Document::new("a", "u"));
    let err = AttachmentManager::remove(&mut block, 1).unwrap_err();
    assert!(matches!(err, EditorError::DocumentIndexOutOfRange { index: 1, len: 1 }));
    assert_eq!(block.docs.len(), 1);
}

#[test]
fn remove_returns_removed_document() {
    let mut block = Block::new("Homework", "");
    block.docs.push(Document::new("a", "1"));
    block.docs.push(Document::new("b", "2"));
    block.docs.push(Document::new("c", "3"));

    let removed = AttachmentManager::remove(&mut block, 0).unwrap();

    assert_eq!(removed.name, "a");
    assert_eq!(block.docs, vec![Document::new("b", "2"), Document::new("c", "3")]);
}
