use crate::{FeedbackTable, MemoryTable, SubmissionGuard, SubmitError};
use review_gate::{
    KeyValueStore, MemoryStore, ReviewGate, StoreError, PROGRESS_KEY, SUBMITTED_KEY,
};
use std::sync::Arc;
use std::time::Duration;
use survey_core::{FeedbackInput, Theme, ViewProgress};

fn form() -> FeedbackInput {
    FeedbackInput {
        name: " Meera ".into(),
        department: "Accounts".into(),
        preferred_color: Some(Theme::Green),
        remark: " ".into(),
    }
}

fn io_error(key: &str) -> StoreError {
    StoreError::Io {
        key: key.to_string(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    }
}

/// Removes always fail.
struct NoRemoveStore(MemoryStore);

impl KeyValueStore for NoRemoveStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.0.read(key)
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.0.write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Err(io_error(key))
    }
}

/// The submission flag cannot be read.
struct UnreadableFlagStore(MemoryStore);

impl KeyValueStore for UnreadableFlagStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if key == SUBMITTED_KEY {
            return Err(io_error(key));
        }
        self.0.read(key)
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.0.write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.0.remove(key)
    }
}

fn reviewed_store() -> MemoryStore {
    let store = MemoryStore::new();
    let mut gate = ReviewGate::new(store.clone());
    for theme in Theme::ALL {
        gate.mark_viewed(theme).unwrap();
    }
    store
}

#[tokio::test]
async fn successful_submit_snapshots_progress_and_sets_flag() {
    let store = reviewed_store();
    let table = Arc::new(MemoryTable::new());
    let mut guard = SubmissionGuard::new(store.clone(), table.clone());

    let stored = guard.submit(&form()).await.unwrap();
    assert_eq!(stored.name, "Meera");
    assert_eq!(stored.remark, None);
    assert!(stored.viewed_green && stored.viewed_purple && stored.viewed_blue);
    assert!(guard.has_submitted());
    assert!(store.contains(SUBMITTED_KEY));
    assert_eq!(table.load_all().await.unwrap(), vec![stored]);
}

#[tokio::test]
async fn progress_is_cleared_after_success() {
    let store = reviewed_store();
    let mut guard = SubmissionGuard::new(store.clone(), MemoryTable::new());
    guard.submit(&form()).await.unwrap();

    assert!(!store.contains(PROGRESS_KEY));
    let mut gate = ReviewGate::new(store);
    assert_eq!(gate.load(), ViewProgress::default());
    assert!(!gate.is_unlocked());
}

#[tokio::test]
async fn second_submit_is_refused_without_network_call() {
    let table = Arc::new(MemoryTable::new());
    let mut guard = SubmissionGuard::new(reviewed_store(), table.clone());
    guard.submit(&form()).await.unwrap();
    assert_eq!(table.insert_calls(), 1);

    for _ in 0..3 {
        let err = guard.submit(&form()).await.unwrap_err();
        assert!(matches!(err, SubmitError::AlreadySubmitted));
        assert!(!err.is_retryable());
    }
    assert_eq!(table.insert_calls(), 1);
}

#[tokio::test]
async fn flag_from_earlier_session_blocks_submit() {
    let store = reviewed_store();
    store.write(SUBMITTED_KEY, b"true").unwrap();
    let table = Arc::new(MemoryTable::new());
    let mut guard = SubmissionGuard::new(store, table.clone());

    assert!(matches!(
        guard.submit(&form()).await,
        Err(SubmitError::AlreadySubmitted)
    ));
    assert_eq!(table.insert_calls(), 0);
}

#[tokio::test]
async fn invalid_form_never_reaches_table() {
    let table = Arc::new(MemoryTable::new());
    let mut guard = SubmissionGuard::new(reviewed_store(), table.clone());
    let input = FeedbackInput {
        department: "  ".into(),
        ..form()
    };
    assert!(matches!(
        guard.submit(&input).await,
        Err(SubmitError::InvalidRecord)
    ));
    assert_eq!(table.insert_calls(), 0);
    assert!(!guard.has_submitted());
}

#[tokio::test]
async fn failed_insert_is_retryable_and_keeps_progress() {
    let store = reviewed_store();
    let table = Arc::new(MemoryTable::new());
    table.set_failing(true);
    let mut guard = SubmissionGuard::new(store.clone(), table.clone());

    let err = guard.submit(&form()).await.unwrap_err();
    assert!(matches!(err, SubmitError::SubmitFailed(_)));
    assert!(err.is_retryable());
    assert!(!guard.has_submitted());
    assert!(ReviewGate::new(store.clone()).load().all_viewed());

    table.set_failing(false);
    guard.submit(&form()).await.unwrap();
    assert_eq!(table.insert_calls(), 2);
    assert_eq!(table.load_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn slow_insert_times_out_as_submit_failed() {
    let table = MemoryTable {
        insert_delay: Some(Duration::from_millis(200)),
        ..MemoryTable::default()
    };
    let mut guard =
        SubmissionGuard::new(reviewed_store(), table).with_timeout(Duration::from_millis(20));

    let err = guard.submit(&form()).await.unwrap_err();
    assert!(matches!(err, SubmitError::SubmitFailed(_)));
    assert!(!guard.has_submitted());
}

#[tokio::test]
async fn partial_progress_is_snapshotted_as_is() {
    let store = MemoryStore::new();
    ReviewGate::new(store.clone())
        .mark_viewed(Theme::Purple)
        .unwrap();
    let mut guard = SubmissionGuard::new(store, MemoryTable::new());

    let stored = guard.submit(&form()).await.unwrap();
    assert!(!stored.viewed_green);
    assert!(stored.viewed_purple);
    assert!(!stored.viewed_blue);
}

#[tokio::test]
async fn failed_progress_clear_still_reports_success() {
    let store = reviewed_store();
    let table = Arc::new(MemoryTable::new());
    let mut guard = SubmissionGuard::new(NoRemoveStore(store.clone()), table.clone());

    let stored = guard.submit(&form()).await.unwrap();
    assert!(store.contains(SUBMITTED_KEY));
    assert_eq!(table.load_all().await.unwrap(), vec![stored]);

    assert!(matches!(
        guard.submit(&form()).await,
        Err(SubmitError::AlreadySubmitted)
    ));
    assert_eq!(table.insert_calls(), 1);
}

#[tokio::test]
async fn unreadable_flag_blocks_insert() {
    let table = Arc::new(MemoryTable::new());
    let mut guard = SubmissionGuard::new(UnreadableFlagStore(reviewed_store()), table.clone());

    assert!(!guard.has_submitted());
    let err = guard.submit(&form()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Storage(_)));
    assert!(!err.is_retryable());
    assert_eq!(table.insert_calls(), 0);
}
