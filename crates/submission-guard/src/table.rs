use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use survey_core::{newest_first, FeedbackRecord, NewFeedback};
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("feedback table request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("feedback table unavailable: {0}")]
    Unavailable(String),
}

/// The hosted feedback table: insert one row, select all rows newest first.
#[async_trait]
pub trait FeedbackTable: Send + Sync {
    async fn insert(&self, record: &NewFeedback) -> Result<FeedbackRecord, TableError>;
    async fn load_all(&self) -> Result<Vec<FeedbackRecord>, TableError>;
}

#[async_trait]
impl<T: FeedbackTable + ?Sized> FeedbackTable for Arc<T> {
    async fn insert(&self, record: &NewFeedback) -> Result<FeedbackRecord, TableError> {
        (**self).insert(record).await
    }

    async fn load_all(&self) -> Result<Vec<FeedbackRecord>, TableError> {
        (**self).load_all().await
    }
}

/// In-process table for tests and offline runs.
pub struct MemoryTable {
    pub records: Mutex<Vec<FeedbackRecord>>,
    pub insert_calls: AtomicU64,
    pub fail_inserts: AtomicBool,
    pub insert_delay: Option<Duration>,
}

impl Default for MemoryTable {
    fn default() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            insert_calls: AtomicU64::new(0),
            fail_inserts: AtomicBool::new(false),
            insert_delay: None,
        }
    }
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<FeedbackRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    pub fn insert_calls(&self) -> u64 {
        self.insert_calls.load(Ordering::Relaxed)
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail_inserts.store(failing, Ordering::Relaxed);
    }
}

#[async_trait]
impl FeedbackTable for MemoryTable {
    async fn insert(&self, record: &NewFeedback) -> Result<FeedbackRecord, TableError> {
        self.insert_calls.fetch_add(1, Ordering::Relaxed);
        if let Some(delay) = self.insert_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_inserts.load(Ordering::Relaxed) {
            return Err(TableError::Unavailable("insert rejected".to_string()));
        }
        let stored = FeedbackRecord::from_new(record.clone(), Uuid::new_v4(), Utc::now());
        self.records.lock().await.push(stored.clone());
        Ok(stored)
    }

    async fn load_all(&self) -> Result<Vec<FeedbackRecord>, TableError> {
        let mut records = self.records.lock().await.clone();
        newest_first(&mut records);
        Ok(records)
    }
}
