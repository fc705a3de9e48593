use crate::error::ApiError;
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use survey_core::{newest_first, FeedbackRecord, NewFeedback};
use tracing::{info, warn};
use uuid::Uuid;

/// The `design_feedback` table: rows in memory, appended to a JSON-lines file.
pub struct FeedbackStore {
    records: Vec<FeedbackRecord>,
    data_file: Option<PathBuf>,
}

impl FeedbackStore {
    /// A table that keeps nothing on disk.
    pub fn in_memory() -> Self {
        Self {
            records: Vec::new(),
            data_file: None,
        }
    }

    /// Opens `path`, reading back every well-formed row. Lines that do not
    /// parse are skipped.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for (lineno, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<FeedbackRecord>(line) {
                Ok(record) => records.push(record),
                Err(e) => warn!(
                    file = %path.display(),
                    line = lineno + 1,
                    error = %e,
                    "skipping unreadable feedback row"
                ),
            }
        }
        info!(file = %path.display(), rows = records.len(), "feedback table loaded");

        Ok(Self {
            records,
            data_file: Some(path.to_path_buf()),
        })
    }

    /// Assigns `id` and `created_at`, appends the row and returns it.
    pub fn insert(&mut self, new: NewFeedback) -> Result<FeedbackRecord, ApiError> {
        if !new.is_valid() {
            return Err(ApiError::InvalidRecord);
        }
        let record = FeedbackRecord::from_new(new, Uuid::new_v4(), Utc::now());

        if let Some(path) = &self.data_file {
            let line = serde_json::to_string(&record)
                .map_err(|e| ApiError::Internal(format!("encode row: {e}")))?;
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{line}")?;
        }

        self.records.push(record.clone());
        Ok(record)
    }

    /// Every row, most recent first.
    pub fn all(&self) -> Vec<FeedbackRecord> {
        let mut records = self.records.clone();
        newest_first(&mut records);
        records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
