use crate::table::FeedbackTable;
use review_gate::{KeyValueStore, ReviewGate, StoreError, PROGRESS_KEY, SUBMITTED_KEY};
use std::time::Duration;
use survey_core::{FeedbackInput, FeedbackRecord, NewFeedback};
use thiserror::Error;
use tracing::{error, info, warn};

pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("feedback already submitted from this profile")]
    AlreadySubmitted,
    #[error("feedback form is incomplete")]
    InvalidRecord,
    #[error("failed to submit feedback: {0}")]
    SubmitFailed(String),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl SubmitError {
    /// Whether the respondent may simply try again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmitError::SubmitFailed(_))
    }
}

/// Sends at most one feedback record per profile.
///
/// `submit` borrows the guard mutably, so a session cannot start a second
/// submission while one is still in flight.
pub struct SubmissionGuard<S, T> {
    store: S,
    table: T,
    timeout: Duration,
}

impl<S: KeyValueStore, T: FeedbackTable> SubmissionGuard<S, T> {
    pub fn new(store: S, table: T) -> Self {
        Self {
            store,
            table,
            timeout: DEFAULT_SUBMIT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// For display only. An unreadable flag shows as not submitted, but
    /// `submit` refuses to send in that case.
    pub fn has_submitted(&self) -> bool {
        match self.store.read(SUBMITTED_KEY) {
            Ok(flag) => flag.is_some(),
            Err(e) => {
                warn!(error = %e, "submission flag unreadable");
                false
            }
        }
    }

    pub async fn submit(&mut self, input: &FeedbackInput) -> Result<FeedbackRecord, SubmitError> {
        // fail closed: no insert unless the flag is known to be absent
        if self.store.read(SUBMITTED_KEY)?.is_some() {
            return Err(SubmitError::AlreadySubmitted);
        }

        let progress = ReviewGate::new(&self.store).load();
        let record = NewFeedback::from_input(input, progress).ok_or(SubmitError::InvalidRecord)?;

        let stored = match tokio::time::timeout(self.timeout, self.table.insert(&record)).await {
            Ok(Ok(stored)) => stored,
            Ok(Err(e)) => {
                warn!(error = %e, "feedback insert failed");
                return Err(SubmitError::SubmitFailed(e.to_string()));
            }
            Err(_) => {
                warn!(timeout_secs = self.timeout.as_secs_f64(), "feedback insert timed out");
                return Err(SubmitError::SubmitFailed(format!(
                    "no response within {:?}",
                    self.timeout
                )));
            }
        };

        // The row exists now; a failure below only affects this profile.
        if let Err(e) = self.store.write(SUBMITTED_KEY, b"true") {
            error!(id = %stored.id, error = %e, "feedback stored but submission flag not saved");
            return Err(e.into());
        }
        if let Err(e) = self.store.remove(PROGRESS_KEY) {
            error!(id = %stored.id, error = %e, "submission flag saved but review progress not cleared");
        }

        info!(id = %stored.id, theme = %stored.preferred_color, "feedback submitted");
        Ok(stored)
    }

    pub fn table(&self) -> &T {
        &self.table
    }
}
