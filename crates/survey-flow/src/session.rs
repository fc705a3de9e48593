use crate::route::{FeedbackView, ReviewCursor, ReviewView, Route, View};
use review_gate::{KeyValueStore, LanguagePreference, ReviewGate, StoreError};
use std::time::Duration;
use submission_guard::{FeedbackTable, SubmissionGuard, SubmitError, TableError};
use survey_core::{FeedbackInput, FeedbackRecord, Language, Theme, ViewProgress};
use survey_report::SurveyReport;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("{} theme(s) still need to be reviewed", remaining.len())]
    Locked { remaining: Vec<Theme> },
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// One respondent's state: everything is read from and written to the
/// profile store `S`, feedback goes to table `T`.
pub struct SurveySession<S, T> {
    language: LanguagePreference<S>,
    gate: ReviewGate<S>,
    guard: SubmissionGuard<S, T>,
    cursor: ReviewCursor,
}

impl<S, T> SurveySession<S, T>
where
    S: KeyValueStore + Clone,
    T: FeedbackTable,
{
    pub fn new(store: S, table: T) -> Self {
        let mut gate = ReviewGate::new(store.clone());
        gate.load();
        Self {
            language: LanguagePreference::new(store.clone()),
            gate,
            guard: SubmissionGuard::new(store, table),
            cursor: ReviewCursor::default(),
        }
    }

    pub fn with_submit_timeout(mut self, timeout: Duration) -> Self {
        self.guard = self.guard.with_timeout(timeout);
        self
    }

    pub fn language(&self) -> Option<Language> {
        self.language.load()
    }

    pub fn choose_language(&self, language: Language) -> Result<(), StoreError> {
        self.language.set(language)?;
        info!(%language, "language selected");
        Ok(())
    }

    pub fn progress(&mut self) -> ViewProgress {
        self.gate.progress()
    }

    pub fn has_submitted(&self) -> bool {
        self.guard.has_submitted()
    }

    pub fn cursor(&self) -> ReviewCursor {
        self.cursor
    }

    pub fn select(&mut self, theme: Theme) {
        self.cursor.select(theme);
    }

    /// Marks `theme` viewed and moves the review to the next tab. Returns
    /// the new progress and the tab moved to, if any.
    pub fn mark_viewed(&mut self, theme: Theme) -> Result<(ViewProgress, Option<Theme>), StoreError> {
        let progress = self.gate.mark_viewed(theme)?;
        self.cursor.select(theme);
        let next = self.cursor.advance();
        Ok((progress, next))
    }

    pub fn resolve(&mut self, route: Route) -> View {
        if self.language().is_none() {
            return View::LanguagePicker;
        }
        match route {
            Route::Home => View::Home,
            Route::Review => {
                let progress = self.gate.progress();
                View::Review(ReviewView {
                    progress,
                    current: self.cursor.current(),
                    unlocked: progress.all_viewed(),
                })
            }
            Route::Feedback => View::Feedback(self.feedback_view()),
            Route::ThankYou => View::ThankYou,
            Route::Admin => View::Admin,
        }
    }

    fn feedback_view(&mut self) -> FeedbackView {
        if self.guard.has_submitted() {
            return FeedbackView::AlreadySubmitted;
        }
        let progress = self.gate.progress();
        if progress.all_viewed() {
            FeedbackView::Form { progress }
        } else {
            FeedbackView::Locked {
                remaining: progress.remaining(),
            }
        }
    }

    /// Sends the form. Refused while the gate is locked; on success the
    /// in-memory gate is reloaded from the now-cleared store.
    pub async fn submit(&mut self, input: &FeedbackInput) -> Result<FeedbackRecord, FlowError> {
        if self.guard.has_submitted() {
            return Err(SubmitError::AlreadySubmitted.into());
        }
        let progress = self.gate.progress();
        if !progress.all_viewed() {
            return Err(FlowError::Locked {
                remaining: progress.remaining(),
            });
        }
        let stored = self.guard.submit(input).await?;
        self.gate.load();
        self.cursor = ReviewCursor::default();
        Ok(stored)
    }

    /// Loads every stored record and folds it into the admin report.
    pub async fn load_report(&self) -> Result<(Vec<FeedbackRecord>, SurveyReport), TableError> {
        let records = self.guard.table().load_all().await?;
        let report = SurveyReport::now(&records);
        Ok((records, report))
    }
}
