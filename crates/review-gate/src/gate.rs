use crate::storage::{KeyValueStore, StoreError, PROGRESS_KEY};
use survey_core::{Theme, ViewProgress};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    NotLoaded,
    Loaded(ViewProgress),
}

/// Tracks which themes were marked viewed and whether feedback is unlocked.
///
/// Every mutation is written through to the store before the in-memory
/// state changes, so a failed write leaves both sides as they were.
pub struct ReviewGate<S> {
    store: S,
    state: GateState,
}

impl<S: KeyValueStore> ReviewGate<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: GateState::NotLoaded,
        }
    }

    /// Reads progress from the store. Missing, unreadable or malformed data
    /// all load as "nothing viewed yet".
    pub fn load(&mut self) -> ViewProgress {
        let progress = match self.store.read(PROGRESS_KEY) {
            Ok(Some(bytes)) => match serde_json::from_slice::<ViewProgress>(&bytes) {
                Ok(progress) => progress,
                Err(e) => {
                    warn!(error = %e, "discarding malformed review progress");
                    ViewProgress::default()
                }
            },
            Ok(None) => ViewProgress::default(),
            Err(e) => {
                warn!(error = %e, "review progress unreadable, starting fresh");
                ViewProgress::default()
            }
        };
        self.state = GateState::Loaded(progress);
        progress
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Current progress; loads first if needed.
    pub fn progress(&mut self) -> ViewProgress {
        match self.state {
            GateState::Loaded(progress) => progress,
            GateState::NotLoaded => self.load(),
        }
    }

    pub fn mark_viewed(&mut self, theme: Theme) -> Result<ViewProgress, StoreError> {
        let next = self.progress().with_viewed(theme);
        let bytes = serde_json::to_vec(&next).expect("serialize progress");
        self.store.write(PROGRESS_KEY, &bytes)?;
        self.state = GateState::Loaded(next);
        debug!(%theme, viewed = next.viewed_count(), "theme marked viewed");
        Ok(next)
    }

    /// False until every theme was marked. A gate that was never loaded is
    /// locked.
    pub fn is_unlocked(&self) -> bool {
        match self.state {
            GateState::Loaded(progress) => progress.all_viewed(),
            GateState::NotLoaded => false,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
