use crate::storage::{KeyValueStore, StoreError, LANGUAGE_KEY};
use survey_core::Language;
use tracing::warn;

/// Persisted language choice for a profile.
pub struct LanguagePreference<S> {
    store: S,
}

impl<S: KeyValueStore> LanguagePreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// `None` until a language was chosen. Unrecognized values count as
    /// no choice.
    pub fn load(&self) -> Option<Language> {
        let bytes = match self.store.read(LANGUAGE_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "language preference unreadable");
                return None;
            }
        };
        let raw = String::from_utf8_lossy(&bytes);
        match raw.parse::<Language>() {
            Ok(language) => Some(language),
            Err(e) => {
                warn!(error = %e, "ignoring stored language");
                None
            }
        }
    }

    pub fn set(&self, language: Language) -> Result<(), StoreError> {
        self.store.write(LANGUAGE_KEY, language.as_str().as_bytes())
    }
}
