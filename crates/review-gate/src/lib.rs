mod gate;
mod language;
mod storage;

pub use gate::{GateState, ReviewGate};
pub use language::LanguagePreference;
pub use storage::{
    FileStore, KeyValueStore, MemoryStore, StoreError, LANGUAGE_KEY, PROGRESS_KEY, SUBMITTED_KEY,
};
