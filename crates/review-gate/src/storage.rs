use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Progress of viewed themes, JSON `{green,purple,blue}`.
pub const PROGRESS_KEY: &str = "viewed_themes";
/// Present once a submission succeeded. Never removed by the survey.
pub const SUBMITTED_KEY: &str = "feedback_submitted";
/// `en` or `hi`.
pub const LANGUAGE_KEY: &str = "selected_language";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error on key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Synchronous key-value persistence scoped to one respondent profile.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    fn write(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// In-process store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .lock()
            .map(|m| m.contains_key(key))
            .unwrap_or(false)
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// One file per key inside a profile directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn io_err(key: &str) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
        move |source| StoreError::Io {
            key: key.to_string(),
            source,
        }
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_err(key)(e)),
        }
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(Self::io_err(key))?;
        // write-then-rename so a crash never leaves a half-written value
        let tmp = self.dir.join(format!(".{key}.tmp"));
        fs::write(&tmp, value).map_err(Self::io_err(key))?;
        fs::rename(&tmp, self.path_for(key)).map_err(Self::io_err(key))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_err(key)(e)),
        }
    }
}
