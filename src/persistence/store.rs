use crate::persistence::files::{atomic_write, read_file};
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// Storage key for the roadmap record
pub const ROADMAP_KEY: &str = "roadmap";
/// Storage key for the notes-history record
pub const NOTES_KEY: &str = "notes";
/// Storage key for the checklist-completion record
pub const CHECKLIST_KEY: &str = "checklist";

/// Raised when a persisted record exists but cannot be decoded
#[derive(Debug, thiserror::Error)]
#[error("stored record `{key}` is corrupt: {source}")]
pub struct CorruptRecord {
    pub key: String,
    #[source]
    pub source: serde_json::Error,
}

/// String-keyed, string-valued storage. The app only ever talks to this
/// trait, so tests can swap in an in-memory store.
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Store backed by one JSON file per key inside the nook directory
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        read_file(self.path_for(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        atomic_write(self.path_for(key), value)
    }
}

/// In-memory store used by tests
#[derive(Default)]
pub struct MemoryStore {
    map: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.map.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load a typed record. A missing key yields `None`; stored text that no
/// longer parses is reported as `CorruptRecord`.
pub fn try_load_record<T: DeserializeOwned>(store: &dyn Store, key: &str) -> Result<Option<T>> {
    match store.get(key)? {
        Some(raw) => {
            let value = serde_json::from_str(&raw).map_err(|source| CorruptRecord {
                key: key.to_string(),
                source,
            })?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Load a typed record, falling back to the default state when the key is
/// missing or the record is corrupt. Corruption is logged, not fatal --
/// the record will be rewritten on the next mutation.
pub fn load_record_or_default<T: DeserializeOwned + Default>(store: &dyn Store, key: &str) -> T {
    match try_load_record(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            eprintln!("Warning: {}; starting from an empty record", e);
            T::default()
        }
    }
}

/// Serialize and overwrite the full record under `key`
pub fn save_record<T: Serialize>(store: &dyn Store, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    store.set(key, &json)
}
