use thiserror::Error;
use web_sys::Storage;

use super::record::PreorderRecord;
use crate::config;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("could not encode preorders: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, if the browser lets us have it.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn from_window() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// Stored preorders, most recent first. Unreadable JSON counts as empty.
pub fn load(store: &dyn KeyValueStore) -> Result<Vec<PreorderRecord>, StorageError> {
    let Some(raw) = store.get(config::PREORDER_STORAGE_KEY)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(records) => Ok(records),
        Err(e) => {
            log::warn!("discarding unreadable preorder history: {}", e);
            Ok(Vec::new())
        }
    }
}

/// Prepends `record` and writes back at most `PREORDER_HISTORY_CAP` entries.
pub fn append(store: &dyn KeyValueStore, record: PreorderRecord) -> Result<Vec<PreorderRecord>, StorageError> {
    let mut records = load(store)?;
    records.insert(0, record);
    records.truncate(config::PREORDER_HISTORY_CAP);
    store.set(config::PREORDER_STORAGE_KEY, &serde_json::to_string(&records)?)?;
    Ok(records)
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    items: std::cell::RefCell<std::collections::HashMap<String, String>>,
    read_only: bool,
}

#[cfg(test)]
impl MemoryStore {
    /// A store whose writes fail the way a full quota does.
    pub fn read_only() -> Self {
        Self { read_only: true, ..Default::default() }
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write("QuotaExceededError".into()));
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preorder::record::PreorderInput;

    fn record(name: &str, ts: i64) -> PreorderRecord {
        PreorderRecord::from_input(&PreorderInput { name: name.into(), ..Default::default() }, ts)
    }

    #[test]
    fn newest_first() {
        let store = MemoryStore::default();
        append(&store, record("first", 1)).unwrap();
        append(&store, record("second", 2)).unwrap();
        let names: Vec<_> = load(&store).unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["second", "first"]);
    }

    #[test]
    fn capped_at_twenty() {
        let store = MemoryStore::default();
        for i in 0..25 {
            append(&store, record(&format!("n{i}"), i)).unwrap();
        }
        let records = load(&store).unwrap();
        assert_eq!(records.len(), config::PREORDER_HISTORY_CAP);
        assert_eq!(records[0].name, "n24");
        assert_eq!(records[19].name, "n5");
    }

    #[test]
    fn corrupt_history_starts_over() {
        let store = MemoryStore::default();
        store.set(config::PREORDER_STORAGE_KEY, "{not json").unwrap();
        assert!(load(&store).unwrap().is_empty());
        assert_eq!(append(&store, record("fresh", 1)).unwrap().len(), 1);
    }

    #[test]
    fn write_failures_surface_as_errors() {
        let store = MemoryStore::read_only();
        assert!(matches!(append(&store, record("x", 1)), Err(StorageError::Write(_))));
    }

    #[test]
    fn missing_storage_is_unavailable() {
        let store = LocalStore { storage: None };
        assert!(matches!(store.get("k"), Err(StorageError::Unavailable)));
        assert!(matches!(append(&store, record("x", 1)), Err(StorageError::Unavailable)));
    }
}
