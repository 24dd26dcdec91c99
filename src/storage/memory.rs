use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::KeyValueStorage;
use crate::error::Result;

/// In-memory storage
///
/// Clones share the same underlying map, which lets a test hand one clone to a
/// store and later open a second store on the same data to simulate a reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn storage_name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("likes").unwrap(), None);
    }

    #[test]
    fn test_set_replaces_value() {
        let storage = MemoryStorage::new();
        storage.set("likes", "[1]").unwrap();
        storage.set("likes", "[2]").unwrap();
        assert_eq!(storage.get("likes").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set("likes", "[]").unwrap();
        assert_eq!(other.get("likes").unwrap().as_deref(), Some("[]"));
    }
}
