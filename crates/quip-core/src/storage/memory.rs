//! In-memory key-value storage
//!
//! Used in tests and ephemeral runs where nothing should touch disk.

use std::collections::HashMap;
use std::sync::Mutex;

use super::error::StorageResult;
use super::KeyValueStore;

/// HashMap-backed store with no durability
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}
