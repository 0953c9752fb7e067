use crate::storage::{Storage, StorageError};
use dashmap::DashMap;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: DashMap<String, String>
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            slots: DashMap::new()
        }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value);
        Ok(())
    }
}
