use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use crate::CoreError;

/// Fixed slot that holds the serialized ledger.
pub const STORAGE_KEY: &str = "pfm_transactions_v1";

/// Abstraction over string key-value persistence backends.
///
/// Values are opaque strings; callers own serialization. Writes replace the
/// previous value for a key as a whole.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}

/// In-memory storage. Clones share the same slots, so a handle kept by a test
/// observes what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a single value.
    pub fn with_value(key: &str, value: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut slots) = storage.slots.write() {
            slots.insert(key.to_string(), value.into());
        }
        storage
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let slots = self.slots.read().map_err(|_| poisoned())?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut slots = self.slots.write().map_err(|_| poisoned())?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        let mut slots = self.slots.write().map_err(|_| poisoned())?;
        slots.remove(key);
        Ok(())
    }
}

fn poisoned() -> CoreError {
    CoreError::Storage("memory storage lock poisoned".into())
}
