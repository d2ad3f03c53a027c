use std::collections::HashMap;

use super::{PreferenceStore, StoreError};

/// In-memory preference store.
///
/// Stands in for durable storage in tests; also the fallback when the
/// on-disk store cannot be opened, so the app still runs (without
/// persistence) instead of failing at startup.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw entry, bypassing the envelope. Used to simulate
    /// legacy or corrupted data.
    pub fn with_raw(mut self, key: &str, raw: &str) -> Self {
        self.entries.insert(key.to_string(), raw.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_raw(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get_raw("theme").unwrap(), None);
    }

    #[test]
    fn set_then_get() {
        let mut store = MemoryStore::new();
        store.set_raw("theme", "x").unwrap();
        assert_eq!(store.get_raw("theme").unwrap().as_deref(), Some("x"));
        store.remove("theme").unwrap();
        store.remove("theme").unwrap();
        assert!(store.is_empty());
    }
}
