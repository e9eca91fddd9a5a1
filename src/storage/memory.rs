//! In-memory key-value store with switchable failures

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{KeyValueStore, StorageError};

/// Thread-safe in-memory store.
///
/// Clones share the same map, so a second handle sees everything the first
/// wrote. That is how tests simulate an app restart.
#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make every following read fail (or succeed again)
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every following write fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Peek at a stored value, bypassing failure switches
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values().get(key).cloned()
    }

    /// Seed a value, bypassing failure switches
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.values().insert(key.to_string(), value.to_string());
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(format!("read of '{key}' failed")));
        }
        Ok(self.raw(key))
    }

    async fn set_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(format!("write of '{key}' failed")));
        }
        self.insert_raw(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_clones_share_values() {
        let store = MemoryStore::new();
        let other = store.clone();

        assert_ok!(store.set_value("k", "v").await);
        assert_eq!(other.get_value("k").await.unwrap().as_deref(), Some("v"));
        assert_eq!(other.len(), 1);
    }

    #[tokio::test]
    async fn test_failure_switches() {
        let store = MemoryStore::new();
        store.insert_raw("k", "old");

        store.set_fail_writes(true);
        assert_err!(store.set_value("k", "new").await);
        assert_eq!(store.raw("k").as_deref(), Some("old"));

        store.set_fail_reads(true);
        assert_err!(store.get_value("k").await);

        store.set_fail_reads(false);
        store.set_fail_writes(false);
        assert_ok!(store.set_value("k", "new").await);
        assert_eq!(store.get_value("k").await.unwrap().as_deref(), Some("new"));
    }
}
