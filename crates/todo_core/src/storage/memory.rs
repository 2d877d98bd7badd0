//! In-memory local storage, used by tests and ephemeral sessions.

use super::{check_quota, entry_bytes, LocalStorage, StorageResult};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryLocalStorage {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryLocalStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the total key + value bytes held by this store.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    pub fn used_bytes(&self) -> usize {
        self.entries
            .iter()
            .map(|(key, value)| entry_bytes(key, value))
            .sum()
    }
}

impl LocalStorage for MemoryLocalStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let others: usize = self
            .entries
            .iter()
            .filter(|(existing, _)| existing.as_str() != key)
            .map(|(existing, stored)| entry_bytes(existing, stored))
            .sum();
        check_quota(self.quota_bytes, others + entry_bytes(key, value))?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryLocalStorage;
    use crate::storage::{LocalStorage, StorageError};

    #[test]
    fn quota_rejects_oversized_write_and_keeps_previous_value() {
        let mut storage = MemoryLocalStorage::with_quota(8);
        storage.set_item("k", "small").unwrap();

        let err = storage.set_item("k", "far too large").unwrap_err();
        assert!(matches!(
            err,
            StorageError::QuotaExceeded {
                requested_bytes: 14,
                quota_bytes: 8
            }
        ));
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("small"));
    }

    #[test]
    fn replacing_a_value_only_counts_it_once() {
        let mut storage = MemoryLocalStorage::with_quota(6);
        storage.set_item("k", "aaaaa").unwrap();
        storage.set_item("k", "bbbbb").unwrap();
        assert_eq!(storage.used_bytes(), 6);
    }
}
