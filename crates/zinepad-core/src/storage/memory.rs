//! In-memory storage implementation.

use super::{Storage, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    payloads: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage pre-seeded with one payload.
    pub fn with_payload(key: &str, payload: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut payloads) = storage.payloads.write() {
            payloads.insert(key.to_string(), payload.into());
        }
        storage
    }
}

fn lock_error(e: impl std::fmt::Display) -> StorageError {
    StorageError::Other(format!("Lock error: {}", e))
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<String> {
        let payloads = self.payloads.read().map_err(lock_error)?;
        payloads
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    fn write(&self, key: &str, payload: &str) -> StorageResult<()> {
        let mut payloads = self.payloads.write().map_err(lock_error)?;
        payloads.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut payloads = self.payloads.write().map_err(lock_error)?;
        payloads.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> StorageResult<bool> {
        let payloads = self.payloads.read().map_err(lock_error)?;
        Ok(payloads.contains_key(key))
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let payloads = self.payloads.read().map_err(lock_error)?;
        Ok(payloads.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_read() {
        let storage = MemoryStorage::new();
        storage.write("test", "{}").unwrap();
        assert_eq!(storage.read("test").unwrap(), "{}");
    }

    #[test]
    fn test_not_found() {
        let storage = MemoryStorage::new();
        let result = storage.read("nonexistent");
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_exists_and_remove() {
        let storage = MemoryStorage::with_payload("test", "[]");
        assert!(storage.exists("test").unwrap());
        storage.remove("test").unwrap();
        assert!(!storage.exists("test").unwrap());
        storage.remove("test").unwrap();
    }

    #[test]
    fn test_list() {
        let storage = MemoryStorage::new();
        storage.write("doc1", "1").unwrap();
        storage.write("doc2", "2").unwrap();

        let list = storage.list().unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains(&"doc1".to_string()));
        assert!(list.contains(&"doc2".to_string()));
    }
}
