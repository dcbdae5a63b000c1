//! Storage abstraction for persistence.
//!
//! Backends store opaque JSON payloads under string keys. Encoding and
//! schema checks live in [`encode_document`] / [`decode_document`] so every
//! backend shares them.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

use crate::document::{Document, DOCUMENT_VERSION};
use std::sync::Arc;
use thiserror::Error;

/// Default key the document is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "zine-document";

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Unsupported document version {found} (expected {expected})")]
    VersionMismatch { found: u64, expected: u32 },
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for document storage backends.
pub trait Storage: Send + Sync {
    /// Read the payload stored under `key`.
    fn read(&self, key: &str) -> StorageResult<String>;

    /// Store `payload` under `key`, replacing any previous value.
    fn write(&self, key: &str, payload: &str) -> StorageResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;

    fn exists(&self, key: &str) -> StorageResult<bool>;

    /// List all stored keys.
    fn list(&self) -> StorageResult<Vec<String>>;
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn read(&self, key: &str) -> StorageResult<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, payload: &str) -> StorageResult<()> {
        (**self).write(key, payload)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }

    fn exists(&self, key: &str) -> StorageResult<bool> {
        (**self).exists(key)
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        (**self).list()
    }
}

/// Serialize a document to its persisted JSON form.
pub fn encode_document(document: &Document) -> StorageResult<String> {
    serde_json::to_string(document).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Parse a persisted payload, rejecting documents written with another schema
/// version.
pub fn decode_document(payload: &str) -> StorageResult<Document> {
    let value: serde_json::Value =
        serde_json::from_str(payload).map_err(|e| StorageError::Serialization(e.to_string()))?;

    let found = value
        .get("version")
        .and_then(serde_json::Value::as_u64)
        .ok_or_else(|| StorageError::Serialization("missing document version".to_string()))?;
    if found != u64::from(DOCUMENT_VERSION) {
        return Err(StorageError::VersionMismatch {
            found,
            expected: DOCUMENT_VERSION,
        });
    }

    let document: Document =
        serde_json::from_value(value).map_err(|e| StorageError::Serialization(e.to_string()))?;
    document
        .validate()
        .map_err(|reason| StorageError::Serialization(reason.to_string()))?;
    Ok(document)
}

/// Load and decode the document stored under `key`.
pub fn load_document(storage: &dyn Storage, key: &str) -> StorageResult<Document> {
    decode_document(&storage.read(key)?)
}

/// Encode and store `document` under `key`.
pub fn save_document(storage: &dyn Storage, key: &str, document: &Document) -> StorageResult<()> {
    storage.write(key, &encode_document(document)?)
}
