//! Storage Module
//!
//! Key-value blob persistence. Every widget owns one key and overwrites
//! its whole snapshot on each mutation.

pub mod blobs;
pub mod connection;
#[cfg(test)]
pub mod memory;
pub mod schema;
pub mod slot;

use std::rc::Rc;

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// A single flat namespace of serialized snapshots.
pub trait BlobStore {
    /// Read the blob stored under `key`, if any.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the blob stored under `key`.
    fn put(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<T: BlobStore + ?Sized> BlobStore for Rc<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).put(key, value)
    }
}

impl<T: BlobStore + ?Sized> BlobStore for &T {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).put(key, value)
    }
}

// Re-exports
pub use connection::{Database, DatabaseConfig};
#[cfg(test)]
pub use memory::MemoryStore;
pub use slot::BlobSlot;
