//! In-memory blob store for tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;

use super::{BlobStore, StorageError, StorageResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `put` fail, like a full quota would.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn put(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes.get() {
            return Err(StorageError::Io(io::Error::other("storage quota exceeded")));
        }
        self.blobs.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
