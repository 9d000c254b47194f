//! Typed access to a single blob key.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{BlobStore, StorageResult};

/// One fixed key in a [`BlobStore`], read and written as JSON.
pub struct BlobSlot<S> {
    store: S,
    key: &'static str,
}

impl<S: BlobStore> BlobSlot<S> {
    pub fn new(store: S, key: &'static str) -> Self {
        Self { store, key }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Deserialize the snapshot, or `None` if nothing was ever saved.
    /// A stored `null` reads the same as a missing key.
    pub fn load<T: DeserializeOwned>(&self) -> StorageResult<Option<T>> {
        let Some(raw) = self.store.get(self.key)? else {
            return Ok(None);
        };
        Ok(serde_json::from_str::<Option<T>>(&raw)?)
    }

    /// Serialize `value` and overwrite the snapshot.
    pub fn save<T: Serialize + ?Sized>(&self, value: &T) -> StorageResult<()> {
        let raw = serde_json::to_string(value)?;
        self.store.put(self.key, &raw)
    }
}
