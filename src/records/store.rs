//! Record Store
//!
//! Ordered records mirrored to one blob key. Each mutation builds the
//! next snapshot, writes it, and only then replaces the in-memory copy,
//! so memory and blob agree after every completed operation.

use tracing::{debug, info};

use crate::storage::{BlobSlot, BlobStore};

use super::{Record, RecordError, RecordResult};

pub struct RecordStore<R, S> {
    records: Vec<R>,
    slot: BlobSlot<S>,
}

impl<R: Record, S: BlobStore> RecordStore<R, S> {
    /// Seed from the blob under `R::BLOB_KEY`. A missing blob is an empty store.
    pub fn open(store: S) -> RecordResult<Self> {
        let slot = BlobSlot::new(store, R::BLOB_KEY);
        let records: Vec<R> = slot.load()?.unwrap_or_default();
        debug!(key = slot.key(), count = records.len(), "seeded record store");
        Ok(Self { records, slot })
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append and return the new record's position.
    pub fn add(&mut self, record: R) -> RecordResult<usize> {
        let mut next = self.records.clone();
        next.push(record);
        self.commit(next, "add")?;
        Ok(self.records.len() - 1)
    }

    /// Replace the record at unfiltered position `index`.
    pub fn update(&mut self, index: usize, record: R) -> RecordResult<()> {
        if index >= self.records.len() {
            return Err(RecordError::OutOfRange(index));
        }
        let mut next = self.records.clone();
        next[index] = record;
        self.commit(next, "update")
    }

    /// Remove the record at unfiltered position `index`.
    pub fn remove(&mut self, index: usize) -> RecordResult<R> {
        if index >= self.records.len() {
            return Err(RecordError::OutOfRange(index));
        }
        let mut next = self.records.clone();
        let removed = next.remove(index);
        self.commit(next, "remove")?;
        Ok(removed)
    }

    /// Drop every record matching `predicate`; returns how many went.
    /// Nothing is written when nothing matches.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&R) -> bool) -> RecordResult<usize> {
        let next: Vec<R> = self.records.iter().filter(|r| !predicate(*r)).cloned().collect();
        let removed = self.records.len() - next.len();
        if removed > 0 {
            self.commit(next, "remove")?;
        }
        Ok(removed)
    }

    fn commit(&mut self, next: Vec<R>, op: &'static str) -> RecordResult<()> {
        self.slot.save(&next)?;
        self.records = next;
        info!(key = self.slot.key(), op, count = self.records.len(), "records saved");
        Ok(())
    }
}
