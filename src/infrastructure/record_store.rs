//! Ordered record collection persisted to a single slot

use crate::domain::Record;
use crate::error::Result;
use crate::infrastructure::slots::SlotStorage;
use log::{debug, warn};

/// Newest-first collection of `T`, flushed to its slot after every mutation.
///
/// The whole collection is serialized as a JSON array on each write.
pub struct RecordStore<T: Record, S: SlotStorage> {
    storage: S,
    slot: String,
    records: Vec<T>,
}

impl<T: Record, S: SlotStorage> RecordStore<T, S> {
    /// Open a store and read its slot once
    pub fn open(storage: S, slot: &str) -> Self {
        let mut store = RecordStore {
            storage,
            slot: slot.to_string(),
            records: Vec::new(),
        };
        store.load();
        store
    }

    /// Re-read the slot. Absent, unreadable or corrupt payloads load as empty.
    pub fn load(&mut self) -> &[T] {
        self.records = match self.storage.get(&self.slot) {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<T>>(&payload) {
                Ok(records) => records,
                Err(e) => {
                    warn!("Slot '{}' is corrupt, starting empty: {}", self.slot, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Slot '{}' could not be read, starting empty: {}", self.slot, e);
                Vec::new()
            }
        };
        debug!("Loaded {} records from '{}'", self.records.len(), self.slot);
        &self.records
    }

    /// Records in stored order (newest first)
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: T::Id) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Insert at the front and persist
    pub fn prepend(&mut self, record: T) -> Result<&T> {
        self.records.insert(0, record);
        self.persist()?;
        Ok(&self.records[0])
    }

    /// Mutate the record with `id` in place and persist.
    /// Returns `None` without writing when no record matches.
    pub fn update<F>(&mut self, id: T::Id, apply: F) -> Result<Option<&T>>
    where
        F: FnOnce(&mut T),
    {
        let Some(index) = self.records.iter().position(|r| r.id() == id) else {
            return Ok(None);
        };
        apply(&mut self.records[index]);
        self.persist()?;
        Ok(Some(&self.records[index]))
    }

    /// Drop the record with `id` and persist. Removing a missing id is a no-op.
    pub fn remove(&mut self, id: T::Id) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        if self.records.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Keep only the first `max` records. Returns how many were evicted.
    pub fn capacity_trim(&mut self, max: usize) -> Result<usize> {
        if self.records.len() <= max {
            return Ok(0);
        }
        let evicted = self.records.len() - max;
        self.records.truncate(max);
        self.persist()?;
        Ok(evicted)
    }

    /// Insert at the front, trim to `max`, and persist once.
    ///
    /// A zero cap keeps nothing: the record is discarded without a write and
    /// `None` is returned.
    pub fn prepend_capped(&mut self, record: T, max: usize) -> Result<Option<&T>> {
        if max == 0 {
            debug!("Discarding record for zero-capacity slot '{}'", self.slot);
            return Ok(None);
        }

        self.records.insert(0, record);
        self.records.truncate(max);
        self.persist()?;
        Ok(self.records.first())
    }

    /// Borrow the underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) -> Result<()> {
        let payload = serde_json::to_string(&self.records)?;
        self.storage.set(&self.slot, &payload)?;
        debug!("Wrote {} records to '{}'", self.records.len(), self.slot);
        Ok(())
    }
}
