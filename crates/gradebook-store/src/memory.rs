//! In-memory implementation of the Store trait.

use gradebook_core::{RollNumber, StudentRecord};

use crate::error::{Result, StoreError};
use crate::traits::Store;

/// Capacity of a store built with [`MemoryStore::new`].
pub const DEFAULT_CAPACITY: usize = 100;

/// In-memory store.
///
/// Records live in a `Vec` in insertion order. All data is lost when the
/// store is dropped.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    records: Vec<StudentRecord>,
    capacity: usize,
}

impl MemoryStore {
    /// Create an empty store with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty store holding at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    fn position(&self, roll: RollNumber) -> Option<usize> {
        self.records.iter().position(|r| r.roll_number() == roll)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn insert(&mut self, record: StudentRecord) -> Result<()> {
        let roll = record.roll_number();

        if let Err(e) = record.validate() {
            tracing::debug!(%roll, error = %e, "rejected record with invalid marks");
            return Err(e.into());
        }

        if self.position(roll).is_some() {
            tracing::debug!(%roll, "rejected duplicate roll number");
            return Err(StoreError::DuplicateRoll(roll));
        }

        if self.records.len() >= self.capacity {
            tracing::debug!(%roll, capacity = self.capacity, "store full");
            return Err(StoreError::Full {
                capacity: self.capacity,
            });
        }

        self.records.push(record);
        tracing::debug!(%roll, count = self.records.len(), "record inserted");
        Ok(())
    }

    fn find(&self, roll: RollNumber) -> Result<Option<StudentRecord>> {
        Ok(self.position(roll).map(|idx| self.records[idx].clone()))
    }

    fn contains(&self, roll: RollNumber) -> Result<bool> {
        Ok(self.position(roll).is_some())
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
