//! Store trait: the abstract interface for student record storage.

use gradebook_core::{RollNumber, StudentRecord};

use crate::error::Result;

/// The store trait: minimal interface for record storage.
///
/// Records are keyed by roll number and kept in insertion order. There is
/// no update or delete.
pub trait Store {
    /// Insert a record.
    ///
    /// # Errors
    /// - `Invalid` if the record's marks do not validate.
    /// - `DuplicateRoll` if the roll number is already present.
    /// - `Full` if the store is at capacity.
    ///
    /// The store is unchanged on any error.
    fn insert(&mut self, record: StudentRecord) -> Result<()>;

    /// Find the record with the given roll number.
    fn find(&self, roll: RollNumber) -> Result<Option<StudentRecord>>;

    /// Check if a roll number is present.
    fn contains(&self, roll: RollNumber) -> Result<bool> {
        Ok(self.find(roll)?.is_some())
    }

    /// Count of records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of records the store accepts.
    fn capacity(&self) -> usize;
}
