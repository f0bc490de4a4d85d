//! Error types for the store module.

use gradebook_core::{RollNumber, ValidationError};
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record with this roll number is already stored.
    #[error("Student with roll number {0} already exists.")]
    DuplicateRoll(RollNumber),

    /// The store holds `capacity` records and accepts no more.
    #[error("Student storage full ({capacity} records). Cannot add more students.")]
    Full { capacity: usize },

    /// The record's marks failed validation.
    #[error("{0}")]
    Invalid(#[from] ValidationError),

    /// Failure inside the storage backend.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
