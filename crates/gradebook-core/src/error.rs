//! Error types for the Gradebook Core.

use thiserror::Error;

/// Errors raised while constructing records from raw values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("expected {expected} subject marks, got {got}")]
    SubjectCount { expected: usize, got: usize },

    #[error("student name cannot be empty")]
    EmptyName,
}

/// Validation errors for subject marks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no marks supplied")]
    EmptyMarks,

    /// `subject` is 1-indexed.
    #[error("Invalid marks for subject {subject}: {value}")]
    OutOfRange { subject: usize, value: i32 },
}
