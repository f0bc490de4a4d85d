//! Mark validation: range checks over a sequence of subject marks.

use crate::error::ValidationError;

/// Lowest accepted mark (inclusive).
pub const MIN_MARK: i32 = 0;

/// Highest accepted mark (inclusive).
pub const MAX_MARK: i32 = 100;

/// Validate a sequence of subject marks.
///
/// Fails with [`ValidationError::EmptyMarks`] if no marks are given, and with
/// [`ValidationError::OutOfRange`] for the first subject (1-indexed) whose
/// mark lies outside `MIN_MARK..=MAX_MARK`. Later violations are not reported.
///
/// This says nothing about pass/fail; a record that fails every subject is
/// still valid.
pub fn validate_marks(marks: &[i32]) -> Result<(), ValidationError> {
    if marks.is_empty() {
        return Err(ValidationError::EmptyMarks);
    }

    match marks
        .iter()
        .position(|m| !(MIN_MARK..=MAX_MARK).contains(m))
    {
        Some(idx) => Err(ValidationError::OutOfRange {
            subject: idx + 1,
            value: marks[idx],
        }),
        None => Ok(()),
    }
}
