//! Student records and the values derived from them.

use std::fmt;

use crate::error::{CoreError, ValidationError};
use crate::types::RollNumber;
use crate::validation::validate_marks;

/// Number of subjects every record carries.
pub const SUBJECT_COUNT: usize = 3;

/// Lowest mark that still passes a subject.
pub const PASS_MARK: i32 = 40;

/// Pass/fail label derived from a record's marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultStatus {
    Pass,
    Fail,
}

impl ResultStatus {
    /// The display label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ResultStatus::Pass => "Pass",
            ResultStatus::Fail => "Fail",
        }
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The marks for each of the [`SUBJECT_COUNT`] subjects, in subject order.
///
/// Holding a `Marks` says nothing about range; call [`Marks::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marks(pub [i32; SUBJECT_COUNT]);

impl Marks {
    /// Create from a fixed-length array.
    pub const fn new(marks: [i32; SUBJECT_COUNT]) -> Self {
        Self(marks)
    }

    /// The marks as a slice, subject 1 first.
    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    /// Iterate over the marks in subject order.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().copied()
    }

    /// Check every mark lies in range. See [`validate_marks`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_marks(&self.0)
    }

    /// Arithmetic mean of the marks.
    pub fn average(&self) -> f64 {
        let sum: i64 = self.iter().map(i64::from).sum();
        sum as f64 / SUBJECT_COUNT as f64
    }

    /// `Fail` if any mark is below [`PASS_MARK`], otherwise `Pass`.
    ///
    /// Evaluated over all marks regardless of whether they validate.
    pub fn status(&self) -> ResultStatus {
        if self.iter().any(|m| m < PASS_MARK) {
            ResultStatus::Fail
        } else {
            ResultStatus::Pass
        }
    }
}

impl From<[i32; SUBJECT_COUNT]> for Marks {
    fn from(marks: [i32; SUBJECT_COUNT]) -> Self {
        Self(marks)
    }
}

impl TryFrom<&[i32]> for Marks {
    type Error = CoreError;

    fn try_from(slice: &[i32]) -> Result<Self, Self::Error> {
        let marks: [i32; SUBJECT_COUNT] =
            slice.try_into().map_err(|_| CoreError::SubjectCount {
                expected: SUBJECT_COUNT,
                got: slice.len(),
            })?;
        Ok(Self(marks))
    }
}

impl TryFrom<Vec<i32>> for Marks {
    type Error = CoreError;

    fn try_from(marks: Vec<i32>) -> Result<Self, Self::Error> {
        Self::try_from(marks.as_slice())
    }
}

/// Space-separated, e.g. `70 80 90`.
impl fmt::Display for Marks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mark) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", mark)?;
        }
        Ok(())
    }
}

/// A single student's record.
///
/// The roll number and name are fixed at construction. Average and status
/// are derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    roll_number: RollNumber,
    name: String,
    marks: Marks,
}

impl StudentRecord {
    /// Create a record.
    ///
    /// The name is trimmed and must not be empty. Marks are not range
    /// checked here; call [`StudentRecord::validate`] before storing.
    pub fn new(
        roll_number: RollNumber,
        name: impl Into<String>,
        marks: impl Into<Marks>,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::EmptyName);
        }

        Ok(Self {
            roll_number,
            name: name.to_string(),
            marks: marks.into(),
        })
    }

    pub fn roll_number(&self) -> RollNumber {
        self.roll_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    /// Validate the record's marks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.marks.validate()
    }

    pub fn average(&self) -> f64 {
        self.marks.average()
    }

    pub fn status(&self) -> ResultStatus {
        self.marks.status()
    }
}
