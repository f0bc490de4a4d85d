//! Strong type definitions for the Gradebook.

use std::fmt;
use std::str::FromStr;

/// A student's roll number.
///
/// Unique across a store and never changed once a record is created.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RollNumber(pub i32);

impl RollNumber {
    /// Create a roll number from its integer value.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the integer value.
    pub const fn get(&self) -> i32 {
        self.0
    }
}

impl fmt::Debug for RollNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RollNumber({})", self.0)
    }
}

impl fmt::Display for RollNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for RollNumber {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl FromStr for RollNumber {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}
