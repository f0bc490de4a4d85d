//! # Gradebook Core
//!
//! Pure primitives for the Gradebook: student records, subject marks, and
//! the validation and derivation rules over them.
//!
//! This crate contains no I/O and no storage. It is pure computation over
//! small value types.
//!
//! ## Key Types
//!
//! - [`StudentRecord`] - A roll number, a name, and three subject marks
//! - [`RollNumber`] - Unique integer identifier for a record
//! - [`Marks`] - Fixed-length sequence of [`SUBJECT_COUNT`] marks
//! - [`ResultStatus`] - Derived `Pass`/`Fail` label
//!
//! ## Validation
//!
//! Range checking ([`validate_marks`]) and pass/fail derivation
//! ([`Marks::status`]) are independent: a mark of 39 is valid and
//! still fails. See the [`validation`] module.

pub mod error;
pub mod record;
pub mod types;
pub mod validation;

pub use error::{CoreError, ValidationError};
pub use record::{Marks, ResultStatus, StudentRecord, PASS_MARK, SUBJECT_COUNT};
pub use types::RollNumber;
pub use validation::{validate_marks, MAX_MARK, MIN_MARK};
