//! # Gradebook Testkit
//!
//! Testing utilities for the Gradebook.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Named sample records and pre-filled stores
//! - **Generators**: Proptest strategies for marks and records
//! - **Scripts**: Console input for driving a [`gradebook::Session`]
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use gradebook_testkit::generators::valid_marks;
//!
//! proptest! {
//!     #[test]
//!     fn valid_marks_validate(marks in valid_marks()) {
//!         prop_assert!(marks.validate().is_ok());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use gradebook_testkit::fixtures::{alice, filled_store};
//! use gradebook_store::Store;
//!
//! let store = filled_store(3);
//! assert_eq!(store.len(), 3);
//! assert_eq!(alice().average(), 80.0);
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{add_script, alice, bob, filled_store, run_script};
pub use generators::{invalid_marks, record, valid_marks, RecordParams};
