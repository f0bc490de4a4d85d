//! # Gradebook Store
//!
//! Storage abstraction for the Gradebook. Provides a trait-based interface
//! for student record storage with an in-memory implementation.
//!
//! ## Key Types
//!
//! - [`Store`] - The trait for all storage operations
//! - [`MemoryStore`] - Ordered, capacity-bounded in-memory storage
//! - [`StoreError`] - Why an insert or lookup was refused
//!
//! ## Usage
//!
//! ```rust
//! use gradebook_core::{RollNumber, StudentRecord};
//! use gradebook_store::{MemoryStore, Store};
//!
//! let mut store = MemoryStore::with_capacity(10);
//! let alice = StudentRecord::new(RollNumber(1), "Alice", [70, 80, 90]).unwrap();
//! store.insert(alice).unwrap();
//!
//! let found = store.find(RollNumber(1)).unwrap().unwrap();
//! assert_eq!(found.average(), 80.0);
//! ```
//!
//! ## Design Notes
//!
//! - **Unique roll numbers**: A second record with the same roll returns `DuplicateRoll`
//! - **Bounded**: Inserting past capacity returns `Full`
//! - **Validated**: Records with out-of-range marks are never stored
//! - **Ordered**: Records are kept in insertion order; lookups scan linearly

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::{MemoryStore, DEFAULT_CAPACITY};
pub use traits::Store;
