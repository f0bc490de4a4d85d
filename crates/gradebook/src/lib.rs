//! # Gradebook
//!
//! Console record manager for student results.
//!
//! ## Overview
//!
//! The Gradebook captures a roll number, a name and three subject marks per
//! student, validates the marks, and reports each student's average and
//! pass/fail status on lookup.
//!
//! - **Records**: Roll number, name and marks; average and status are derived
//! - **Store**: Ordered, bounded, unique by roll number
//! - **Session**: The interactive menu over any reader/writer pair
//!
//! ## Usage
//!
//! ```rust
//! use std::io::Cursor;
//! use gradebook::{GradebookConfig, Session};
//!
//! let config = GradebookConfig::default();
//! let input = Cursor::new("1\n1\nAlice\n70\n80\n90\n3\n");
//! let mut output = Vec::new();
//!
//! let mut session = Session::new(config.build_store(), input, &mut output);
//! session.run().unwrap();
//!
//! let transcript = String::from_utf8(output).unwrap();
//! assert!(transcript.contains("Student added successfully"));
//! ```
//!
//! ## Re-exports
//!
//! - `gradebook::core` - Records, marks and validation
//! - `gradebook::store` - Storage abstraction

pub mod args;
pub mod config;
pub mod error;
pub mod input;
pub mod menu;
pub mod session;

pub use gradebook_core as core;
pub use gradebook_store as store;

pub use args::Args;
pub use config::GradebookConfig;
pub use error::{ConfigError, InputError, Result, SessionError};
pub use input::Field;
pub use menu::{MenuChoice, MenuError};
pub use session::{format_average, Session};

pub use gradebook_core::{Marks, ResultStatus, RollNumber, StudentRecord};
pub use gradebook_store::{MemoryStore, Store, StoreError};
