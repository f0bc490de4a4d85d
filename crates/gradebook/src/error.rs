//! Error types for the Gradebook console.

use std::path::PathBuf;

use gradebook_core::{CoreError, ValidationError};
use gradebook_store::StoreError;
use thiserror::Error;

use crate::input::Field;

/// Malformed console input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{} cannot be empty.", .0.label())]
    Empty(Field),

    #[error("Invalid number format for {field}: '{text}'.")]
    NotANumber { field: Field, text: String },

    #[error("unexpected end of input")]
    EndOfInput,
}

/// Errors that can occur while handling a menu action.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    InvalidMarks(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Reading the terminal or writing the transcript failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// Whether the menu loop can report this and carry on.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            SessionError::Io(_) | SessionError::Input(InputError::EndOfInput)
        )
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self, SessionError::Input(InputError::EndOfInput))
    }
}

/// Errors loading or checking configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("capacity must be at least 1")]
    ZeroCapacity,

    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),

    #[error("usage: {0}")]
    Usage(String),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
