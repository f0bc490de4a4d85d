//! Configuration for the Gradebook console.

use std::path::Path;

use gradebook_store::{MemoryStore, DEFAULT_CAPACITY};
use serde::Deserialize;

use crate::error::ConfigError;

/// Configuration for the Gradebook.
///
/// Every field is optional in a config file; missing fields take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradebookConfig {
    /// Maximum number of student records.
    pub capacity: usize,
    /// Maximum level of log events written to stderr.
    pub log_level: String,
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            log_level: "warn".to_string(),
        }
    }
}

impl GradebookConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        self.level()?;
        Ok(())
    }

    /// The configured log level.
    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }

    /// An empty store sized by this configuration.
    pub fn build_store(&self) -> MemoryStore {
        MemoryStore::with_capacity(self.capacity)
    }
}
