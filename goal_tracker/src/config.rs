//! Tracker configuration, read from TOML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Experience the game charges for one partial training.
pub const DEFAULT_PARTIAL_TRAINING_COST: u64 = 300_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for a [`GoalTracker`](crate::GoalTracker). Every field has a
/// default, so an empty document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Where the host keeps the knowledge store between sessions.
    pub store_path: Option<PathBuf>,

    /// Experience charged per partial-training event.
    pub partial_training_cost: u64,

    /// Tracing filter directive used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            partial_training_cost: DEFAULT_PARTIAL_TRAINING_COST,
            log_filter: "info".to_string(),
        }
    }
}

impl TrackerConfig {
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(document)?)
    }

    /// Read a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&document)
    }

    /// Set the store path.
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(path.into());
        self
    }
}
