use skill_library::StoreError;
use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("invalid line pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("knowledge store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
