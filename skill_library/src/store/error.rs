use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures while reading or writing a persisted knowledge store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed store document: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to encode store document: {0}")]
    Encode(#[source] serde_json::Error),
}
