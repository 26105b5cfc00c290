//! Loading and dumping the store as a JSON document.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

use super::{KnowledgeStore, Result, StoreError};

impl KnowledgeStore {
    /// Parse a store from a JSON document.
    pub fn load(document: &str) -> Result<Self> {
        serde_json::from_str(document).map_err(StoreError::Parse)
    }

    /// Serialize the store to a JSON document.
    ///
    /// Output is deterministic: dumping the same store twice yields identical
    /// text.
    pub fn dump(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(StoreError::Encode)
    }

    /// Load a store from a file. A missing file yields an empty store.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(document) => {
                let store = Self::load(&document)?;
                info!(
                    path = %path.display(),
                    skills = store.skills().count(),
                    "loaded knowledge store"
                );
                Ok(store)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "no knowledge store yet, starting empty");
                Ok(Self::new())
            }
            Err(source) => Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load a store at session start.
    ///
    /// A store that cannot be read or parsed is logged and replaced by an
    /// empty one; the failure is handed back so the host can show it.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<StoreError>) {
        let path = path.as_ref();
        match Self::load_file(path) {
            Ok(store) => (store, None),
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "could not load knowledge store, starting empty"
                );
                (Self::new(), Some(err))
            }
        }
    }

    /// Write the store to a file, creating parent directories as needed.
    pub fn save_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let io_error = |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(path, self.dump()?).map_err(io_error)?;

        info!(path = %path.display(), "saved knowledge store");
        Ok(())
    }
}
