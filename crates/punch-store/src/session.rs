//! JSON file holding the in-memory part of a timer session between runs.

use std::path::{Path, PathBuf};

use punch_core::{SessionSnapshot, StoreError};

use crate::fsutil::{read_optional, write_atomic};

/// Session snapshot stored as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the saved snapshot.
    ///
    /// Returns `None` if the file doesn't exist.
    /// Returns an error if the file exists but is unreadable/unparseable.
    pub fn load(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        let Some(content) = read_optional(&self.path)? else {
            return Ok(None);
        };
        let snapshot = serde_json::from_slice(&content).map_err(|e| {
            let line = u64::try_from(e.line()).unwrap_or_default();
            StoreError::malformed(&self.path, line, e.to_string())
        })?;
        Ok(Some(snapshot))
    }

    pub fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| StoreError::malformed(&self.path, 0, e.to_string()))?;
        write_atomic(&self.path, &json)
    }
}
