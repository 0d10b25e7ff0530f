use std::fs;
use std::path::PathBuf;

use crate::error::{MonitorError, MonitorResult};
use crate::status::dto::StatusSnapshot;

/// Storage helper for the last-known status snapshot.
///
/// One JSON file, overwritten wholesale on every save. No locking and no
/// atomic rename: the external scheduler is assumed to run at most one
/// instance at a time.
pub struct StatusStore {
    path: PathBuf,
}

impl StatusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the persisted snapshot.
    ///
    /// A missing file is a first run and yields the sentinel snapshot; a file
    /// that exists but does not parse is `StateCorrupt`, which is fatal.
    pub fn load(&self) -> MonitorResult<StatusSnapshot> {
        if !self.path.exists() {
            return Ok(StatusSnapshot::default());
        }

        let bytes = fs::read(&self.path).map_err(|source| MonitorError::StateIo {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_slice(&bytes).map_err(|source| MonitorError::StateCorrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the snapshot file with the given record.
    pub fn save(&self, snapshot: &StatusSnapshot) -> MonitorResult<()> {
        let json = serde_json::to_vec(snapshot)?;

        fs::write(&self.path, json).map_err(|source| MonitorError::StateIo {
            path: self.path.clone(),
            source,
        })
    }
}
