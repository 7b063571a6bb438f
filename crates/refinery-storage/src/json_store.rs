//! JsonFileStore: one concept database per JSON file.
//!
//! Saves go to a sibling temp file that is renamed over the target, so a
//! crash mid-write never leaves a truncated database behind.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use refinery_core::errors::{RefineryResult, StorageError};
use refinery_core::traits::IConceptStore;
use refinery_core::ConceptDatabase;
use tracing::debug;

/// A concept database persisted as `{ "surface": [...], "deep": [...] }`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_err(path: &Path, err: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

impl IConceptStore for JsonFileStore {
    fn load(&self) -> RefineryResult<ConceptDatabase> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no database file, starting empty");
                return Ok(ConceptDatabase::default());
            }
            Err(err) => return Err(Self::io_err(&self.path, err).into()),
        };

        let database: ConceptDatabase =
            serde_json::from_str(&content).map_err(|e| StorageError::Serialization {
                reason: format!("{}: {e}", self.path.display()),
            })?;
        debug!(
            path = %self.path.display(),
            concepts = database.len(),
            "concept database loaded"
        );
        Ok(database)
    }

    fn save(&self, database: &ConceptDatabase) -> RefineryResult<()> {
        let json =
            serde_json::to_string_pretty(database).map_err(|e| StorageError::Serialization {
                reason: e.to_string(),
            })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Self::io_err(parent, e))?;
        }

        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|e| Self::io_err(&temp, e))?;
        fs::rename(&temp, &self.path).map_err(|e| Self::io_err(&self.path, e))?;

        debug!(
            path = %self.path.display(),
            concepts = database.len(),
            "concept database saved"
        );
        Ok(())
    }
}
