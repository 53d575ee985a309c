use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::core::errors::{KeygenError, Result};
use crate::core::models::key_database::KeyDatabase;
use crate::core::traits::key_store::{KeyStore, LoadSource};

/// Default database file name, relative to the working directory.
pub const DEFAULT_DATABASE_FILE: &str = "steam_keys_database.json";

/// Key store backed by a single pretty-printed JSON file.
///
/// Saves go through a temporary file in the same directory that is then
/// renamed over the target, so readers see either the old or the new
/// database, never a partial one.
#[derive(Clone)]
pub struct JsonKeyStore {
    path: PathBuf,
}

impl JsonKeyStore {
    /// Create a key store backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Return the file path this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_failed(&self, reason: impl std::fmt::Display) -> KeygenError {
        KeygenError::StoreWriteFailed {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl KeyStore for JsonKeyStore {
    fn load(&self) -> (KeyDatabase, LoadSource) {
        if !self.path.exists() {
            return (KeyDatabase::default(), LoadSource::Missing);
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                return (
                    KeyDatabase::default(),
                    LoadSource::Recovered {
                        reason: format!("cannot read {}: {e}", self.path.display()),
                    },
                );
            }
        };

        match serde_json::from_str::<KeyDatabase>(&content) {
            Ok(db) => (db, LoadSource::File),
            Err(e) => (
                KeyDatabase::default(),
                LoadSource::Recovered {
                    reason: format!("malformed {}: {e}", self.path.display()),
                },
            ),
        }
    }

    fn save(&self, database: &KeyDatabase) -> Result<()> {
        let json = serde_json::to_string_pretty(database).map_err(|e| self.write_failed(e))?;

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| self.write_failed(e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|()| tmp.write_all(b"\n"))
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| self.write_failed(e))?;
        tmp.persist(&self.path).map_err(|e| self.write_failed(e.error))?;

        Ok(())
    }
}
