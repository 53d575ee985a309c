use crate::core::errors::Result;
use crate::core::models::key_database::KeyDatabase;

/// Where the database returned by [`KeyStore::load`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from the backing file.
    File,
    /// No backing file yet; the database is empty.
    Missing,
    /// The backing file was unreadable or malformed; the database is empty.
    Recovered { reason: String },
}

/// Port for persisting the key database.
///
/// Loading never fails: a missing or corrupt backing file yields an empty
/// database, so losing the file only forfeits uniqueness history.
/// Saving replaces the whole database and reports failures.
pub trait KeyStore: Send + Sync {
    /// Read the full database.
    fn load(&self) -> (KeyDatabase, LoadSource);

    /// Overwrite the backing file with `database`.
    fn save(&self, database: &KeyDatabase) -> Result<()>;
}
