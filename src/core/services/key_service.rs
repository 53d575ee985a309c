use crate::core::errors::Result;
use crate::core::models::key_database::KeyDatabase;
use crate::core::models::key_entry::KeyEntry;
use crate::core::models::key_format::KeyFormat;
use crate::core::traits::key_store::{KeyStore, LoadSource};

/// Records and queries keys through a `KeyStore` backend.
pub struct KeyService<K: KeyStore> {
    pub store: K,
}

impl<K: KeyStore> KeyService<K> {
    /// Append a key to its format's collection and persist the database.
    ///
    /// Runs a full load, append, save cycle. Duplicates are not rejected
    /// here; keys are expected to come from the generator.
    pub fn record(&self, key: &str, format: KeyFormat, is_valid: bool) -> Result<KeyDatabase> {
        let (current, _) = self.store.load();
        let next = current.with_entry(KeyEntry::new(key, is_valid), format);
        self.store.save(&next)?;
        Ok(next)
    }

    /// The whole database, with the reason it may be empty.
    pub fn database(&self) -> (KeyDatabase, LoadSource) {
        self.store.load()
    }

    /// Look up a recorded key within one format.
    pub fn lookup(&self, key: &str, format: KeyFormat) -> Option<KeyEntry> {
        let (db, _) = self.store.load();
        db.find(key, format).cloned()
    }
}
