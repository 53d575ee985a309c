use serde::{Deserialize, Serialize};

use crate::core::models::key_entry::KeyEntry;
use crate::core::models::key_format::KeyFormat;

/// Every recorded key, partitioned by format.
///
/// Uniqueness holds within one collection only: the same literal string
/// may appear under two different formats. Collections are append-only
/// and keep insertion order.
///
/// Serialized as:
/// ```json
/// {
///   "Format1": [{ "Key": "...", "IsValid": true }],
///   "Format2": [],
///   "Format3": []
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDatabase {
    #[serde(rename = "Format1", default)]
    pub format1: Vec<KeyEntry>,
    #[serde(rename = "Format2", default)]
    pub format2: Vec<KeyEntry>,
    #[serde(rename = "Format3", default)]
    pub format3: Vec<KeyEntry>,
}

impl KeyDatabase {
    /// The collection holding keys of `format`.
    pub fn entries(&self, format: KeyFormat) -> &[KeyEntry] {
        match format {
            KeyFormat::Format1 => &self.format1,
            KeyFormat::Format2 => &self.format2,
            KeyFormat::Format3 => &self.format3,
        }
    }

    /// Exact, case-sensitive lookup restricted to one format's collection.
    pub fn find(&self, key: &str, format: KeyFormat) -> Option<&KeyEntry> {
        self.entries(format).iter().find(|e| e.key == key)
    }

    pub fn exists(&self, key: &str, format: KeyFormat) -> bool {
        self.find(key, format).is_some()
    }

    /// Return a copy with `entry` appended to the `format` collection.
    ///
    /// The other two collections are carried over unchanged. No duplicate
    /// check is done here; call [`KeyDatabase::exists`] first.
    pub fn with_entry(&self, entry: KeyEntry, format: KeyFormat) -> Self {
        let mut next = self.clone();
        next.collection_mut(format).push(entry);
        next
    }

    /// Total number of entries across all formats.
    pub fn len(&self) -> usize {
        self.format1.len() + self.format2.len() + self.format3.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn collection_mut(&mut self, format: KeyFormat) -> &mut Vec<KeyEntry> {
        match format {
            KeyFormat::Format1 => &mut self.format1,
            KeyFormat::Format2 => &mut self.format2,
            KeyFormat::Format3 => &mut self.format3,
        }
    }
}
