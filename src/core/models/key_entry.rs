use serde::{Deserialize, Serialize};

/// A generated key together with the caller's assertion about its validity.
///
/// Entries are created when a key is recorded and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEntry {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "IsValid")]
    pub is_valid: bool,
}

impl KeyEntry {
    pub fn new(key: impl Into<String>, is_valid: bool) -> Self {
        Self {
            key: key.into(),
            is_valid,
        }
    }
}
