use std::path::PathBuf;

use crate::core::models::key_format::KeyFormat;

/// All domain errors for steamkeygen.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum KeygenError {
    #[error(
        "Invalid key format: '{value}'\n\n  \
         Supported formats:\n    \
         → 1: AAAAA-BBBBB-CCCCC-DDDDD-EEEEE-FFFFF-GGGGG-HHHHH\n    \
         → 2: AAAAA-BBBBB-CCCCC-DDDDD-EEEEE\n    \
         → 3: 237ABCDGHJLPRST 23"
    )]
    InvalidFormat { value: String },

    #[error(
        "No unused key found for format {format} after {attempts} attempts\n\n  \
         Every candidate collided with a key already in the database.\n\n  \
         Solutions:\n    \
         → Raise [generator] max_attempts in steamkeygen.toml\n    \
         → Start a fresh database with --database <path>"
    )]
    ExhaustedKeyspace { format: KeyFormat, attempts: u64 },

    #[error(
        "Could not save key database to {path}: {reason}\n\n  \
         The key above was generated but NOT recorded.\n  \
         Check that the directory exists and is writable."
    )]
    StoreWriteFailed { path: PathBuf, reason: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KeygenError>;
