use crate::core::models::key_format::KeyFormat;

/// Default cap on candidates drawn per call before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 1_000_000;

/// Settings for one generation session.
///
/// Passed by value into every call; the interactive menu edits its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub format: KeyFormat,
    pub save_to_database: bool,
    pub max_attempts: u64,
    pub copy_to_clipboard: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            format: KeyFormat::Format1,
            save_to_database: true,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            copy_to_clipboard: true,
        }
    }
}

impl GeneratorOptions {
    pub fn with_format(self, format: KeyFormat) -> Self {
        Self { format, ..self }
    }

    pub fn with_save_to_database(self, save_to_database: bool) -> Self {
        Self {
            save_to_database,
            ..self
        }
    }
}
