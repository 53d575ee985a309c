use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::adapters::key_stores::json_key_store::DEFAULT_DATABASE_FILE;
use crate::core::errors::{KeygenError, Result};
use crate::core::models::generator_options::{DEFAULT_MAX_ATTEMPTS, GeneratorOptions};
use crate::core::models::key_format::KeyFormat;

/// Default configuration file name, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "steamkeygen.toml";

/// Top-level configuration read from `steamkeygen.toml`.
///
/// Every section is optional; a missing file means all defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub generator: GeneratorSection,
    pub store: StoreSection,
    pub clipboard: ClipboardSection,
}

impl AppConfig {
    /// Load the configuration from `path`, or defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|detail| KeygenError::InvalidConfig {
            detail: format!("{}: {detail}", path.display()),
        })
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| format!("failed to parse: {e}"))?;

        KeyFormat::try_from(config.generator.format)
            .map_err(|_| format!("[generator] format must be 1, 2 or 3, got {}", config.generator.format))?;

        if config.generator.max_attempts == 0 {
            return Err("[generator] max_attempts must be at least 1".into());
        }

        Ok(config)
    }

    /// Session options derived from this configuration.
    pub fn generator_options(&self) -> Result<GeneratorOptions> {
        Ok(GeneratorOptions {
            format: KeyFormat::try_from(self.generator.format)?,
            save_to_database: self.generator.save_to_database,
            max_attempts: self.generator.max_attempts,
            copy_to_clipboard: self.clipboard.enabled,
        })
    }
}

/// The `[generator]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSection {
    pub format: u8,
    pub save_to_database: bool,
    pub max_attempts: u64,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            format: 1,
            save_to_database: true,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// The `[store]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreSection {
    pub path: PathBuf,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATABASE_FILE),
        }
    }
}

/// The `[clipboard]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClipboardSection {
    pub enabled: bool,
}

impl Default for ClipboardSection {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();

        assert_eq!(config.store.path, PathBuf::from(DEFAULT_DATABASE_FILE));
        assert_eq!(config.generator_options().unwrap(), GeneratorOptions::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config = AppConfig::parse("[generator]\nformat = 3\n").unwrap();
        let options = config.generator_options().unwrap();

        assert_eq!(options.format, KeyFormat::Format3);
        assert!(options.save_to_database);
        assert_eq!(options.max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn full_file() {
        let config = AppConfig::parse(
            r#"
            [generator]
            format = 2
            save_to_database = false
            max_attempts = 50

            [store]
            path = "data/keys.json"

            [clipboard]
            enabled = false
            "#,
        )
        .unwrap();
        let options = config.generator_options().unwrap();

        assert_eq!(options.format, KeyFormat::Format2);
        assert!(!options.save_to_database);
        assert_eq!(options.max_attempts, 50);
        assert!(!options.copy_to_clipboard);
        assert_eq!(config.store.path, PathBuf::from("data/keys.json"));
    }

    #[test]
    fn out_of_range_format_rejected() {
        let err = AppConfig::parse("[generator]\nformat = 4\n").unwrap_err();
        assert!(err.contains("format must be 1, 2 or 3"));
    }

    #[test]
    fn zero_attempts_rejected() {
        assert!(AppConfig::parse("[generator]\nmax_attempts = 0\n").is_err());
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(AppConfig::parse("[generator]\nformats = 2\n").is_err());
    }

    #[test]
    fn malformed_file_is_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "[generator\nformat = ").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, KeygenError::InvalidConfig { .. }));
    }
}
