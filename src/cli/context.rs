use std::path::{Path, PathBuf};

use crate::adapters::key_stores::json_key_store::JsonKeyStore;
use crate::cli::Cli;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::generator_options::GeneratorOptions;

/// Settings resolved from the config file and command-line flags.
///
/// Built once in `main` and passed explicitly to each command.
#[derive(Debug, Clone)]
pub struct Context {
    pub options: GeneratorOptions,
    pub database_path: PathBuf,
}

impl Context {
    /// Load the config file named by `--config` and apply flag overrides.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config = AppConfig::load(Path::new(&cli.config))?;
        let options = config.generator_options()?;
        let database_path = cli
            .database
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or(config.store.path);

        Ok(Self {
            options,
            database_path,
        })
    }

    /// The key store this session reads and writes.
    pub fn store(&self) -> JsonKeyStore {
        JsonKeyStore::new(self.database_path.clone())
    }
}
