pub mod commands;
pub mod context;
pub mod output;

use clap::{Parser, Subcommand};

use crate::config::app_config::DEFAULT_CONFIG_FILE;
use crate::core::models::key_format::KeyFormat;

/// Generate activation-style keys that never repeat within their format.
#[derive(Parser, Debug)]
#[command(name = "steamkeygen", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Path to the key database (overrides [store] path)
    #[arg(long, global = true, env = "STEAMKEYGEN_DATABASE")]
    pub database: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only print keys and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one or more unique keys
    Generate {
        /// Key format: 1, 2 or 3
        #[arg(short, long)]
        format: Option<KeyFormat>,
        /// Number of keys to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Record the keys as valid
        #[arg(long)]
        valid: bool,
        /// Do not record the keys in the database
        #[arg(long)]
        no_save: bool,
        /// Do not copy the key to the clipboard
        #[arg(long)]
        no_copy: bool,
    },

    /// Interactive menu: generate keys and mark them valid or not
    Menu,

    /// Show recorded keys
    List {
        /// Only show one format
        #[arg(short, long)]
        format: Option<KeyFormat>,
    },

    /// Identify a key's format and whether it has been recorded
    Check {
        /// Key to look up (quote format 3 keys)
        key: String,
    },
}
