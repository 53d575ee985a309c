pub mod generator_options;
pub mod key_database;
pub mod key_entry;
pub mod key_format;
