pub mod clipboard;
pub mod key_stores;
pub mod synthesizers;
