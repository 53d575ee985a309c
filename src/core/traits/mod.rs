pub mod clipboard;
pub mod key_store;
pub mod key_synthesizer;
