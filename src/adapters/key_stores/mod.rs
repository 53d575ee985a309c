pub mod json_key_store;
