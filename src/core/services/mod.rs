pub mod key_generator;
pub mod key_service;
