use crate::core::models::key_format::KeyFormat;

/// Port for producing candidate keys.
///
/// Implementations only synthesize strings; collision checks against the
/// database happen in the generator.
pub trait KeySynthesizer {
    /// Produce one candidate with the shape of `format`.
    fn synthesize(&mut self, format: KeyFormat) -> String;
}
