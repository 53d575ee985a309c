use rand::Rng;
use rand::rngs::ThreadRng;

use crate::core::models::key_format::KeyFormat;
use crate::core::traits::key_synthesizer::KeySynthesizer;

/// Symbols used by the grouped formats (1 and 2).
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Symbols used by the body of format 3.
const FORMAT3_SYMBOLS: &[u8] = b"237ABCDGHJLPRST";

const GROUP_LEN: usize = 5;
const FORMAT1_GROUPS: usize = 8;
const FORMAT2_GROUPS: usize = 5;
const FORMAT3_BODY_LEN: usize = 14;

/// Draws every symbol uniformly and independently from the format's alphabet.
///
/// Not cryptographically meaningful: keys carry no checksum and no
/// structure beyond concatenation.
pub struct RandomSynthesizer<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomSynthesizer<ThreadRng> {
    /// Synthesizer backed by the OS-seeded thread-local generator.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomSynthesizer<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomSynthesizer<R> {
    /// Synthesizer over a caller-provided generator (seeded in tests).
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn symbols(&mut self, alphabet: &[u8], len: usize) -> String {
        (0..len)
            .map(|_| alphabet[self.rng.random_range(0..alphabet.len())] as char)
            .collect()
    }

    fn grouped(&mut self, groups: usize) -> String {
        (0..groups)
            .map(|_| self.symbols(ALPHANUMERIC, GROUP_LEN))
            .collect::<Vec<_>>()
            .join("-")
    }

    fn format3(&mut self) -> String {
        let body = self.symbols(FORMAT3_SYMBOLS, FORMAT3_BODY_LEN);
        let suffix: u8 = self.rng.random_range(10..=99);
        format!("{body} {suffix}")
    }
}

impl<R: Rng> KeySynthesizer for RandomSynthesizer<R> {
    fn synthesize(&mut self, format: KeyFormat) -> String {
        match format {
            KeyFormat::Format1 => self.grouped(FORMAT1_GROUPS),
            KeyFormat::Format2 => self.grouped(FORMAT2_GROUPS),
            KeyFormat::Format3 => self.format3(),
        }
    }
}
