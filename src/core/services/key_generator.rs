use crate::core::errors::{KeygenError, Result};
use crate::core::models::key_database::KeyDatabase;
use crate::core::models::key_format::KeyFormat;
use crate::core::traits::key_store::{KeyStore, LoadSource};
use crate::core::traits::key_synthesizer::KeySynthesizer;

/// A key that did not collide with anything in the database snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedKey {
    pub key: String,
    pub format: KeyFormat,
    /// Candidates drawn, including the accepted one.
    pub attempts: u64,
    /// How the snapshot was obtained.
    pub source: LoadSource,
}

/// Produces keys that are unique within their format.
///
/// Each call loads the store once and rejection-samples candidates against
/// that snapshot until one is unused. The loop is capped at `max_attempts`
/// so a saturated key space surfaces as [`KeygenError::ExhaustedKeyspace`].
pub struct KeyGenerator<'a, K: KeyStore, S: KeySynthesizer> {
    store: &'a K,
    synthesizer: S,
    max_attempts: u64,
}

impl<'a, K: KeyStore, S: KeySynthesizer> KeyGenerator<'a, K, S> {
    pub fn new(store: &'a K, synthesizer: S, max_attempts: u64) -> Self {
        Self {
            store,
            synthesizer,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Generate a key for `format` that is not yet recorded for that format.
    pub fn generate_unique(&mut self, format: KeyFormat) -> Result<GeneratedKey> {
        let (snapshot, source) = self.store.load();
        let (key, attempts) = self.first_unused(&snapshot, format)?;
        Ok(GeneratedKey {
            key,
            format,
            attempts,
            source,
        })
    }

    fn first_unused(&mut self, snapshot: &KeyDatabase, format: KeyFormat) -> Result<(String, u64)> {
        for attempt in 1..=self.max_attempts {
            let candidate = self.synthesizer.synthesize(format);
            if !snapshot.exists(&candidate, format) {
                return Ok((candidate, attempt));
            }
        }

        Err(KeygenError::ExhaustedKeyspace {
            format,
            attempts: self.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::key_stores::json_key_store::JsonKeyStore;
    use crate::adapters::synthesizers::random_synthesizer::RandomSynthesizer;
    use crate::core::models::key_entry::KeyEntry;
    use crate::core::services::key_service::KeyService;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    /// Two-symbol alphabet, two positions: only four possible keys.
    struct TinySynthesizer {
        rng: StdRng,
    }

    impl TinySynthesizer {
        const SPACE: [&'static str; 4] = ["AA", "AB", "BA", "BB"];

        fn new() -> Self {
            Self {
                rng: StdRng::seed_from_u64(42),
            }
        }
    }

    impl KeySynthesizer for TinySynthesizer {
        fn synthesize(&mut self, _format: KeyFormat) -> String {
            (0..2)
                .map(|_| if self.rng.random_bool(0.5) { 'A' } else { 'B' })
                .collect()
        }
    }

    /// Replays a fixed list of candidates, then repeats the last one.
    struct ScriptedSynthesizer {
        script: Vec<&'static str>,
        next: usize,
    }

    impl KeySynthesizer for ScriptedSynthesizer {
        fn synthesize(&mut self, _format: KeyFormat) -> String {
            let idx = self.next.min(self.script.len() - 1);
            self.next += 1;
            self.script[idx].to_string()
        }
    }

    fn temp_store() -> (tempfile::TempDir, JsonKeyStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonKeyStore::new(dir.path().join("keys.json"));
        (dir, store)
    }

    fn seed(store: &JsonKeyStore, keys: &[&str], format: KeyFormat) {
        let db = keys.iter().fold(KeyDatabase::default(), |db, k| {
            db.with_entry(KeyEntry::new(*k, true), format)
        });
        store.save(&db).unwrap();
    }

    #[test]
    fn empty_store_accepts_first_candidate() {
        let (_dir, store) = temp_store();
        let mut generator = KeyGenerator::new(&store, RandomSynthesizer::new(), 10);

        let generated = generator.generate_unique(KeyFormat::Format2).unwrap();
        assert!(KeyFormat::Format2.matches(&generated.key));
        assert_eq!(generated.attempts, 1);
        assert_eq!(generated.source, LoadSource::Missing);
    }

    #[test]
    fn skips_candidates_already_recorded() {
        let (_dir, store) = temp_store();
        seed(&store, &["DUP-1", "DUP-2"], KeyFormat::Format1);

        let synth = ScriptedSynthesizer {
            script: vec!["DUP-1", "DUP-2", "FRESH"],
            next: 0,
        };
        let mut generator = KeyGenerator::new(&store, synth, 10);

        let generated = generator.generate_unique(KeyFormat::Format1).unwrap();
        assert_eq!(generated.key, "FRESH");
        assert_eq!(generated.attempts, 3);
    }

    #[test]
    fn collisions_are_scoped_to_format() {
        let (_dir, store) = temp_store();
        seed(&store, &["SHARED"], KeyFormat::Format1);

        let synth = ScriptedSynthesizer {
            script: vec!["SHARED"],
            next: 0,
        };
        let mut generator = KeyGenerator::new(&store, synth, 3);

        let generated = generator.generate_unique(KeyFormat::Format2).unwrap();
        assert_eq!(generated.key, "SHARED");
    }

    #[test]
    fn finds_last_free_key_in_tiny_space() {
        let (_dir, store) = temp_store();
        seed(&store, &["AA", "AB", "BA"], KeyFormat::Format3);

        let mut generator = KeyGenerator::new(&store, TinySynthesizer::new(), 10_000);
        let generated = generator.generate_unique(KeyFormat::Format3).unwrap();
        assert_eq!(generated.key, "BB");
    }

    #[test]
    fn total_collision_exhausts_keyspace() {
        let (_dir, store) = temp_store();
        seed(&store, &TinySynthesizer::SPACE, KeyFormat::Format3);

        let mut generator = KeyGenerator::new(&store, TinySynthesizer::new(), 5_000);
        let err = generator.generate_unique(KeyFormat::Format3).unwrap_err();

        match err {
            KeygenError::ExhaustedKeyspace { format, attempts } => {
                assert_eq!(format, KeyFormat::Format3);
                assert_eq!(attempts, 5_000);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn repeated_generate_and_record_never_repeats() {
        let (_dir, store) = temp_store();
        let service = KeyService { store: store.clone() };
        let mut generator = KeyGenerator::new(&store, TinySynthesizer::new(), 10_000);

        let mut seen = HashSet::new();
        for _ in 0..TinySynthesizer::SPACE.len() {
            let generated = generator.generate_unique(KeyFormat::Format1).unwrap();
            assert!(seen.insert(generated.key.clone()), "repeated {}", generated.key);
            service.record(&generated.key, KeyFormat::Format1, false).unwrap();
        }

        assert!(matches!(
            generator.generate_unique(KeyFormat::Format1),
            Err(KeygenError::ExhaustedKeyspace { .. })
        ));
    }

    #[test]
    fn real_formats_stay_unique_across_records() {
        let (_dir, store) = temp_store();
        let service = KeyService { store: store.clone() };
        let synth = RandomSynthesizer::with_rng(StdRng::seed_from_u64(1));
        let mut generator = KeyGenerator::new(&store, synth, 1_000);

        for format in KeyFormat::ALL {
            let mut seen = HashSet::new();
            for _ in 0..25 {
                let generated = generator.generate_unique(format).unwrap();
                assert!(format.matches(&generated.key));
                assert!(seen.insert(generated.key.clone()));
                service.record(&generated.key, format, true).unwrap();
            }
        }

        let (db, _) = store.load();
        for format in KeyFormat::ALL {
            assert_eq!(db.entries(format).len(), 25);
        }
    }

    #[test]
    fn zero_cap_still_draws_once() {
        let (_dir, store) = temp_store();
        let mut generator = KeyGenerator::new(&store, RandomSynthesizer::new(), 0);
        assert!(generator.generate_unique(KeyFormat::Format3).is_ok());
    }
}
