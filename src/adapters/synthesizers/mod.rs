pub mod random_synthesizer;
