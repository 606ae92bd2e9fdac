//! Chorale Synthesis Backend
//!
//! This crate renders harmony recommendations as audible previews. Given a
//! [`ToneFeatureSet`](chorale_core::ToneFeatureSet) from the external
//! analyzer, the engine selects chords, arranges them by brightness,
//! synthesizes the progression as additive sine chords with per-instrument
//! ADSR shaping, and optionally mixes the result with the original
//! recording. Output is normalized mono PCM ready for quantization and
//! encoding.
//!
//! # Determinism
//!
//! Synthesis is deterministic except for the cosmetic per-tone detune,
//! which is an explicit policy: [`Detune::Off`] and [`Detune::Seeded`]
//! yield byte-identical PCM across renders (PCG32 generators, BLAKE3 seed
//! derivation), while [`Detune::Random`] draws fresh entropy per render.
//!
//! # Example
//!
//! ```ignore
//! use chorale_audio::{Detune, EncoderConfig, HarmonyEngine, WavEncoder};
//!
//! let engine = HarmonyEngine::new(44100).with_detune(Detune::Seeded(42));
//! let result = engine.recommend(&features, "acoustic_guitar")?;
//!
//! let mut encoder = WavEncoder::new(EncoderConfig::mono(44100));
//! let bytes = engine.encode_preview(&result.preview, &mut encoder)?;
//! std::fs::write("preview.wav", &bytes)?;
//! ```
//!
//! # Crate Structure
//!
//! - [`engine`] - `recommend` / `regenerate` / `mix_with_original` entry points
//! - [`synth`] - additive chord synthesis
//! - [`envelope`] - ADSR curve generation
//! - [`mixer`] - harmony/original mixing
//! - [`pcm`] - sample-rate-tagged buffers, normalization, quantization
//! - [`encode`] - the encoder boundary and the in-tree WAV encoder
//! - [`rng`] - deterministic RNG and the detune policy

pub mod encode;
pub mod engine;
pub mod envelope;
pub mod error;
pub mod mixer;
pub mod pcm;
pub mod rng;
pub mod synth;

// Re-export main types at crate root
pub use encode::{encode_all, Encoder, EncoderConfig, EncoderQuality, WavEncoder};
pub use engine::{HarmonyEngine, Recommendation};
pub use error::{AudioError, AudioResult};
pub use mixer::{AudioMixer, DEFAULT_HARMONY_GAIN};
pub use pcm::{PcmBuffer, NORMALIZE_EPSILON};
pub use rng::Detune;
pub use synth::{ChordSynthesizer, DETUNE_RANGE_HZ};
