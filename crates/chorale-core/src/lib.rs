//! Chorale core types and chord logic
//!
//! This crate holds the deterministic, audio-free half of the harmony
//! engine: the chord and instrument catalogs, the tonal feature types
//! produced by the external analyzer, and the selection/arrangement logic
//! that turns a chroma vector into a chord progression.
//!
//! # Overview
//!
//! - [`symbol`] - [`ChordSymbol`] vocabulary and [`Progression`] sequences
//! - [`catalog`] - static triad and instrument-profile tables
//! - [`features`] - [`ToneFeatureSet`] analyzer payload and the instrument
//!   classification heuristic
//! - [`select`] - chroma ranking to an ordered chord set
//! - [`arrange`] - brightness-driven progression ordering
//!
//! All catalogs are immutable statics; selection and arrangement are pure
//! functions, so concurrent requests share them freely.

pub mod arrange;
pub mod catalog;
pub mod error;
pub mod features;
pub mod select;
pub mod symbol;

// Re-export main types at crate root
pub use arrange::{arrange, BRIGHTNESS_THRESHOLD_HZ};
pub use catalog::{instrument_profile, triad, Envelope, InstrumentProfile, DEFAULT_PROFILE};
pub use error::{CoreError, CoreResult};
pub use features::{classify_instrument, ToneFeatureSet};
pub use select::{select, DEFAULT_CHORDS};
pub use symbol::{ChordSymbol, Progression};
