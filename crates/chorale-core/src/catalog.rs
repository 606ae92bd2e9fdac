//! Static chord and instrument catalogs.
//!
//! Both tables are immutable, process-wide data with no runtime mutation
//! path. The triad table covers the six playable chords; the instrument
//! table maps instrument names to synthesis profiles, with a documented
//! default for unknown names.

use serde::{Deserialize, Serialize};

use crate::symbol::ChordSymbol;

/// ADSR envelope timing for an instrument.
///
/// Attack, decay, and release are in seconds; sustain is a level ratio
/// (0.0 to 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

/// Synthesis profile for one instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InstrumentProfile {
    /// Catalog name of the instrument.
    pub name: &'static str,
    /// Amplitude weight for each of the three triad tones.
    pub weights: [f64; 3],
    /// Envelope timing applied to every chord segment.
    pub envelope: Envelope,
}

/// Profile used for any instrument name the catalog does not recognize.
pub const DEFAULT_PROFILE: InstrumentProfile = InstrumentProfile {
    name: "default",
    weights: [1.0, 0.8, 0.6],
    envelope: Envelope {
        attack: 0.05,
        decay: 0.1,
        sustain: 0.7,
        release: 0.2,
    },
};

const PROFILES: [InstrumentProfile; 5] = [
    InstrumentProfile {
        name: "acoustic_guitar",
        // Emphasize the fundamental
        weights: [1.0, 0.8, 0.6],
        envelope: Envelope {
            attack: 0.02,
            decay: 0.2,
            sustain: 0.6,
            release: 0.2,
        },
    },
    InstrumentProfile {
        name: "electric_guitar",
        // Brighter overtones
        weights: [1.0, 1.2, 0.9],
        envelope: Envelope {
            attack: 0.01,
            decay: 0.15,
            sustain: 0.8,
            release: 0.1,
        },
    },
    InstrumentProfile {
        name: "keyboard",
        // Balanced
        weights: [0.8, 0.8, 0.8],
        envelope: Envelope {
            attack: 0.05,
            decay: 0.1,
            sustain: 0.9,
            release: 0.3,
        },
    },
    InstrumentProfile {
        name: "ukulele",
        // Softer overtones
        weights: [1.0, 0.7, 0.5],
        envelope: Envelope {
            attack: 0.03,
            decay: 0.15,
            sustain: 0.7,
            release: 0.2,
        },
    },
    InstrumentProfile {
        name: "bass",
        // Emphasize lower frequencies
        weights: [1.2, 0.5, 0.3],
        envelope: Envelope {
            attack: 0.08,
            decay: 0.2,
            sustain: 0.5,
            release: 0.4,
        },
    },
];

/// Looks up the profile for an instrument name.
///
/// Unknown names resolve to [`DEFAULT_PROFILE`]; this never fails.
pub fn instrument_profile(name: &str) -> &'static InstrumentProfile {
    PROFILES
        .iter()
        .find(|profile| profile.name.eq_ignore_ascii_case(name.trim()))
        .unwrap_or(&DEFAULT_PROFILE)
}

/// The triad of fundamental frequencies for a chord, in Hz.
///
/// Only the six playable chords have triads; every other symbol returns
/// `None` and is a fatal input to the synthesizer.
pub fn triad(symbol: ChordSymbol) -> Option<[f64; 3]> {
    match symbol {
        ChordSymbol::C => Some([261.63, 329.63, 392.00]), // C4, E4, G4
        ChordSymbol::G => Some([392.00, 493.88, 587.33]), // G4, B4, D5
        ChordSymbol::F => Some([349.23, 440.00, 523.25]), // F4, A4, C5
        ChordSymbol::Am => Some([261.63, 329.63, 440.00]),
        ChordSymbol::Em => Some([329.63, 392.00, 493.88]),
        ChordSymbol::D => Some([293.66, 369.99, 440.00]),
        _ => None,
    }
}
