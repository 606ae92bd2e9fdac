//! Tonal feature set produced by the external analyzer.
//!
//! The analyzer reports per-clip feature means as JSON; field names here
//! match that payload. The feature set is read-only to the engine and is
//! discarded once a recommendation response has been produced.

use serde::{Deserialize, Serialize};

/// Aggregated tonal features for one uploaded clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneFeatureSet {
    /// Mean chroma magnitude per pitch class (C, C#, ..., B).
    ///
    /// May be empty when chroma extraction failed; selection then falls
    /// back to the default chord list.
    #[serde(default)]
    pub chroma_mean: Vec<f64>,
    /// Mean spectral centroid in Hz (the brightness proxy).
    #[serde(default)]
    pub spectral_centroid_mean: f64,
    /// Mean spectral bandwidth in Hz, when the analyzer reports it.
    #[serde(default)]
    pub spectral_bandwidth_mean: Option<f64>,
    /// Mean RMS energy.
    #[serde(default)]
    pub rms_energy: f64,
    /// Mean zero-crossing rate.
    #[serde(default)]
    pub zero_crossing_rate: f64,
    /// Tempo estimate in BPM.
    #[serde(default)]
    pub tempo_bpm: f64,
    /// Clip duration in seconds.
    #[serde(default)]
    pub duration_sec: f64,
}

impl ToneFeatureSet {
    /// True when the chroma vector is present and usable for ranking.
    pub fn has_chroma(&self) -> bool {
        !self.chroma_mean.is_empty()
    }
}

/// Guesses a catalog instrument name from spectral statistics.
///
/// Rule-based and intentionally coarse: low centroids read as bass, busy
/// zero-crossing signals as electric guitar, very bright signals as
/// keyboard, everything else as acoustic guitar. Names feed
/// [`crate::catalog::instrument_profile`], so a wrong guess still resolves
/// to a playable profile.
pub fn classify_instrument(features: &ToneFeatureSet) -> &'static str {
    if features.spectral_centroid_mean > 0.0 && features.spectral_centroid_mean < 800.0 {
        "bass"
    } else if features.zero_crossing_rate > 0.12 {
        "electric_guitar"
    } else if features.spectral_centroid_mean > 2500.0 {
        "keyboard"
    } else {
        "acoustic_guitar"
    }
}
