//! The harmony recommendation engine.
//!
//! Wires the core chord logic to the synthesis pipeline: features in,
//! chords, progression, and a rendered preview out. Each call runs as an
//! independent sequential pipeline over the shared immutable catalogs, so
//! concurrent requests need no locking.

use chorale_core::{arrange, select, ChordSymbol, Progression, ToneFeatureSet};

use crate::encode::{encode_all, Encoder};
use crate::error::AudioResult;
use crate::mixer::AudioMixer;
use crate::pcm::PcmBuffer;
use crate::rng::Detune;
use crate::synth::ChordSynthesizer;

/// One harmony recommendation.
#[derive(Debug, Clone)]
pub struct Recommendation {
    /// The selected chords in selection order.
    pub chords: Vec<ChordSymbol>,
    /// The arranged progression.
    pub progression: Progression,
    /// Normalized preview PCM, sized to the clip duration.
    pub preview: PcmBuffer,
}

/// Harmony recommendation and synthesis engine.
#[derive(Debug, Clone, Copy)]
pub struct HarmonyEngine {
    sample_rate: u32,
    detune: Detune,
}

impl HarmonyEngine {
    /// Creates an engine rendering at the given sample rate.
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            detune: Detune::Random,
        }
    }

    /// Sets the detune policy for all renders from this engine.
    pub fn with_detune(mut self, detune: Detune) -> Self {
        self.detune = detune;
        self
    }

    /// Recommends a progression for the clip's features and renders a
    /// preview for the given instrument.
    ///
    /// Selection falls back to the default chord list when chroma is
    /// unusable; arrangement reorders by brightness; the preview spans the
    /// clip's reported duration. A missing or non-positive duration is a
    /// fatal synthesis error.
    pub fn recommend(
        &self,
        features: &ToneFeatureSet,
        instrument: &str,
    ) -> AudioResult<Recommendation> {
        let chords = select(&features.chroma_mean);
        let progression = arrange(&chords, features.spectral_centroid_mean)?;

        let synthesizer = ChordSynthesizer::new(self.sample_rate).with_detune(self.detune);
        let preview = synthesizer.render(&progression, instrument, features.duration_sec)?;

        Ok(Recommendation {
            chords,
            progression,
            preview,
        })
    }

    /// Re-runs the recommendation for the same features.
    ///
    /// Idempotent given identical inputs, modulo the detune policy: with
    /// [`Detune::Off`] or [`Detune::Seeded`] the preview is bit-identical.
    pub fn regenerate(
        &self,
        features: &ToneFeatureSet,
        instrument: &str,
    ) -> AudioResult<Recommendation> {
        self.recommend(features, instrument)
    }

    /// Mixes a rendered preview with the original recording.
    pub fn mix_with_original(
        &self,
        original: &PcmBuffer,
        preview: &PcmBuffer,
    ) -> AudioResult<PcmBuffer> {
        AudioMixer::new().mix(original, preview)
    }

    /// Quantizes a buffer and drives an encoder through to its flush,
    /// returning the final bytes.
    pub fn encode_preview(
        &self,
        buffer: &PcmBuffer,
        encoder: &mut dyn Encoder,
    ) -> AudioResult<Vec<u8>> {
        encode_all(encoder, &buffer.quantize())
    }
}

impl Default for HarmonyEngine {
    /// 44100 Hz with random detune, matching the preview endpoint.
    fn default() -> Self {
        Self::new(44100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AudioError;
    use pretty_assertions::assert_eq;

    fn features(chroma: Vec<f64>, brightness: f64, duration: f64) -> ToneFeatureSet {
        ToneFeatureSet {
            chroma_mean: chroma,
            spectral_centroid_mean: brightness,
            spectral_bandwidth_mean: None,
            rms_energy: 0.1,
            zero_crossing_rate: 0.05,
            tempo_bpm: 120.0,
            duration_sec: duration,
        }
    }

    fn engine() -> HarmonyEngine {
        HarmonyEngine::new(44100).with_detune(Detune::Off)
    }

    #[test]
    fn test_recommend_shape() {
        let mut chroma = vec![0.1; 12];
        chroma[0] = 0.9;
        let result = engine().recommend(&features(chroma, 1000.0, 2.0), "keyboard").unwrap();

        assert!(result.chords.contains(&ChordSymbol::C));
        assert_eq!(result.progression.chords(), result.chords.as_slice());
        assert_eq!(result.preview.len(), 88200);
    }

    #[test]
    fn test_bright_features_reorder_progression() {
        let mut chroma = vec![0.1; 12];
        chroma[0] = 0.9;
        let dark = engine().recommend(&features(chroma.clone(), 1000.0, 1.0), "keyboard").unwrap();
        let bright = engine().recommend(&features(chroma, 2000.0, 1.0), "keyboard").unwrap();

        assert_eq!(dark.chords, bright.chords);
        let mut swapped = dark.progression.chords().to_vec();
        swapped.swap(1, 2);
        assert_eq!(bright.progression.chords(), swapped.as_slice());
    }

    #[test]
    fn test_missing_chroma_falls_back_to_defaults() {
        let result = engine().recommend(&features(vec![], 1000.0, 1.0), "bass").unwrap();
        assert_eq!(
            result.chords,
            vec![ChordSymbol::C, ChordSymbol::G, ChordSymbol::F]
        );
    }

    #[test]
    fn test_missing_duration_is_fatal() {
        let err = engine()
            .recommend(&features(vec![], 1000.0, 0.0), "bass")
            .unwrap_err();
        assert!(matches!(err, AudioError::InvalidDuration { .. }));
        assert_eq!(err.stage(), "synthesis");
    }

    #[test]
    fn test_regenerate_is_idempotent_with_pinned_detune() {
        let engine = HarmonyEngine::new(44100).with_detune(Detune::Seeded(9));
        let feats = features(vec![0.2; 12], 1700.0, 1.5);
        let first = engine.recommend(&feats, "ukulele").unwrap();
        let second = engine.regenerate(&feats, "ukulele").unwrap();

        assert_eq!(first.chords, second.chords);
        assert_eq!(first.progression, second.progression);
        assert_eq!(first.preview.pcm_hash(), second.preview.pcm_hash());
    }

    #[test]
    fn test_mix_with_original_trims_to_shorter() {
        let feats = features(vec![], 1000.0, 2.0);
        let result = engine().recommend(&feats, "keyboard").unwrap();
        let original = PcmBuffer::new(vec![0.3; 44100], 44100); // 1.0s clip
        let mixed = engine().mix_with_original(&original, &result.preview).unwrap();
        assert_eq!(mixed.len(), 44100);
    }
}
