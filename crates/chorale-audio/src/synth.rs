//! Chord progression synthesis.
//!
//! Renders a progression as weighted additive sine synthesis: each chord is
//! the sum of three sine tones at its triad frequencies, weighted by the
//! instrument's harmonic weights, shaped by its ADSR envelope, and laid out
//! back to back across the target duration.

use std::f64::consts::PI;

use rand::Rng;

use chorale_core::{catalog, ChordSymbol};

use crate::envelope::{amplitude_curve, AdsrParams};
use crate::error::{AudioError, AudioResult};
use crate::pcm::PcmBuffer;
use crate::rng::Detune;

/// Maximum per-tone detune magnitude in Hz.
pub const DETUNE_RANGE_HZ: f64 = 0.5;

/// Renders chord progressions to normalized PCM.
#[derive(Debug, Clone, Copy)]
pub struct ChordSynthesizer {
    sample_rate: u32,
    detune: Detune,
}

impl ChordSynthesizer {
    /// Creates a synthesizer for the given sample rate.
    ///
    /// Detune defaults to [`Detune::Random`]; use [`with_detune`] to pin or
    /// disable it for reproducible output.
    ///
    /// [`with_detune`]: ChordSynthesizer::with_detune
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            detune: Detune::Random,
        }
    }

    /// Sets the detune policy.
    pub fn with_detune(mut self, detune: Detune) -> Self {
        self.detune = detune;
        self
    }

    /// Sample rate this synthesizer renders at.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Renders `chords` across `duration_sec` seconds.
    ///
    /// The duration divides evenly across the chords; the output is padded
    /// or truncated to exactly `round(duration_sec * sample_rate)` samples
    /// and normalized so its peak is at most 1.0.
    ///
    /// Fatal conditions: an empty chord sequence, a chord with no triad in
    /// the catalog, a non-positive duration, a zero sample rate. No partial
    /// buffer is produced on failure.
    pub fn render(
        &self,
        chords: &[ChordSymbol],
        instrument: &str,
        duration_sec: f64,
    ) -> AudioResult<PcmBuffer> {
        if self.sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if !duration_sec.is_finite() || duration_sec <= 0.0 {
            return Err(AudioError::InvalidDuration {
                duration: duration_sec,
            });
        }
        if chords.is_empty() {
            return Err(AudioError::EmptyProgression);
        }

        // Resolve all triads up front so an unknown chord never leaves a
        // partially rendered buffer behind.
        let mut triads = Vec::with_capacity(chords.len());
        for &chord in chords {
            let triad = catalog::triad(chord).ok_or_else(|| AudioError::UnknownChord {
                symbol: chord.name().to_string(),
            })?;
            triads.push(triad);
        }

        let profile = catalog::instrument_profile(instrument);
        let adsr = AdsrParams::from(&profile.envelope);

        let sample_rate = self.sample_rate as f64;
        let total_samples = (duration_sec * sample_rate).round() as usize;
        let per_chord_sec = duration_sec / chords.len() as f64;
        let segment_samples = (per_chord_sec * sample_rate).round() as usize;

        let mut rng = self.detune.rng();
        let mut samples = Vec::with_capacity(total_samples);

        for triad in &triads {
            let envelope = amplitude_curve(&adsr, segment_samples, sample_rate);
            let offsets: [f64; 3] = match rng.as_mut() {
                Some(rng) => [
                    rng.gen_range(-DETUNE_RANGE_HZ..=DETUNE_RANGE_HZ),
                    rng.gen_range(-DETUNE_RANGE_HZ..=DETUNE_RANGE_HZ),
                    rng.gen_range(-DETUNE_RANGE_HZ..=DETUNE_RANGE_HZ),
                ],
                None => [0.0; 3],
            };

            for (i, &env) in envelope.iter().enumerate() {
                let t = i as f64 / sample_rate;
                let mut sample = 0.0;
                for k in 0..3 {
                    let freq = triad[k] + offsets[k];
                    sample += profile.weights[k] * (2.0 * PI * freq * t).sin();
                }
                samples.push(sample * env);
            }
        }

        // Pad or truncate the final segment to hit the exact sample count.
        samples.resize(total_samples, 0.0);

        let mut buffer = PcmBuffer::new(samples, self.sample_rate);
        buffer.normalize();
        Ok(buffer)
    }

    /// Renders `chords` to match the duration of an already-loaded clip.
    ///
    /// Identical to [`render`] with `original.duration_seconds()` as the
    /// explicit duration.
    ///
    /// [`render`]: ChordSynthesizer::render
    pub fn render_matching(
        &self,
        chords: &[ChordSymbol],
        instrument: &str,
        original: &PcmBuffer,
    ) -> AudioResult<PcmBuffer> {
        self.render(chords, instrument, original.duration_seconds())
    }
}
