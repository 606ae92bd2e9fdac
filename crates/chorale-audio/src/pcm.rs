//! Sample-rate-tagged PCM buffers.
//!
//! A [`PcmBuffer`] is a mono sequence of f64 samples in [-1, 1], owned by
//! whichever pipeline stage produced it. Normalization uses an epsilon bias
//! rather than a hard zero-check so near-silent buffers still produce
//! output, just at very low loudness.

/// Bias added to the peak before dividing, guarding near-silent input.
pub const NORMALIZE_EPSILON: f64 = 1e-6;

/// A mono PCM buffer tagged with its sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct PcmBuffer {
    samples: Vec<f64>,
    sample_rate: u32,
}

impl PcmBuffer {
    /// Creates a buffer from samples and their sample rate.
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Buffer duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Immutable view of the samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consumes the buffer, yielding its samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Peak absolute amplitude.
    pub fn peak(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.abs())
            .fold(0.0_f64, |a, b| a.max(b))
    }

    /// Divides every sample by `peak + epsilon`.
    ///
    /// The result's peak is strictly below 1.0; silence stays silent.
    pub fn normalize(&mut self) {
        let scale = 1.0 / (self.peak() + NORMALIZE_EPSILON);
        for sample in &mut self.samples {
            *sample *= scale;
        }
    }

    /// Quantizes to 16-bit signed PCM (`* 32767`, rounded).
    ///
    /// Samples are clipped to [-1, 1] first; a normalized buffer never
    /// clips.
    pub fn quantize(&self) -> Vec<i16> {
        self.samples
            .iter()
            .map(|&sample| (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16)
            .collect()
    }

    /// BLAKE3 hash of the quantized PCM, for bit-exactness checks.
    pub fn pcm_hash(&self) -> String {
        let mut bytes = Vec::with_capacity(self.samples.len() * 2);
        for value in self.quantize() {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        blake3::hash(&bytes).to_hex().to_string()
    }
}
