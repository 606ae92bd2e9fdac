//! Mixing the harmony preview with the original recording.
//!
//! Both buffers must share a sample rate; resampling is the decoder's job
//! and stays outside this crate. The shorter buffer dictates the output
//! length -- a deliberate simplification, not an error.

use crate::error::{AudioError, AudioResult};
use crate::pcm::PcmBuffer;

/// Default gain applied to the harmony so it does not overpower the source.
pub const DEFAULT_HARMONY_GAIN: f64 = 0.5;

/// Sums a harmony buffer onto an original recording.
#[derive(Debug, Clone, Copy)]
pub struct AudioMixer {
    harmony_gain: f64,
}

impl AudioMixer {
    /// Creates a mixer with [`DEFAULT_HARMONY_GAIN`].
    pub fn new() -> Self {
        Self {
            harmony_gain: DEFAULT_HARMONY_GAIN,
        }
    }

    /// Sets the harmony gain ratio.
    pub fn with_harmony_gain(mut self, gain: f64) -> Self {
        self.harmony_gain = gain;
        self
    }

    /// Mixes `harmony` into `original`.
    ///
    /// Trims both buffers to the shorter length, scales the harmony by the
    /// gain, sums sample-wise, then renormalizes with the epsilon bias so
    /// the result never clips. Near-silent input still produces output.
    pub fn mix(&self, original: &PcmBuffer, harmony: &PcmBuffer) -> AudioResult<PcmBuffer> {
        if original.sample_rate() != harmony.sample_rate() {
            return Err(AudioError::SampleRateMismatch {
                original: original.sample_rate(),
                harmony: harmony.sample_rate(),
            });
        }

        let len = original.len().min(harmony.len());
        let mut samples = Vec::with_capacity(len);
        for i in 0..len {
            samples.push(original.samples()[i] + harmony.samples()[i] * self.harmony_gain);
        }

        let mut mixed = PcmBuffer::new(samples, original.sample_rate());
        mixed.normalize();
        Ok(mixed)
    }
}

impl Default for AudioMixer {
    fn default() -> Self {
        Self::new()
    }
}
