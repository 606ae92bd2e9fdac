//! Error types for the synthesis backend.

use chorale_core::CoreError;
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur in the synthesis pipeline.
///
/// Every fatal condition identifies its stage; see [`AudioError::stage`].
/// None of these are retried -- the pipeline is deterministic enough that a
/// retry with unchanged input reproduces the same failure.
#[derive(Debug, Error)]
pub enum AudioError {
    /// A progression with no chords reached the synthesizer.
    #[error("synthesis error: progression contains no chords")]
    EmptyProgression,

    /// A chord symbol with no triad in the catalog.
    #[error("synthesis error: no triad for chord '{symbol}'")]
    UnknownChord {
        /// The offending chord symbol.
        symbol: String,
    },

    /// Non-positive or non-finite render duration.
    #[error("synthesis error: invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid sample rate.
    #[error("synthesis error: invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Mixing inputs with different sample rates (resampling belongs to the
    /// decoder, outside this crate).
    #[error("mixing error: sample rate mismatch: original {original} Hz vs harmony {harmony} Hz")]
    SampleRateMismatch {
        /// Sample rate of the original buffer.
        original: u32,
        /// Sample rate of the harmony buffer.
        harmony: u32,
    },

    /// Failure reported by an encoder implementation.
    #[error("encoding error: {message}")]
    Encoding {
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an encoding error.
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    /// The pipeline stage this error belongs to.
    pub fn stage(&self) -> &'static str {
        match self {
            AudioError::EmptyProgression
            | AudioError::UnknownChord { .. }
            | AudioError::InvalidDuration { .. }
            | AudioError::InvalidSampleRate { .. } => "synthesis",
            AudioError::SampleRateMismatch { .. } => "mixing",
            AudioError::Encoding { .. } | AudioError::Io(_) => "encoding",
        }
    }
}

impl From<CoreError> for AudioError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownChord { symbol } => AudioError::UnknownChord { symbol },
            CoreError::EmptyProgression => AudioError::EmptyProgression,
        }
    }
}
