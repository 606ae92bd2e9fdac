//! Error types for chord and progression logic.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while building chord data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A chord symbol that is not part of the catalog vocabulary.
    #[error("unknown chord symbol: '{symbol}'")]
    UnknownChord {
        /// The offending symbol as written.
        symbol: String,
    },

    /// A progression with no chords in it.
    #[error("progression must contain at least one chord")]
    EmptyProgression,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_chord_message() {
        let err = CoreError::UnknownChord {
            symbol: "H7".to_string(),
        };
        assert!(err.to_string().contains("H7"));
    }
}
