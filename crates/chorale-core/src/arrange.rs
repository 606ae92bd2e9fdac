//! Progression arrangement by brightness.
//!
//! Bright material (spectral centroid at or above the threshold) swaps the
//! second and third chords; darker material keeps the selection order. This
//! reorders only -- chord quality is never altered.

use crate::error::CoreResult;
use crate::symbol::{ChordSymbol, Progression};

/// Spectral-centroid threshold separating dark from bright arrangements.
pub const BRIGHTNESS_THRESHOLD_HZ: f64 = 1500.0;

/// Arranges selected chords into a progression.
///
/// Below [`BRIGHTNESS_THRESHOLD_HZ`] the chords keep their selection order.
/// At or above it, positions 1 and 2 of the first three chords swap; any
/// chords past the first three keep their original order. Input shorter
/// than three chords (which the selector never produces) is passed through
/// unswapped; only an empty input is an error.
pub fn arrange(chords: &[ChordSymbol], brightness: f64) -> CoreResult<Progression> {
    let mut ordered = chords.to_vec();
    if brightness >= BRIGHTNESS_THRESHOLD_HZ && ordered.len() >= 3 {
        ordered.swap(1, 2);
    }
    Progression::new(ordered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use pretty_assertions::assert_eq;

    const CGF: [ChordSymbol; 3] = [ChordSymbol::C, ChordSymbol::G, ChordSymbol::F];

    #[test]
    fn test_dark_keeps_selection_order() {
        let progression = arrange(&CGF, 1000.0).unwrap();
        assert_eq!(progression.chords(), &CGF);
    }

    #[test]
    fn test_bright_swaps_second_and_third() {
        let progression = arrange(&CGF, 2000.0).unwrap();
        assert_eq!(
            progression.chords(),
            &[ChordSymbol::C, ChordSymbol::F, ChordSymbol::G]
        );
    }

    #[test]
    fn test_threshold_is_bright() {
        let progression = arrange(&CGF, BRIGHTNESS_THRESHOLD_HZ).unwrap();
        assert_eq!(
            progression.chords(),
            &[ChordSymbol::C, ChordSymbol::F, ChordSymbol::G]
        );
    }

    #[test]
    fn test_tail_keeps_original_order() {
        let chords = [
            ChordSymbol::C,
            ChordSymbol::G,
            ChordSymbol::F,
            ChordSymbol::Am,
            ChordSymbol::D,
        ];
        let progression = arrange(&chords, 2000.0).unwrap();
        assert_eq!(
            progression.chords(),
            &[
                ChordSymbol::C,
                ChordSymbol::F,
                ChordSymbol::G,
                ChordSymbol::Am,
                ChordSymbol::D,
            ]
        );
    }

    #[test]
    fn test_short_input_passes_through() {
        let chords = [ChordSymbol::C, ChordSymbol::G];
        let progression = arrange(&chords, 2000.0).unwrap();
        assert_eq!(progression.chords(), &chords);
    }

    #[test]
    fn test_empty_input_is_error() {
        assert_eq!(arrange(&[], 1000.0).unwrap_err(), CoreError::EmptyProgression);
    }
}
