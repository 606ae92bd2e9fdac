//! Chord selection from a chroma vector.
//!
//! Ranks the 12 pitch-class bins by magnitude and maps the strongest bins
//! through a fixed pitch-class table. The result is always at least three
//! distinct chords; weak or unusable chroma falls back to the default list.

use crate::symbol::ChordSymbol;

/// Fallback chords, appended in this order when selection comes up short.
pub const DEFAULT_CHORDS: [ChordSymbol; 3] = [ChordSymbol::C, ChordSymbol::G, ChordSymbol::F];

/// Number of pitch-class bins considered for selection.
const TOP_BINS: usize = 3;

/// Fixed pitch-class -> chord mapping.
///
/// Only diatonic-ish classes map to chords; the rest have no entry and
/// their bins are dropped from selection.
fn chord_for_pitch_class(pitch_class: usize) -> Option<ChordSymbol> {
    match pitch_class {
        0 => Some(ChordSymbol::C),
        2 => Some(ChordSymbol::D),
        4 => Some(ChordSymbol::Em),
        5 => Some(ChordSymbol::F),
        7 => Some(ChordSymbol::G),
        9 => Some(ChordSymbol::Am),
        11 => Some(ChordSymbol::Em),
        _ => None,
    }
}

/// Selects at least three distinct chords for a chroma vector.
///
/// Bins are ranked by magnitude descending, ties broken by the lower
/// pitch-class index so selection is deterministic. The top three bins map
/// through the fixed table (unmapped bins dropped silently), duplicates are
/// removed preserving first-seen order, and [`DEFAULT_CHORDS`] pad the
/// result up to three. An absent or empty chroma vector is a recognized
/// fallback, not an error: the default list is returned directly.
pub fn select(chroma: &[f64]) -> Vec<ChordSymbol> {
    if chroma.is_empty() {
        return DEFAULT_CHORDS.to_vec();
    }

    let mut ranked: Vec<usize> = (0..chroma.len().min(12)).collect();
    ranked.sort_by(|&a, &b| chroma[b].total_cmp(&chroma[a]).then(a.cmp(&b)));

    let mut selected: Vec<ChordSymbol> = Vec::with_capacity(TOP_BINS);
    for &bin in ranked.iter().take(TOP_BINS) {
        if let Some(chord) = chord_for_pitch_class(bin) {
            if !selected.contains(&chord) {
                selected.push(chord);
            }
        }
    }

    for chord in DEFAULT_CHORDS {
        if selected.len() >= TOP_BINS {
            break;
        }
        if !selected.contains(&chord) {
            selected.push(chord);
        }
    }

    selected
}
