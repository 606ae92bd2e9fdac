//! Chord symbols and progressions.
//!
//! A [`ChordSymbol`] is any symbol the pitch-class mapping can produce: the
//! twelve major roots plus the two minor chords the selector emits. Not every
//! symbol has a triad in the catalog; see [`crate::catalog::triad`].

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A chord symbol from the fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordSymbol {
    /// C major.
    C,
    /// C# major.
    #[serde(rename = "C#")]
    CSharp,
    /// D major.
    D,
    /// D# major.
    #[serde(rename = "D#")]
    DSharp,
    /// E major.
    E,
    /// F major.
    F,
    /// F# major.
    #[serde(rename = "F#")]
    FSharp,
    /// G major.
    G,
    /// G# major.
    #[serde(rename = "G#")]
    GSharp,
    /// A major.
    A,
    /// A# major.
    #[serde(rename = "A#")]
    ASharp,
    /// B major.
    B,
    /// A minor.
    Am,
    /// E minor.
    Em,
}

impl ChordSymbol {
    /// The symbol as written in chord charts.
    pub fn name(self) -> &'static str {
        match self {
            ChordSymbol::C => "C",
            ChordSymbol::CSharp => "C#",
            ChordSymbol::D => "D",
            ChordSymbol::DSharp => "D#",
            ChordSymbol::E => "E",
            ChordSymbol::F => "F",
            ChordSymbol::FSharp => "F#",
            ChordSymbol::G => "G",
            ChordSymbol::GSharp => "G#",
            ChordSymbol::A => "A",
            ChordSymbol::ASharp => "A#",
            ChordSymbol::B => "B",
            ChordSymbol::Am => "Am",
            ChordSymbol::Em => "Em",
        }
    }
}

impl fmt::Display for ChordSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChordSymbol {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "C" => Ok(ChordSymbol::C),
            "C#" => Ok(ChordSymbol::CSharp),
            "D" => Ok(ChordSymbol::D),
            "D#" => Ok(ChordSymbol::DSharp),
            "E" => Ok(ChordSymbol::E),
            "F" => Ok(ChordSymbol::F),
            "F#" => Ok(ChordSymbol::FSharp),
            "G" => Ok(ChordSymbol::G),
            "G#" => Ok(ChordSymbol::GSharp),
            "A" => Ok(ChordSymbol::A),
            "A#" => Ok(ChordSymbol::ASharp),
            "B" => Ok(ChordSymbol::B),
            "Am" => Ok(ChordSymbol::Am),
            "Em" => Ok(ChordSymbol::Em),
            other => Err(CoreError::UnknownChord {
                symbol: other.to_string(),
            }),
        }
    }
}

/// An ordered chord sequence of length >= 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ChordSymbol>", into = "Vec<ChordSymbol>")]
pub struct Progression(Vec<ChordSymbol>);

impl Progression {
    /// Creates a progression, rejecting empty sequences.
    pub fn new(chords: Vec<ChordSymbol>) -> CoreResult<Self> {
        if chords.is_empty() {
            return Err(CoreError::EmptyProgression);
        }
        Ok(Self(chords))
    }

    /// Number of chords.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; progressions hold at least one chord.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The chords in playing order.
    pub fn chords(&self) -> &[ChordSymbol] {
        &self.0
    }
}

impl Deref for Progression {
    type Target = [ChordSymbol];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Vec<ChordSymbol>> for Progression {
    type Error = CoreError;

    fn try_from(chords: Vec<ChordSymbol>) -> Result<Self, Self::Error> {
        Self::new(chords)
    }
}

impl From<Progression> for Vec<ChordSymbol> {
    fn from(progression: Progression) -> Self {
        progression.0
    }
}

impl fmt::Display for Progression {
    /// Formats as `C -> G -> F`, the shape the recommendation response uses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chord) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", chord)?;
        }
        Ok(())
    }
}
