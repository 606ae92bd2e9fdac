//! Deterministic RNG and the detune policy.
//!
//! All randomness in the backend flows through PCG32 generators. Seeds are
//! derived with BLAKE3 so different components get independent streams, and
//! every render draws from its own generator -- there is no shared mutable
//! RNG.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a component seed from a base seed and a string key.
///
/// BLAKE3 of the little-endian base seed concatenated with the key,
/// truncated to the first four bytes.
pub fn derive_component_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let bytes: [u8; 4] = hash.as_bytes()[0..4]
        .try_into()
        .expect("hash has at least 4 bytes");
    u32::from_le_bytes(bytes)
}

/// Per-tone detune policy for synthesis.
///
/// Detune is a cosmetic jitter of up to ±0.5 Hz per tone. It is not part of
/// the contract under test: callers that need bit-exact output pin it with
/// [`Detune::Off`] or [`Detune::Seeded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detune {
    /// No detune; every tone plays its catalog frequency exactly.
    Off,
    /// Deterministic detune from a caller-provided seed.
    Seeded(u32),
    /// Fresh entropy per render; output varies between renders.
    Random,
}

impl Detune {
    /// The generator backing this policy, if any.
    ///
    /// `Seeded` derives a component seed so the detune stream is
    /// independent of any other use of the same base seed.
    pub(crate) fn rng(self) -> Option<Pcg32> {
        match self {
            Detune::Off => None,
            Detune::Seeded(seed) => Some(create_rng(derive_component_seed(seed, "detune"))),
            Detune::Random => Some(Pcg32::from_entropy()),
        }
    }
}
