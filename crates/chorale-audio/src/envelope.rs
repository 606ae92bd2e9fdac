//! ADSR envelope generation for chord segments.
//!
//! Each chord segment is shaped by a linear ADSR curve: ramp 0 to 1 over
//! the attack, ramp 1 to the sustain level over the decay, hold, then ramp
//! to 0 over the release, ending exactly at the segment boundary. When
//! attack + decay + release would exceed the segment, all three are scaled
//! down proportionally so the sustain region never goes negative.

use chorale_core::Envelope;

/// ADSR envelope parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrParams {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl AdsrParams {
    /// Creates new ADSR parameters, clamping out-of-range values.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack: attack.max(0.0),
            decay: decay.max(0.0),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(0.0),
        }
    }
}

impl Default for AdsrParams {
    fn default() -> Self {
        Self {
            attack: 0.05,
            decay: 0.1,
            sustain: 0.7,
            release: 0.2,
        }
    }
}

impl From<&Envelope> for AdsrParams {
    fn from(envelope: &Envelope) -> Self {
        Self::new(
            envelope.attack,
            envelope.decay,
            envelope.sustain,
            envelope.release,
        )
    }
}

/// Generates the amplitude curve for a segment of `num_samples` samples.
///
/// The curve is linear in every phase and reaches 0 exactly at the segment
/// end. If attack + decay + release exceed the segment duration, the three
/// windows shrink proportionally.
pub fn amplitude_curve(params: &AdsrParams, num_samples: usize, sample_rate: f64) -> Vec<f64> {
    if num_samples == 0 {
        return Vec::new();
    }

    let duration = num_samples as f64 / sample_rate;
    let total_adr = params.attack + params.decay + params.release;
    let scale = if total_adr > duration && total_adr > 0.0 {
        duration / total_adr
    } else {
        1.0
    };
    let attack = params.attack * scale;
    let decay = params.decay * scale;
    let release = params.release * scale;
    let release_start = duration - release;

    let mut curve = Vec::with_capacity(num_samples);
    for i in 0..num_samples {
        let t = i as f64 / sample_rate;
        let level = if t < attack {
            t / attack
        } else if t < attack + decay {
            1.0 - (1.0 - params.sustain) * ((t - attack) / decay)
        } else if t < release_start || release <= 0.0 {
            params.sustain
        } else {
            (params.sustain * (1.0 - (t - release_start) / release)).max(0.0)
        };
        curve.push(level);
    }

    curve
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_params_from_catalog_envelope() {
        let envelope = Envelope {
            attack: 0.02,
            decay: 0.2,
            sustain: 0.6,
            release: 0.2,
        };
        let params = AdsrParams::from(&envelope);
        assert_eq!(params.attack, 0.02);
        assert_eq!(params.sustain, 0.6);
    }

    #[test]
    fn test_params_clamp_out_of_range() {
        let params = AdsrParams::new(-0.1, 0.1, 1.5, -1.0);
        assert_eq!(params.attack, 0.0);
        assert_eq!(params.sustain, 1.0);
        assert_eq!(params.release, 0.0);
    }

    #[test]
    fn test_curve_length() {
        let curve = amplitude_curve(&AdsrParams::default(), 441, 44100.0);
        assert_eq!(curve.len(), 441);
    }

    #[test]
    fn test_attack_ramps_from_zero() {
        let params = AdsrParams::new(0.1, 0.0, 1.0, 0.0);
        let curve = amplitude_curve(&params, 1000, 1000.0);
        assert_eq!(curve[0], 0.0);
        // Halfway through the attack window
        assert!((curve[50] - 0.5).abs() < 0.02);
        assert!((curve[100] - 1.0).abs() < 0.02);
    }

    #[test]
    fn test_decay_settles_at_sustain() {
        let params = AdsrParams::new(0.0, 0.1, 0.5, 0.0);
        let curve = amplitude_curve(&params, 1000, 1000.0);
        assert!((curve[500] - 0.5).abs() < 0.01);
        assert!((curve[999] - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_release_ends_at_zero() {
        let params = AdsrParams::new(0.0, 0.0, 1.0, 0.2);
        let curve = amplitude_curve(&params, 1000, 1000.0);
        // Sustain until release starts at 0.8s
        assert!((curve[799] - 1.0).abs() < 0.01);
        assert!((curve[900] - 0.5).abs() < 0.01);
        assert!(curve[999] < 0.01);
    }

    #[test]
    fn test_oversized_adsr_clamps_proportionally() {
        // attack + decay + release = 1.0s against a 0.5s segment
        let params = AdsrParams::new(0.4, 0.2, 0.5, 0.4);
        let curve = amplitude_curve(&params, 500, 1000.0);
        assert_eq!(curve.len(), 500);
        // Attack shrinks to 0.2s
        assert!((curve[100] - 0.5).abs() < 0.02);
        assert!((curve[199] - 1.0).abs() < 0.02);
        // Curve still ends at zero
        assert!(curve[499] < 0.02);
        // No negative levels anywhere
        assert!(curve.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_empty_segment() {
        let curve = amplitude_curve(&AdsrParams::default(), 0, 44100.0);
        assert!(curve.is_empty());
    }
}
