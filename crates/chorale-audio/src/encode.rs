//! Encoder boundary for compressed preview output.
//!
//! The engine hands normalized 16-bit mono PCM to an [`Encoder`] and
//! expects compressed bytes back. Encoders are streaming: [`Encoder::encode`]
//! may buffer, and [`Encoder::finish`] must flush trailing state -- a
//! partial encode without `finish` is a defect. Lossy encoders (MP3 et al.)
//! live outside this crate; the in-tree [`WavEncoder`] writes a
//! deterministic RIFF/WAV container and serves tests and uncompressed
//! previews.

use std::io::Write;

use crate::error::{AudioError, AudioResult};

/// Encoder quality preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderQuality {
    /// Fastest, lowest quality.
    Low,
    /// The default tradeoff.
    Medium,
    /// Slowest, highest quality.
    High,
}

/// Parameters for one encoding session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// PCM sample rate in Hz.
    pub sample_rate: u32,
    /// Target bitrate in kbit/s (meaningful to lossy encoders).
    pub bitrate_kbps: u32,
    /// Quality preset.
    pub quality: EncoderQuality,
    /// Channel count; this design is mono-only.
    pub channels: u16,
}

impl EncoderConfig {
    /// Mono config at the default 192 kbps / medium quality.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            bitrate_kbps: 192,
            quality: EncoderQuality::Medium,
            channels: 1,
        }
    }
}

/// A streaming PCM encoder.
pub trait Encoder {
    /// Encodes a block of 16-bit mono samples, returning any bytes ready so
    /// far. Implementations may buffer and return nothing until
    /// [`finish`](Encoder::finish).
    fn encode(&mut self, pcm: &[i16]) -> AudioResult<Vec<u8>>;

    /// Flushes trailing encoder state and returns the remaining bytes.
    /// The session is over afterwards; further calls are an error.
    fn finish(&mut self) -> AudioResult<Vec<u8>>;
}

/// Encodes a complete PCM buffer in one call, including the flush.
pub fn encode_all(encoder: &mut dyn Encoder, pcm: &[i16]) -> AudioResult<Vec<u8>> {
    let mut out = encoder.encode(pcm)?;
    out.extend(encoder.finish()?);
    Ok(out)
}

/// Deterministic 16-bit PCM RIFF/WAV encoder.
///
/// Buffers samples on `encode` and emits the complete container on
/// `finish`. No timestamps or variable metadata, so identical PCM yields
/// identical bytes.
#[derive(Debug)]
pub struct WavEncoder {
    config: EncoderConfig,
    samples: Vec<i16>,
    finished: bool,
}

impl WavEncoder {
    /// Creates a WAV encoder for the given config.
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            config,
            samples: Vec::new(),
            finished: false,
        }
    }
}

impl Encoder for WavEncoder {
    fn encode(&mut self, pcm: &[i16]) -> AudioResult<Vec<u8>> {
        if self.finished {
            return Err(AudioError::encoding("encode called after finish"));
        }
        self.samples.extend_from_slice(pcm);
        Ok(Vec::new())
    }

    fn finish(&mut self) -> AudioResult<Vec<u8>> {
        if self.finished {
            return Err(AudioError::encoding("finish called twice"));
        }
        self.finished = true;

        let bytes_per_sample = 2u32;
        let channels = self.config.channels as u32;
        let data_size = self.samples.len() as u32 * bytes_per_sample;
        let byte_rate = self.config.sample_rate * channels * bytes_per_sample;
        let block_align = (channels * bytes_per_sample) as u16;

        let mut out = Vec::with_capacity(44 + data_size as usize);

        // RIFF header
        out.write_all(b"RIFF")?;
        out.write_all(&(36 + data_size).to_le_bytes())?;
        out.write_all(b"WAVE")?;

        // fmt chunk
        out.write_all(b"fmt ")?;
        out.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
        out.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
        out.write_all(&self.config.channels.to_le_bytes())?;
        out.write_all(&self.config.sample_rate.to_le_bytes())?;
        out.write_all(&byte_rate.to_le_bytes())?;
        out.write_all(&block_align.to_le_bytes())?;
        out.write_all(&16u16.to_le_bytes())?; // Bits per sample

        // data chunk
        out.write_all(b"data")?;
        out.write_all(&data_size.to_le_bytes())?;
        for sample in &self.samples {
            out.write_all(&sample.to_le_bytes())?;
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_defaults() {
        let config = EncoderConfig::mono(44100);
        assert_eq!(config.bitrate_kbps, 192);
        assert_eq!(config.quality, EncoderQuality::Medium);
        assert_eq!(config.channels, 1);
    }

    #[test]
    fn test_wav_header_and_size() {
        let mut encoder = WavEncoder::new(EncoderConfig::mono(44100));
        let pcm = vec![0i16; 100];
        let bytes = encode_all(&mut encoder, &pcm).unwrap();

        assert_eq!(bytes.len(), 44 + 200);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[36..40], b"data");
        // Mono, 16-bit, 44100 Hz
        assert_eq!(u16::from_le_bytes([bytes[22], bytes[23]]), 1);
        assert_eq!(u32::from_le_bytes([bytes[24], bytes[25], bytes[26], bytes[27]]), 44100);
        assert_eq!(u16::from_le_bytes([bytes[34], bytes[35]]), 16);
    }

    #[test]
    fn test_samples_round_trip_through_container() {
        let mut encoder = WavEncoder::new(EncoderConfig::mono(22050));
        let pcm = vec![1i16, -1, 32767, -32767];
        let bytes = encode_all(&mut encoder, &pcm).unwrap();

        let data = &bytes[44..];
        let decoded: Vec<i16> = data
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        assert_eq!(decoded, pcm);
    }

    #[test]
    fn test_deterministic_output() {
        let pcm = vec![5i16; 64];
        let a = encode_all(&mut WavEncoder::new(EncoderConfig::mono(44100)), &pcm).unwrap();
        let b = encode_all(&mut WavEncoder::new(EncoderConfig::mono(44100)), &pcm).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_after_finish_is_an_error() {
        let mut encoder = WavEncoder::new(EncoderConfig::mono(44100));
        encoder.encode(&[0, 0]).unwrap();
        encoder.finish().unwrap();
        assert!(encoder.encode(&[0]).is_err());
        assert!(encoder.finish().is_err());
    }

    #[test]
    fn test_streaming_encode_accumulates() {
        let mut encoder = WavEncoder::new(EncoderConfig::mono(44100));
        assert!(encoder.encode(&[1, 2]).unwrap().is_empty());
        assert!(encoder.encode(&[3]).unwrap().is_empty());
        let bytes = encoder.finish().unwrap();
        assert_eq!(bytes.len(), 44 + 6);
    }
}
