//! Base64 WAV payload decoding
//!
//! Accepts the browser's `data:audio/wav;base64,...` data-URL form as well
//! as a bare base64 string, and produces a mono 16 kHz [`AudioClip`].

use super::{AudioClip, SAMPLE_RATE};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hound::{SampleFormat, WavReader};
use ppg_common::{Error, Result};
use std::io::Cursor;
use tracing::debug;

/// Decode a base64-encoded WAV payload into a mono 16 kHz clip.
///
/// Multi-channel audio is downmixed by averaging; other sample rates are
/// linearly resampled to [`SAMPLE_RATE`].
pub fn decode_base64_wav(payload: &str) -> Result<AudioClip> {
    // Data-URL payloads carry a "data:audio/wav;base64," prefix
    let encoded = match payload.split_once(',') {
        Some((prefix, rest)) if prefix.contains("base64") => rest,
        _ => payload,
    };

    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| Error::AudioDecode(format!("Invalid base64 payload: {}", e)))?;

    let mut reader = WavReader::new(Cursor::new(bytes))
        .map_err(|e| Error::AudioDecode(format!("Invalid WAV container: {}", e)))?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| Error::AudioDecode(format!("Failed to read samples: {}", e)))?,
        SampleFormat::Int => {
            let scale = 1.0 / (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 * scale))
                .collect::<std::result::Result<_, _>>()
                .map_err(|e| Error::AudioDecode(format!("Failed to read samples: {}", e)))?
        }
    };

    if samples.is_empty() {
        return Err(Error::AudioDecode("WAV contains no samples".to_string()));
    }

    let mono = downmix(&samples, spec.channels as usize);
    let resampled = if spec.sample_rate == SAMPLE_RATE {
        mono
    } else {
        resample_linear(&mono, spec.sample_rate, SAMPLE_RATE)
    };

    debug!(
        "Decoded WAV: {} ch @ {} Hz -> {} mono samples @ {} Hz",
        spec.channels,
        spec.sample_rate,
        resampled.len(),
        SAMPLE_RATE
    );

    Ok(AudioClip { samples: resampled })
}

/// Average interleaved channels down to mono
fn downmix(samples: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return samples.to_vec();
    }
    samples
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

/// Linear-interpolation resampler
///
/// Sufficient for speech feature extraction; the band-limiting error is
/// far below what the downstream mel bank resolves.
fn resample_linear(input: &[f32], from_rate: u32, to_rate: u32) -> Vec<f32> {
    let ratio = from_rate as f64 / to_rate as f64;
    let out_len = ((input.len() as f64) / ratio).floor() as usize;
    let mut output = Vec::with_capacity(out_len);

    for i in 0..out_len {
        let pos = i as f64 * ratio;
        let idx = pos as usize;
        let frac = (pos - idx as f64) as f32;
        let a = input[idx];
        let b = input.get(idx + 1).copied().unwrap_or(a);
        output.push(a + (b - a) * frac);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wav_bytes(spec: hound::WavSpec, samples: &[i16]) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            for &s in samples {
                writer.write_sample(s).unwrap();
            }
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }

    fn encode(bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }

    #[test]
    fn decodes_mono_16k_wav() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 16_000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let samples: Vec<i16> = (0..1600).map(|i| (i % 100) as i16 * 100).collect();
        let payload = encode(&wav_bytes(spec, &samples));

        let clip = decode_base64_wav(&payload).unwrap();
        assert_eq!(clip.samples.len(), 1600);
        assert!((clip.duration_secs() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn strips_data_url_prefix() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 16_000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let payload = format!(
            "data:audio/wav;base64,{}",
            encode(&wav_bytes(spec, &[0, 1000, -1000, 500]))
        );

        let clip = decode_base64_wav(&payload).unwrap();
        assert_eq!(clip.samples.len(), 4);
    }

    #[test]
    fn downmixes_stereo_to_mono() {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 16_000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        // L = 1000, R = -1000 -> mono averages to 0
        let samples: Vec<i16> = [1000i16, -1000].repeat(50);
        let payload = encode(&wav_bytes(spec, &samples));

        let clip = decode_base64_wav(&payload).unwrap();
        assert_eq!(clip.samples.len(), 50);
        for s in &clip.samples {
            assert!(s.abs() < 1e-6);
        }
    }

    #[test]
    fn resamples_to_16k() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 48_000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let samples: Vec<i16> = vec![0; 4800]; // 100 ms @ 48 kHz
        let payload = encode(&wav_bytes(spec, &samples));

        let clip = decode_base64_wav(&payload).unwrap();
        assert_eq!(clip.samples.len(), 1600); // 100 ms @ 16 kHz
    }

    #[test]
    fn rejects_garbage_payload() {
        assert!(decode_base64_wav("!!not-base64!!").is_err());
        let not_wav = STANDARD.encode(b"definitely not a wav file");
        assert!(decode_base64_wav(&not_wav).is_err());
    }
}
