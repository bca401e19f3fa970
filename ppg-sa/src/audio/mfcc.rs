//! MFCC feature extraction
//!
//! Converts a mono 16 kHz clip into the fixed-shape feature matrix a
//! pronunciation scorer consumes: 13 mel-frequency cepstral coefficients
//! per frame, globally mean/std normalized, padded or truncated to exactly
//! [`TARGET_FRAMES`] frames.
//!
//! Pipeline per frame: Hann window -> real FFT power spectrum ->
//! Slaney-style mel filter bank -> log energies -> orthonormal DCT-II,
//! keeping the first [`N_MFCC`] coefficients.

use super::{AudioClip, SAMPLE_RATE};
use ndarray::{Array2, Array3, Axis};
use ppg_common::{Error, Result};
use realfft::{RealFftPlanner, RealToComplex};
use rustfft::num_complex::Complex;
use std::sync::Arc;
use tracing::debug;

/// Cepstral coefficients per frame
pub const N_MFCC: usize = 13;
/// FFT size (32 ms at 16 kHz)
pub const N_FFT: usize = 512;
/// Hop between successive frames (10 ms at 16 kHz)
pub const HOP_LENGTH: usize = 160;
/// Mel filter bank size
pub const N_MELS: usize = 40;
/// Fixed time dimension of the output matrix
pub const TARGET_FRAMES: usize = 100;

/// Positive frequency bins of the real FFT
const N_FREQ: usize = N_FFT / 2 + 1;

/// Normalization is undefined below this spread
const DEGENERACY_EPS: f32 = 1e-8;

/// Fixed-shape model input: [`N_MFCC`] x [`TARGET_FRAMES`] x 1
pub type FeatureMatrix = Array3<f32>;

/// MFCC feature extractor
///
/// Precomputes the window, mel filter bank, and DCT basis once; `extract`
/// is then a pure function of the input clip. Shared read-only across
/// requests.
pub struct MfccExtractor {
    fft: Arc<dyn RealToComplex<f32>>,
    window: Vec<f32>,
    mel_filters: Vec<f32>, // [N_MELS * N_FREQ]
    dct_basis: Vec<f32>,   // [N_MFCC * N_MELS]
}

impl Default for MfccExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MfccExtractor {
    pub fn new() -> Self {
        Self {
            fft: RealFftPlanner::<f32>::new().plan_fft_forward(N_FFT),
            window: build_hann_window(),
            mel_filters: build_mel_filters(),
            dct_basis: build_dct_basis(),
        }
    }

    /// Extract the fixed-shape feature matrix from a clip.
    ///
    /// Output shape is always [`N_MFCC`] x [`TARGET_FRAMES`] x 1: shorter
    /// clips are zero-padded on the time axis, longer ones truncated.
    /// Silent or constant input yields [`Error::DegenerateAudio`].
    pub fn extract(&self, clip: &AudioClip) -> Result<FeatureMatrix> {
        let coeffs = self.coefficients(clip)?;
        let n_frames = coeffs.ncols();

        let mut fixed = Array2::<f32>::zeros((N_MFCC, TARGET_FRAMES));
        let keep = n_frames.min(TARGET_FRAMES);
        fixed
            .slice_mut(ndarray::s![.., ..keep])
            .assign(&coeffs.slice(ndarray::s![.., ..keep]));

        debug!(
            "Extracted {} MFCC frames from {:.2}s clip (fixed to {})",
            n_frames,
            clip.duration_secs(),
            TARGET_FRAMES
        );

        Ok(fixed.insert_axis(Axis(2)))
    }

    /// Normalized coefficient matrix before the time axis is fixed.
    ///
    /// Values have zero mean and unit standard deviation across the whole
    /// matrix. Exposed separately so tests can assert normalization
    /// independent of padding/truncation.
    pub fn coefficients(&self, clip: &AudioClip) -> Result<Array2<f32>> {
        // Silent or constant input has no spectral variance to normalize
        let (min, max) = clip
            .samples
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &s| {
                (lo.min(s), hi.max(s))
            });
        if clip.samples.is_empty() || (max - min) < DEGENERACY_EPS {
            return Err(Error::DegenerateAudio(
                "clip is silent or constant".to_string(),
            ));
        }

        // Frames are centered on t * hop with zero padding at the edges,
        // so a clip of n samples yields n / hop + 1 frames
        let pad = N_FFT / 2;
        let mut padded = vec![0.0f32; clip.samples.len() + 2 * pad];
        padded[pad..pad + clip.samples.len()].copy_from_slice(&clip.samples);

        let n_frames = (padded.len() - N_FFT) / HOP_LENGTH + 1;
        let mut coeffs = Array2::<f32>::zeros((N_MFCC, n_frames));

        let mut windowed = vec![0.0f32; N_FFT];
        let mut spectrum = vec![Complex::new(0.0f32, 0.0); N_FREQ];
        let mut scratch = self.fft.make_scratch_vec();
        let mut power = vec![0.0f32; N_FREQ];
        let mut mel_db = vec![0.0f32; N_MELS];

        for t in 0..n_frames {
            let start = t * HOP_LENGTH;
            for (i, out) in windowed.iter_mut().enumerate() {
                *out = padded[start + i] * self.window[i];
            }

            self.fft
                .process_with_scratch(&mut windowed, &mut spectrum, &mut scratch)
                .map_err(|e| Error::Internal(format!("FFT failed: {}", e)))?;
            for (p, c) in power.iter_mut().zip(&spectrum) {
                *p = c.norm_sqr();
            }

            for (m, out_m) in mel_db.iter_mut().enumerate() {
                let filt = &self.mel_filters[m * N_FREQ..(m + 1) * N_FREQ];
                let energy: f32 = filt.iter().zip(&power).map(|(f, p)| f * p).sum();
                *out_m = 10.0 * energy.max(1e-10).log10();
            }

            for k in 0..N_MFCC {
                let basis = &self.dct_basis[k * N_MELS..(k + 1) * N_MELS];
                coeffs[[k, t]] = basis.iter().zip(&mel_db).map(|(b, m)| b * m).sum();
            }
        }

        // Global mean/std normalization over the whole matrix, with an
        // explicit guard instead of silent NaN/Inf on zero variance
        let mean = coeffs.mean().unwrap_or(0.0);
        let std = coeffs.std(0.0);
        if std < DEGENERACY_EPS {
            return Err(Error::DegenerateAudio(
                "coefficient matrix has zero variance".to_string(),
            ));
        }
        coeffs.mapv_inplace(|v| (v - mean) / std);

        Ok(coeffs)
    }
}

/// Periodic Hann window: 0.5 * (1 - cos(2*pi*i/N))
fn build_hann_window() -> Vec<f32> {
    (0..N_FFT)
        .map(|i| {
            let angle = 2.0 * std::f32::consts::PI * (i as f32) / (N_FFT as f32);
            0.5 * (1.0 - angle.cos())
        })
        .collect()
}

/// Slaney-style mel scale: linear below 1 kHz, logarithmic above
fn hertz_to_mel(freq: f32) -> f32 {
    const MIN_LOG_HZ: f32 = 1000.0;
    const MIN_LOG_MEL: f32 = 15.0;
    // ln(6.4) / 27
    const LOGSTEP: f32 = 0.068_751_78;

    if freq >= MIN_LOG_HZ {
        MIN_LOG_MEL + (freq / MIN_LOG_HZ).ln() / LOGSTEP
    } else {
        3.0 * freq / 200.0
    }
}

fn mel_to_hertz(mels: f32) -> f32 {
    const MIN_LOG_HZ: f32 = 1000.0;
    const MIN_LOG_MEL: f32 = 15.0;
    const LOGSTEP: f32 = 0.068_751_78;

    if mels >= MIN_LOG_MEL {
        MIN_LOG_HZ * (LOGSTEP * (mels - MIN_LOG_MEL)).exp()
    } else {
        200.0 * mels / 3.0
    }
}

/// Triangular mel filter bank over 0..sr/2 with Slaney area normalization
fn build_mel_filters() -> Vec<f32> {
    let mut fft_freqs = vec![0.0f32; N_FREQ];
    for (f, v) in fft_freqs.iter_mut().enumerate() {
        *v = (f as f32) * (SAMPLE_RATE as f32) / (N_FFT as f32);
    }

    let mel_min = hertz_to_mel(0.0);
    let mel_max = hertz_to_mel((SAMPLE_RATE as f32) / 2.0);

    let mut filter_freqs = vec![0.0f32; N_MELS + 2];
    for (i, v) in filter_freqs.iter_mut().enumerate() {
        let mel = mel_min + (mel_max - mel_min) * (i as f32) / ((N_MELS + 1) as f32);
        *v = mel_to_hertz(mel);
    }

    let mut filters = vec![0.0f32; N_MELS * N_FREQ];
    for m in 0..N_MELS {
        let lower = filter_freqs[m];
        let center = filter_freqs[m + 1];
        let upper = filter_freqs[m + 2];
        let enorm = 2.0 / (upper - lower);
        for f in 0..N_FREQ {
            let down = (fft_freqs[f] - lower) / (center - lower).max(1e-6);
            let up = (upper - fft_freqs[f]) / (upper - center).max(1e-6);
            filters[m * N_FREQ + f] = down.min(up).max(0.0) * enorm;
        }
    }

    filters
}

/// Orthonormal DCT-II basis, first [`N_MFCC`] rows
fn build_dct_basis() -> Vec<f32> {
    let n = N_MELS as f32;
    let mut basis = vec![0.0f32; N_MFCC * N_MELS];
    for k in 0..N_MFCC {
        let scale = if k == 0 {
            (1.0 / n).sqrt()
        } else {
            (2.0 / n).sqrt()
        };
        for m in 0..N_MELS {
            let angle = std::f32::consts::PI / n * (m as f32 + 0.5) * (k as f32);
            basis[k * N_MELS + m] = scale * angle.cos();
        }
    }
    basis
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sine_clip(freq: f32, secs: f32) -> AudioClip {
        let n = (secs * SAMPLE_RATE as f32) as usize;
        let samples = (0..n)
            .map(|i| {
                let t = i as f32 / SAMPLE_RATE as f32;
                0.4 * (2.0 * std::f32::consts::PI * freq * t).sin()
            })
            .collect();
        AudioClip { samples }
    }

    #[test]
    fn output_shape_is_fixed_for_short_clips() {
        let extractor = MfccExtractor::new();
        // 0.5 s -> 51 raw frames, zero-padded up to 100
        let features = extractor.extract(&sine_clip(440.0, 0.5)).unwrap();
        assert_eq!(features.shape(), &[N_MFCC, TARGET_FRAMES, 1]);
    }

    #[test]
    fn output_shape_is_fixed_for_long_clips() {
        let extractor = MfccExtractor::new();
        // 2 s -> 201 raw frames, truncated to 100
        let features = extractor.extract(&sine_clip(440.0, 2.0)).unwrap();
        assert_eq!(features.shape(), &[N_MFCC, TARGET_FRAMES, 1]);
    }

    #[test]
    fn frame_count_before_padding() {
        let extractor = MfccExtractor::new();
        let coeffs = extractor.coefficients(&sine_clip(440.0, 1.0)).unwrap();
        // n / hop + 1 centered frames
        assert_eq!(coeffs.ncols(), 16_000 / HOP_LENGTH + 1);
    }

    #[test]
    fn coefficients_are_globally_normalized() {
        let extractor = MfccExtractor::new();
        let coeffs = extractor.coefficients(&sine_clip(300.0, 1.2)).unwrap();

        assert_abs_diff_eq!(coeffs.mean().unwrap(), 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(coeffs.std(0.0), 1.0, epsilon = 5e-3);
        assert!(coeffs.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn silent_clip_is_degenerate() {
        let extractor = MfccExtractor::new();
        let silent = AudioClip {
            samples: vec![0.0; 16_000],
        };
        assert!(matches!(
            extractor.extract(&silent),
            Err(Error::DegenerateAudio(_))
        ));
    }

    #[test]
    fn constant_clip_is_degenerate() {
        let extractor = MfccExtractor::new();
        let constant = AudioClip {
            samples: vec![0.3; 16_000],
        };
        assert!(matches!(
            extractor.extract(&constant),
            Err(Error::DegenerateAudio(_))
        ));
    }
}
