//! Recording quality assessment
//!
//! Coarse RMS-energy labeling of the decoded clip, reported back to the
//! caller alongside the analysis.

use super::AudioClip;

/// Label a clip's recording quality from its RMS energy.
///
/// Thresholds: "good" above 0.1, "fair" above 0.05, otherwise "low".
pub fn assess_quality(clip: &AudioClip) -> &'static str {
    if clip.samples.is_empty() {
        return "low";
    }

    let mean_square =
        clip.samples.iter().map(|s| s * s).sum::<f32>() / clip.samples.len() as f32;
    let rms = mean_square.sqrt();

    if rms > 0.1 {
        "good"
    } else if rms > 0.05 {
        "fair"
    } else {
        "low"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip_with_amplitude(amp: f32) -> AudioClip {
        AudioClip {
            samples: vec![amp; 1600],
        }
    }

    #[test]
    fn loud_clip_is_good() {
        assert_eq!(assess_quality(&clip_with_amplitude(0.5)), "good");
    }

    #[test]
    fn moderate_clip_is_fair() {
        assert_eq!(assess_quality(&clip_with_amplitude(0.08)), "fair");
    }

    #[test]
    fn quiet_clip_is_low() {
        assert_eq!(assess_quality(&clip_with_amplitude(0.01)), "low");
        assert_eq!(assess_quality(&AudioClip { samples: vec![] }), "low");
    }
}
