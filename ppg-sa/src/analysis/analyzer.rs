//! Mock pronunciation analyzer
//!
//! This is a placeholder, not a speech model: results are drawn from the
//! difficulty policy's sampling ranges and have no relationship to the
//! audio content. It exists so the game loop works end to end until a
//! real [`PronunciationScorer`] is available, and it says so in its
//! `processing_method` tag.

use super::feedback;
use super::scorer::PronunciationScorer;
use super::types::{round1, round2, round3, AnalysisResult, TimingAnalysis};
use crate::audio::FeatureMatrix;
use ppg_common::policy;
use ppg_common::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Mock analyzer with a seedable RNG.
///
/// The RNG is behind a mutex so the analyzer can be shared read-only
/// across request handlers; the lock covers only the draws.
pub struct MockAnalyzer {
    rng: Mutex<StdRng>,
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAnalyzer {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Fixed-seed constructor so tests can assert exact outputs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Fabricate an analysis for `word` at the given difficulty label.
    ///
    /// Accuracy is drawn from the policy's sampling range for the label;
    /// the correctness flag compares the reported score against the
    /// policy threshold. `audio_quality` is the label derived from the
    /// decoded clip when one was supplied; the demo default is "good".
    pub fn analyze(
        &self,
        word: &str,
        difficulty: &str,
        audio_quality: Option<&'static str>,
    ) -> AnalysisResult {
        let (lo, hi) = policy::score_range_for(difficulty);
        let threshold = policy::threshold_for(difficulty);

        let (drawn, duration, pace_good) = {
            let mut rng = self.rng.lock().unwrap();
            (
                rng.gen_range(lo..=hi),
                rng.gen_range(0.8..=2.5),
                rng.gen_bool(0.5),
            )
        };

        // Correctness and feedback derive from the reported score
        let accuracy = round1(drawn);

        AnalysisResult {
            is_correct: accuracy >= threshold,
            accuracy_score: accuracy,
            confidence: round3(accuracy / 100.0),
            feedback: feedback::feedback_for(accuracy, word),
            phonetic_breakdown: feedback::phonetic_breakdown(word, accuracy),
            improvement_tips: feedback::improvement_tips(accuracy, word),
            timing_analysis: TimingAnalysis {
                duration: round2(duration),
                pace_rating: if pace_good { "good" } else { "too_fast" }.to_string(),
            },
            audio_quality: audio_quality.unwrap_or("good").to_string(),
            processing_method: "demo_mode".to_string(),
        }
    }

    /// Build an analysis from a real scorer's confidence.
    ///
    /// Same derived fields as the mock path, but accuracy comes from the
    /// model output and timing from the actual clip duration.
    pub fn score_with_model(
        &self,
        scorer: &dyn PronunciationScorer,
        features: &FeatureMatrix,
        word: &str,
        difficulty: &str,
        duration_secs: f64,
        audio_quality: &'static str,
    ) -> Result<AnalysisResult> {
        let confidence = scorer.score(features, word)?.clamp(0.0, 1.0);
        let accuracy = round1(confidence * 100.0);
        let threshold = policy::threshold_for(difficulty);

        Ok(AnalysisResult {
            is_correct: accuracy >= threshold,
            accuracy_score: accuracy,
            confidence: round3(confidence),
            feedback: feedback::feedback_for(accuracy, word),
            phonetic_breakdown: feedback::phonetic_breakdown(word, accuracy),
            improvement_tips: feedback::improvement_tips(accuracy, word),
            timing_analysis: TimingAnalysis {
                duration: round2(duration_secs),
                pace_rating: if duration_secs < 0.3 { "too_fast" } else { "good" }.to_string(),
            },
            audio_quality: audio_quality.to_string(),
            processing_method: scorer.name().to_string(),
        })
    }
}
