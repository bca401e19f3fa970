//! Real-scorer contract
//!
//! [`MockAnalyzer`](super::MockAnalyzer) fabricates results; this module
//! fixes the interface a genuine model-backed scorer must implement to
//! replace it. Keeping the contract separate means a future inference
//! backend plugs in as a trait object instead of hiding behind a bypass
//! inside the mock.

use crate::audio::FeatureMatrix;
use crate::audio::mfcc::{N_MFCC, TARGET_FRAMES};
use ppg_common::Result;
use serde::Serialize;

/// Model input shape: coefficients x frames x channels
pub const MODEL_INPUT_SHAPE: [usize; 3] = [N_MFCC, TARGET_FRAMES, 1];

/// A pronunciation scorer backed by a real model.
///
/// Input is the fixed-shape feature matrix of [`MODEL_INPUT_SHAPE`];
/// output is a confidence in [0, 1] that the clip is a correct
/// pronunciation of `word`. Accuracy is `confidence * 100`, thresholded
/// per the difficulty policy.
pub trait PronunciationScorer: Send + Sync {
    /// Tag recorded as the result's `processing_method`
    fn name(&self) -> &'static str;

    /// Score a feature matrix against a target word, returning a
    /// confidence in [0, 1].
    fn score(&self, features: &FeatureMatrix, word: &str) -> Result<f64>;
}

/// Scorer status reported by the model-info endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ScorerInfo {
    pub model_loaded: bool,
    pub mode: &'static str,
    pub input_shape: [usize; 3],
    pub message: &'static str,
}

impl ScorerInfo {
    /// Status when no real scorer is configured (the shipping default)
    pub fn mock() -> Self {
        Self {
            model_loaded: false,
            mode: "demo",
            input_shape: MODEL_INPUT_SHAPE,
            message: "Running in demo mode - analysis results are generated, not inferred",
        }
    }

    pub fn loaded(name: &'static str) -> Self {
        Self {
            model_loaded: true,
            mode: name,
            input_shape: MODEL_INPUT_SHAPE,
            message: "Model loaded",
        }
    }
}
