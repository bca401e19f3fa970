//! Pronunciation analysis
//!
//! The only analyzer that ships is [`MockAnalyzer`], an explicit
//! placeholder that fabricates plausible results from the difficulty
//! policy. [`PronunciationScorer`] is the contract a real model-backed
//! scorer has to meet to replace it.

pub mod analyzer;
pub mod feedback;
pub mod scorer;
pub mod types;

pub use analyzer::MockAnalyzer;
pub use scorer::{PronunciationScorer, ScorerInfo, MODEL_INPUT_SHAPE};
pub use types::{AnalysisResult, TimingAnalysis};
