//! Analysis result records

use serde::Serialize;

/// Result of one pronunciation analysis.
///
/// Constructed fresh per request, never mutated afterwards, not
/// persisted.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub is_correct: bool,
    /// Accuracy in 0-100, one decimal
    pub accuracy_score: f64,
    /// Confidence in 0-1, three decimals
    pub confidence: f64,
    pub feedback: String,
    pub phonetic_breakdown: String,
    pub improvement_tips: Vec<String>,
    pub timing_analysis: TimingAnalysis,
    /// Recording quality label: "good" | "fair" | "low" | "unknown"
    pub audio_quality: String,
    /// Which code path produced this result: "demo_mode" | "fallback",
    /// or a scorer's own tag
    pub processing_method: String,
}

/// Speech timing summary
#[derive(Debug, Clone, Serialize)]
pub struct TimingAnalysis {
    /// Utterance duration in seconds, two decimals
    pub duration: f64,
    /// "good" | "too_fast"
    pub pace_rating: String,
}

impl AnalysisResult {
    /// Fixed-content result returned when analysis itself fails.
    pub fn fallback(word: &str) -> Self {
        Self {
            is_correct: true,
            accuracy_score: 75.0,
            confidence: 0.75,
            feedback: format!("⚠️ Analisi base completata per '{}'.", word),
            phonetic_breakdown: format!("Pronuncia la parola '{}' chiaramente", word),
            improvement_tips: vec!["Riprova con la registrazione".to_string()],
            timing_analysis: TimingAnalysis {
                duration: 0.0,
                pace_rating: "unknown".to_string(),
            },
            audio_quality: "unknown".to_string(),
            processing_method: "fallback".to_string(),
        }
    }
}

/// Round to one decimal place
pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Round to two decimal places
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Round to three decimal places
pub(crate) fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
