//! Difficulty policy
//!
//! Single source of truth for the pass/fail thresholds and demo-mode
//! score sampling ranges associated with each difficulty level. Callers
//! read this table instead of carrying their own literals.

use serde::{Deserialize, Serialize};

/// Practice difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Pass/fail threshold applied to unrecognized difficulty labels
pub const DEFAULT_THRESHOLD: f64 = 75.0;

/// Demo-mode sampling range applied to unrecognized difficulty labels
pub const DEFAULT_SCORE_RANGE: (f64, f64) = (60.0, 80.0);

impl Difficulty {
    /// Parse a difficulty label. Returns None for unrecognized labels;
    /// callers decide whether to fall back to [`Difficulty::Medium`] or
    /// to the label-based defaults below.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Lowercase wire label
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Accuracy threshold (0-100) above which a pronunciation counts as
    /// correct. More lenient for easy words, stricter for hard ones.
    pub fn threshold(&self) -> f64 {
        match self {
            Difficulty::Easy => 70.0,
            Difficulty::Medium => 75.0,
            Difficulty::Hard => 80.0,
        }
    }

    /// Inclusive (low, high) range the demo analyzer samples accuracy
    /// scores from when no real model output is available.
    pub fn score_range(&self) -> (f64, f64) {
        match self {
            Difficulty::Easy => (75.0, 95.0),
            Difficulty::Medium => (65.0, 85.0),
            Difficulty::Hard => (55.0, 75.0),
        }
    }
}

/// Threshold for a raw difficulty label, falling back to
/// [`DEFAULT_THRESHOLD`] for unrecognized labels.
pub fn threshold_for(label: &str) -> f64 {
    Difficulty::parse(label)
        .map(|d| d.threshold())
        .unwrap_or(DEFAULT_THRESHOLD)
}

/// Demo sampling range for a raw difficulty label, falling back to
/// [`DEFAULT_SCORE_RANGE`] for unrecognized labels.
pub fn score_range_for(label: &str) -> (f64, f64) {
    Difficulty::parse(label)
        .map(|d| d.score_range())
        .unwrap_or(DEFAULT_SCORE_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_match_policy_table() {
        assert_eq!(Difficulty::Easy.threshold(), 70.0);
        assert_eq!(Difficulty::Medium.threshold(), 75.0);
        assert_eq!(Difficulty::Hard.threshold(), 80.0);
    }

    #[test]
    fn unrecognized_label_uses_default_threshold() {
        assert_eq!(threshold_for("expert"), 75.0);
        assert_eq!(threshold_for(""), 75.0);
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!(Difficulty::parse("Easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse(" hard "), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse("impossible"), None);
    }

    #[test]
    fn score_ranges_match_policy_table() {
        assert_eq!(score_range_for("easy"), (75.0, 95.0));
        assert_eq!(score_range_for("medium"), (65.0, 85.0));
        assert_eq!(score_range_for("hard"), (55.0, 75.0));
        assert_eq!(score_range_for("nope"), (60.0, 80.0));
    }
}
