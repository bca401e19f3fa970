//! Feedback text generation
//!
//! Fixed accuracy-band-to-message mappings for the game's feedback,
//! phonetic notes, and improvement tips. The messages are the game's
//! child-facing copy (Italian).

use ppg_common::vocabulary;

/// Encouraging feedback for an accuracy score.
///
/// Bands: >=90, >=80, >=70, >=60, below.
pub fn feedback_for(accuracy: f64, word: &str) -> String {
    if accuracy >= 90.0 {
        format!("🌟 Perfetto! Hai pronunciato '{}' in modo eccellente!", word)
    } else if accuracy >= 80.0 {
        format!("🎉 Ottimo! Quasi perfetto su '{}'. Continua così!", word)
    } else if accuracy >= 70.0 {
        format!("👍 Bene! '{}' è pronunciato abbastanza bene. Prova ancora!", word)
    } else if accuracy >= 60.0 {
        format!("💪 Non male! '{}' può essere migliorato. Ascolta e riprova!", word)
    } else {
        format!("🔄 Riprova! Ascolta attentamente '{}' e pronuncia lentamente.", word)
    }
}

/// Phonetic note built from the IPA table, with the raw word wrapped in
/// slashes as fallback.
pub fn phonetic_breakdown(word: &str, accuracy: f64) -> String {
    let phonetic = vocabulary::ipa_or_fallback(word);

    if accuracy >= 80.0 {
        format!("Pronuncia fonetica corretta: {}", phonetic)
    } else {
        format!(
            "Lavora sulla pronuncia: {} - Ascolta il suono e ripeti lentamente",
            phonetic
        )
    }
}

/// Improvement tips accumulated from accuracy bands and word length.
pub fn improvement_tips(accuracy: f64, word: &str) -> Vec<String> {
    let mut tips = Vec::new();

    if accuracy < 70.0 {
        tips.push("🗣️ Parla più chiaramente e lentamente".to_string());
        tips.push("🎧 Ascolta la pronuncia più volte".to_string());
    }

    if accuracy < 80.0 {
        tips.push("📱 Avvicinati al microfono".to_string());
        tips.push("🔄 Ripeti la parola sillaba per sillaba".to_string());
    }

    if word.chars().count() > 5 {
        tips.push("📝 Dividi la parola in parti più piccole".to_string());
    }

    tips
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_bands() {
        assert!(feedback_for(95.0, "the").contains("Perfetto"));
        assert!(feedback_for(85.0, "the").contains("Ottimo"));
        assert!(feedback_for(72.0, "the").contains("Bene"));
        assert!(feedback_for(65.0, "the").contains("Non male"));
        assert!(feedback_for(40.0, "the").contains("Riprova"));
    }

    #[test]
    fn band_edges_are_inclusive() {
        assert!(feedback_for(90.0, "the").contains("Perfetto"));
        assert!(feedback_for(80.0, "the").contains("Ottimo"));
        assert!(feedback_for(70.0, "the").contains("Bene"));
        assert!(feedback_for(60.0, "the").contains("Non male"));
    }

    #[test]
    fn phonetic_uses_ipa_table_and_fallback() {
        assert!(phonetic_breakdown("the", 85.0).contains("/ðə/"));
        assert!(phonetic_breakdown("the", 85.0).contains("corretta"));
        assert!(phonetic_breakdown("the", 50.0).contains("Lavora"));
        assert!(phonetic_breakdown("zebra", 85.0).contains("/zebra/"));
    }

    #[test]
    fn tips_accumulate_by_band_and_length() {
        // Low accuracy on a long word collects every tip
        assert_eq!(improvement_tips(50.0, "thought").len(), 5);
        // Mid accuracy drops the <70 pair
        assert_eq!(improvement_tips(75.0, "the").len(), 2);
        // High accuracy on a short word has nothing to say
        assert!(improvement_tips(90.0, "the").is_empty());
        // High accuracy on a long word still suggests splitting it
        assert_eq!(improvement_tips(90.0, "people").len(), 1);
    }
}
