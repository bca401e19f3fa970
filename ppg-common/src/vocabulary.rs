//! Practice vocabulary
//!
//! Word lists per difficulty level and the word-to-IPA lookup used for
//! phonetic feedback. Immutable after process start; shared read-only by
//! all request handlers.

use crate::policy::Difficulty;

/// Practice words by difficulty level
pub fn words_for(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Easy => &[
            "the", "was", "you", "they", "said", "have", "like", "so", "do", "some",
        ],
        Difficulty::Medium => &[
            "come", "were", "there", "little", "one", "when", "out", "what", "water", "who",
        ],
        Difficulty::Hard => &[
            "school", "called", "looked", "asked", "could", "people", "your", "right", "know",
            "thought",
        ],
    }
}

/// Total word count across all difficulty levels
pub fn total_words() -> usize {
    [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        .iter()
        .map(|d| words_for(*d).len())
        .sum()
}

/// IPA transcription for a word, if known
pub fn ipa(word: &str) -> Option<&'static str> {
    let ipa = match word {
        "the" => "/ðə/",
        "was" => "/wɒz/",
        "said" => "/sed/",
        "school" => "/skuːl/",
        "thought" => "/θɔːt/",
        "come" => "/kʌm/",
        "were" => "/wɜːr/",
        "there" => "/ðeər/",
        "little" => "/ˈlɪtəl/",
        "water" => "/ˈwɔːtər/",
        "where" => "/weə/",
        "what" => "/wɒt/",
        "who" => "/huː/",
        "why" => "/waɪ/",
        "when" => "/wen/",
        _ => return None,
    };
    Some(ipa)
}

/// IPA transcription for a word, wrapping unknown words in slashes
pub fn ipa_or_fallback(word: &str) -> String {
    match ipa(word) {
        Some(ipa) => ipa.to_string(),
        None => format!("/{}/", word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_level_has_words() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert!(!words_for(d).is_empty());
        }
        assert_eq!(total_words(), 30);
    }

    #[test]
    fn known_words_have_ipa() {
        assert_eq!(ipa("the"), Some("/ðə/"));
        assert_eq!(ipa_or_fallback("school"), "/skuːl/");
    }

    #[test]
    fn unknown_word_wraps_in_slashes() {
        assert_eq!(ipa_or_fallback("zebra"), "/zebra/");
    }
}
