//! Flesch reading ease, computed with a vowel-group syllable heuristic.

use tracing::debug;

/// Substituted when the formula cannot be evaluated (no words at all).
pub const NEUTRAL_READING_EASE: f64 = 50.0;

/// Scores at or below this are considered hard to read for a résumé.
pub const MIN_READING_EASE: f64 = 30.0;

/// Flesch reading ease: `206.835 − 1.015·(words/sentences) − 84.6·(syllables/words)`.
///
/// Returns `None` when the text contains no words.
pub fn flesch_reading_ease(text: &str) -> Option<f64> {
    let words: Vec<&str> = text
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect();
    if words.is_empty() {
        return None;
    }

    let sentences = count_sentences(text).max(1);
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;
    let score = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;

    score.is_finite().then_some(score)
}

/// Reading ease with the neutral fallback applied.
pub fn reading_ease_or_neutral(text: &str) -> f64 {
    flesch_reading_ease(text).unwrap_or_else(|| {
        debug!("Readability could not be computed; using neutral score {NEUTRAL_READING_EASE}");
        NEUTRAL_READING_EASE
    })
}

/// Runs of text terminated by `.`, `!`, `?` or a line break that contain a letter or digit.
///
/// Line breaks count as terminators since résumé bullets rarely end with punctuation.
fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?', '\n'])
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .count()
}

/// Vowel groups, minus a silent trailing `e`, never less than one.
fn count_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let mut groups = 0;
    let mut previous_vowel = false;
    for c in lower.chars() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !previous_vowel {
            groups += 1;
        }
        previous_vowel = vowel;
    }
    if groups > 1 && lower.ends_with('e') && !lower.ends_with("le") {
        groups -= 1;
    }
    groups.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_score() {
        assert!(flesch_reading_ease("").is_none());
        assert!(flesch_reading_ease("  ... !!! ").is_none());
    }

    #[test]
    fn test_neutral_fallback() {
        assert_eq!(reading_ease_or_neutral("--- ***"), NEUTRAL_READING_EASE);
    }

    #[test]
    fn test_simple_prose_reads_easily() {
        let score = flesch_reading_ease("The cat sat on the mat. It was a good day.").unwrap();
        assert!(score > 80.0, "Score was {score}");
    }

    #[test]
    fn test_dense_prose_reads_poorly() {
        let text = "Comprehensive organizational transformation initiatives necessitate \
                    interdepartmental collaboration, institutionalized accountability, \
                    and continuous operational optimization methodologies";
        let score = flesch_reading_ease(text).unwrap();
        assert!(score < MIN_READING_EASE, "Score was {score}");
    }

    #[test]
    fn test_syllable_heuristic() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("table"), 2);
        assert_eq!(count_syllables("engineering"), 4);
        assert_eq!(count_syllables("rhythm"), 1);
    }
}
