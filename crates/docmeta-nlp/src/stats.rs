//! Surface statistics and Flesch reading ease.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::TextStatistics;

static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence break"));

/// Non-empty trimmed fragments between runs of `.`, `!` and `?`.
pub fn sentence_fragments(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Vowel-group syllable estimate, never below one.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut count = 0;
    let mut previous_vowel = false;

    for c in word.chars() {
        let vowel = "aeiouy".contains(c);
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    if word.ends_with('e') && count > 1 {
        count -= 1;
    }
    count.max(1)
}

/// Flesch reading ease clamped to `[0, 100]`; zero for text without words.
pub fn readability(text: &str) -> f64 {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }

    let sentences = sentence_fragments(text).len().max(1) as f64;
    let word_count = words.len() as f64;
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    let score = 206.835 - 1.015 * (word_count / sentences) - 84.6 * (syllables as f64 / word_count);
    score.clamp(0.0, 100.0)
}

/// Counts and averages over `text`.
pub fn text_statistics(text: &str) -> TextStatistics {
    let words: Vec<&str> = text.split_whitespace().collect();
    let sentence_count = sentence_fragments(text).len();
    let word_count = words.len();
    let letters: usize = words.iter().map(|w| w.chars().count()).sum();

    TextStatistics {
        sentence_count,
        word_count,
        character_count: text.chars().count(),
        character_count_no_spaces: text.chars().filter(|c| *c != ' ').count(),
        paragraph_count: text.split("\n\n").filter(|p| !p.trim().is_empty()).count(),
        average_words_per_sentence: word_count as f64 / sentence_count.max(1) as f64,
        average_characters_per_word: letters as f64 / word_count.max(1) as f64,
    }
}

pub(crate) fn warm_up() {
    Lazy::force(&SENTENCE_BREAK);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragments() {
        assert_eq!(
            sentence_fragments("One. Two!! Three?  ..."),
            vec!["One", "Two", "Three"]
        );
        assert!(sentence_fragments("...").is_empty());
    }

    #[test]
    fn test_syllables() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("readability"), 5);
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("42"), 1);
    }

    #[test]
    fn test_readability_bounds() {
        assert_eq!(readability(""), 0.0);
        assert_eq!(readability("   "), 0.0);

        let simple = readability("The cat sat. The dog ran. We had fun.");
        assert!(simple > 80.0 && simple <= 100.0);

        let dense = readability(
            "Organizational interdependencies necessitate comprehensive institutional \
             reconfiguration notwithstanding considerable administrative complications",
        );
        assert!((0.0..30.0).contains(&dense));
    }

    #[test]
    fn test_statistics() {
        let stats = text_statistics("Hello world. This is a test.\n\nSecond paragraph here.");
        assert_eq!(stats.sentence_count, 3);
        assert_eq!(stats.word_count, 9);
        assert_eq!(stats.paragraph_count, 2);
        assert_eq!(stats.character_count, 52);
        assert_eq!(stats.character_count_no_spaces, 45);
        assert!((stats.average_words_per_sentence - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_statistics_of_empty_text() {
        let stats = text_statistics("");
        assert_eq!(stats, TextStatistics::default());
    }
}
