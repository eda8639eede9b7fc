//! Sentence segmentation that respects common abbreviations.

use std::collections::HashSet;
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

static TERMINATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[.!?]+["'\u{201D}\u{2019})\]]*(?:\s+|$)"#).expect("terminator pattern")
});

static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "inc", "ltd", "co", "corp", "vs",
        "etc", "e.g", "i.e", "u.s", "u.k", "no", "fig", "dept", "est", "approx", "jan", "feb",
        "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "gen", "gov",
        "sen", "rep", "mt", "ave", "blvd",
    ]
    .into_iter()
    .collect()
});

/// Whether the period ending `before` belongs to an abbreviation or initial.
fn is_abbreviation(before: &str) -> bool {
    let word = before
        .rsplit(|c: char| c.is_whitespace() || c == '(')
        .next()
        .unwrap_or_default();
    if word.is_empty() {
        return false;
    }
    // Single-letter initials: "J. Smith"
    if word.chars().count() == 1 && word.chars().all(char::is_uppercase) {
        return true;
    }
    ABBREVIATIONS.contains(word.to_lowercase().as_str())
}

/// Byte ranges of sentences in `text`, trimmed of surrounding whitespace.
pub fn split_sentences(text: &str) -> Vec<Range<usize>> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in TERMINATOR.find_iter(text) {
        let terminator = &text[m.start()..m.end()];
        let single_period = terminator.trim_end().trim_end_matches(|c: char| !".!?".contains(c)) == ".";

        if single_period && is_abbreviation(&text[start..m.start()]) {
            continue;
        }

        // Next sentence must open with something other than a lowercase letter
        let rest = &text[m.end()..];
        if single_period && rest.chars().next().is_some_and(char::is_lowercase) {
            continue;
        }

        push_trimmed(text, start..m.end(), &mut sentences);
        start = m.end();
    }

    push_trimmed(text, start..text.len(), &mut sentences);
    sentences
}

fn push_trimmed(text: &str, range: Range<usize>, out: &mut Vec<Range<usize>>) {
    let slice = &text[range.clone()];
    let leading = slice.len() - slice.trim_start().len();
    let trimmed = slice.trim();
    if !trimmed.is_empty() {
        let begin = range.start + leading;
        out.push(begin..begin + trimmed.len());
    }
}

pub(crate) fn warm_up() {
    Lazy::force(&TERMINATOR);
    Lazy::force(&ABBREVIATIONS);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(text: &str) -> Vec<&str> {
        split_sentences(text)
            .into_iter()
            .map(|r| &text[r])
            .collect()
    }

    #[test]
    fn test_simple_split() {
        assert_eq!(
            sentences("First one. Second one! Third one?"),
            vec!["First one.", "Second one!", "Third one?"]
        );
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        assert_eq!(
            sentences("Dr. Smith met Mr. Jones at Acme Inc. yesterday. They agreed."),
            vec!["Dr. Smith met Mr. Jones at Acme Inc. yesterday.", "They agreed."]
        );
    }

    #[test]
    fn test_initials() {
        assert_eq!(
            sentences("J. R. Tolkien wrote books. Many people read them."),
            vec!["J. R. Tolkien wrote books.", "Many people read them."]
        );
    }

    #[test]
    fn test_decimal_numbers_do_not_split() {
        assert_eq!(sentences("Growth was 3.5 percent."), vec!["Growth was 3.5 percent."]);
    }

    #[test]
    fn test_trailing_fragment_and_empty() {
        assert_eq!(sentences("Done. trailing words"), vec!["Done. trailing words"]);
        assert!(sentences("   ").is_empty());
        assert_eq!(sentences("No terminator"), vec!["No terminator"]);
    }
}
