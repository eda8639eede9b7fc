//! Word-list sentiment.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Sentiment;

pub const POSITIVE_WORDS: &[&str] = &["good", "great", "excellent", "amazing", "wonderful", "fantastic"];
pub const NEGATIVE_WORDS: &[&str] = &["bad", "terrible", "awful", "horrible", "poor", "disappointing"];

fn word_list_pattern(words: &[&str]) -> Regex {
    Regex::new(&format!(r"(?i)\b(?:{})\b", words.join("|"))).expect("sentiment pattern")
}

static POSITIVE: Lazy<Regex> = Lazy::new(|| word_list_pattern(POSITIVE_WORDS));
static NEGATIVE: Lazy<Regex> = Lazy::new(|| word_list_pattern(NEGATIVE_WORDS));

/// Majority of whole-word positive and negative hits; ties are neutral.
pub fn classify(text: &str) -> Sentiment {
    let positive = POSITIVE.find_iter(text).count();
    let negative = NEGATIVE.find_iter(text).count();

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

pub(crate) fn warm_up() {
    Lazy::force(&POSITIVE);
    Lazy::force(&NEGATIVE);
}
