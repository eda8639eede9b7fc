//! Frequency-only fallback analysis.

use crate::backend::LanguageBackend;
use crate::config::AnalysisConfig;
use crate::error::NlpResult;
use crate::keywords::rank_keywords;
use crate::stats::sentence_fragments;
use crate::stopwords::is_stop_word;
use crate::types::{LinguisticFeatures, Sentiment};

/// Keywords and a lead summary from word counts alone.
///
/// Used when no linguistic model is loaded or when the model fails. It
/// never reports entities and always reports neutral sentiment.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyBackend;

impl FrequencyBackend {
    /// Infallible analysis used directly by the analyzer's fallback path.
    pub fn analyze(&self, text: &str, config: &AnalysisConfig) -> LinguisticFeatures {
        let candidates = text
            .split_whitespace()
            .map(|w| {
                w.to_lowercase()
                    .trim_matches(|c: char| !c.is_alphanumeric())
                    .to_string()
            })
            .filter(|w| w.chars().count() > 3 && !is_stop_word(w));

        let keywords = rank_keywords(candidates, config.max_keywords);
        let topics = keywords.iter().map(|k| k.word.clone()).collect();

        LinguisticFeatures {
            keywords,
            entities: Vec::new(),
            summary: lead_summary(text, config.summary_sentences),
            topics,
            sentiment: Sentiment::Neutral,
        }
    }
}

/// First `count` sentence fragments joined with `". "` and closed with a period.
fn lead_summary(text: &str, count: usize) -> String {
    let lead: Vec<&str> = sentence_fragments(text).into_iter().take(count).collect();
    if lead.is_empty() {
        return String::new();
    }
    format!("{}.", lead.join(". "))
}

impl LanguageBackend for FrequencyBackend {
    fn name(&self) -> &'static str {
        "frequency"
    }

    fn features(&self, text: &str, config: &AnalysisConfig) -> NlpResult<LinguisticFeatures> {
        Ok(self.analyze(text, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_skip_short_and_stop_words() {
        let features = FrequencyBackend.analyze(
            "Budget, budget and (forecast) for the team. The budget grows!",
            &AnalysisConfig::default(),
        );
        let words: Vec<&str> = features.keywords.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["budget", "forecast", "team", "grows"]);
        assert_eq!(features.keywords[0].frequency, 3);
        assert!((features.keywords[0].relevance_score - 0.5).abs() < 1e-9);
        assert_eq!(features.topics, vec!["budget", "forecast", "team", "grows"]);
        assert!(features.entities.is_empty());
        assert_eq!(features.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_lead_summary() {
        let config = AnalysisConfig::default().with_summary_sentences(2);
        let features = FrequencyBackend.analyze("First point. Second point! Third point?", &config);
        assert_eq!(features.summary, "First point. Second point.");
    }

    #[test]
    fn test_summary_without_fragments() {
        assert_eq!(lead_summary("?!...", 3), "");
    }
}
