//! Analysis configuration.

use serde::{Deserialize, Serialize};

/// Model id of the built-in rule-based English backend.
pub const DEFAULT_MODEL: &str = "en_core_rules";

/// Configuration for semantic analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum number of keywords returned.
    pub max_keywords: usize,
    /// Maximum number of entities returned.
    pub max_entities: usize,
    /// Target number of summary sentences.
    pub summary_sentences: usize,
    /// Language code reported on every result.
    pub language: String,
    /// Linguistic model identifier loaded at construction.
    pub model: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_keywords: 10,
            max_entities: 20,
            summary_sentences: 3,
            language: "en".to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Set the keyword limit.
    pub fn with_max_keywords(mut self, max: usize) -> Self {
        self.max_keywords = max;
        self
    }

    /// Set the entity limit.
    pub fn with_max_entities(mut self, max: usize) -> Self {
        self.max_entities = max;
        self
    }

    /// Set the summary length in sentences.
    pub fn with_summary_sentences(mut self, count: usize) -> Self {
        self.summary_sentences = count;
        self
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.max_keywords, 10);
        assert_eq!(config.max_entities, 20);
        assert_eq!(config.summary_sentences, 3);
        assert_eq!(config.model, "en_core_rules");
    }

    #[test]
    fn test_partial_deserialization() {
        let config: AnalysisConfig = serde_json::from_str(r#"{"max_keywords": 5}"#).unwrap();
        assert_eq!(config.max_keywords, 5);
        assert_eq!(config.language, "en");
    }
}
