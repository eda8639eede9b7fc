//! Semantic analyzer: backend dispatch with frequency fallback.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::backend::{BackendFactory, LanguageBackend};
use crate::config::AnalysisConfig;
use crate::error::{NlpError, NlpResult};
use crate::frequency::FrequencyBackend;
use crate::stats::{readability, text_statistics};
use crate::types::{EnrichmentResult, LinguisticFeatures};

/// Enriches extracted text with keywords, entities, a summary and topics.
///
/// Analysis never fails. Without a loaded backend, or when the backend
/// errors or panics, the frequency-only path produces the result.
pub struct SemanticAnalyzer {
    config: AnalysisConfig,
    backend: Option<Arc<dyn LanguageBackend>>,
    fallback: FrequencyBackend,
}

impl SemanticAnalyzer {
    /// Load the configured model; a missing model leaves the analyzer on
    /// the fallback path.
    pub fn new(config: AnalysisConfig) -> Self {
        let backend = match BackendFactory::load(&config.model) {
            Ok(backend) => Some(backend),
            Err(e) => {
                error!(model = %config.model, error = %e, "Language model unavailable, using frequency analysis");
                None
            }
        };
        Self::with_backend(config, backend)
    }

    /// Use an explicit backend (or none).
    pub fn with_backend(config: AnalysisConfig, backend: Option<Arc<dyn LanguageBackend>>) -> Self {
        Self {
            config,
            backend,
            fallback: FrequencyBackend,
        }
    }

    /// Analyzer with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(AnalysisConfig::default())
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Whether a linguistic backend is loaded.
    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Analyze `text`. Blank input yields [`EnrichmentResult::empty`].
    pub fn analyze(&self, text: &str) -> EnrichmentResult {
        if text.trim().is_empty() {
            return EnrichmentResult::empty(self.config.language.clone());
        }

        let (features, backend_name) = match &self.backend {
            Some(backend) => match self.run_backend(backend.as_ref(), text) {
                Ok(features) => (features, backend.name()),
                Err(e) => {
                    error!(backend = backend.name(), error = %e, "Error in semantic analysis, falling back");
                    (self.fallback.analyze(text, &self.config), self.fallback.name())
                }
            },
            None => (self.fallback.analyze(text, &self.config), self.fallback.name()),
        };

        let result = self.assemble(text, features, backend_name);
        debug!(
            backend = backend_name,
            keywords = result.keywords.len(),
            entities = result.entities.len(),
            readability = result.readability_score,
            "Semantic analysis complete"
        );
        result
    }

    fn run_backend(&self, backend: &dyn LanguageBackend, text: &str) -> NlpResult<LinguisticFeatures> {
        panic::catch_unwind(AssertUnwindSafe(|| backend.features(text, &self.config))).unwrap_or_else(|_| {
            warn!(backend = backend.name(), "Language backend panicked");
            Err(NlpError::analysis("language backend panicked"))
        })
    }

    fn assemble(&self, text: &str, mut features: LinguisticFeatures, backend: &str) -> EnrichmentResult {
        features.keywords.truncate(self.config.max_keywords);
        features.entities.truncate(self.config.max_entities);

        EnrichmentResult {
            keywords: features.keywords,
            entities: features.entities,
            summary: features.summary,
            language: self.config.language.clone(),
            topics: features.topics,
            sentiment: features.sentiment,
            readability_score: readability(text),
            text_statistics: text_statistics(text),
            analysis_backend: backend.to_string(),
        }
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockLanguageBackend;
    use crate::types::{Keyword, Sentiment};

    const TEXT: &str = "Budget planning for the research team continues. The budget grows.";

    fn mocked(mock: MockLanguageBackend, config: AnalysisConfig) -> SemanticAnalyzer {
        SemanticAnalyzer::with_backend(config, Some(Arc::new(mock)))
    }

    #[test]
    fn test_backend_error_falls_back() {
        let mut mock = MockLanguageBackend::new();
        mock.expect_name().return_const("mock");
        mock.expect_features()
            .returning(|_, _| Err(NlpError::analysis("boom")));

        let result = mocked(mock, AnalysisConfig::default()).analyze(TEXT);
        assert_eq!(result.analysis_backend, "frequency");
        assert_eq!(result.keywords[0].word, "budget");
        assert!(result.entities.is_empty());
        assert!(result.text_statistics.word_count > 0);
    }

    struct PanickingBackend;

    impl LanguageBackend for PanickingBackend {
        fn name(&self) -> &'static str {
            "panicking"
        }

        fn features(&self, _text: &str, _config: &AnalysisConfig) -> NlpResult<LinguisticFeatures> {
            panic!("backend bug")
        }
    }

    #[test]
    fn test_backend_panic_falls_back() {
        let analyzer = SemanticAnalyzer::with_backend(AnalysisConfig::default(), Some(Arc::new(PanickingBackend)));
        let result = analyzer.analyze(TEXT);
        assert_eq!(result.analysis_backend, "frequency");
        assert_eq!(result.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_backend_output_is_truncated() {
        let mut mock = MockLanguageBackend::new();
        mock.expect_name().return_const("mock");
        mock.expect_features().returning(|_, _| {
            Ok(LinguisticFeatures {
                keywords: (0..30)
                    .map(|i| Keyword {
                        word: format!("word{}", i),
                        frequency: 1,
                        relevance_score: 1.0 / 30.0,
                    })
                    .collect(),
                ..Default::default()
            })
        });

        let config = AnalysisConfig::default().with_max_keywords(5);
        let result = mocked(mock, config).analyze(TEXT);
        assert_eq!(result.keywords.len(), 5);
        assert_eq!(result.analysis_backend, "mock");
    }

    #[test]
    fn test_blank_input_skips_backend() {
        let mut mock = MockLanguageBackend::new();
        mock.expect_features().times(0);

        let result = mocked(mock, AnalysisConfig::default()).analyze(" \n\t ");
        assert_eq!(result, EnrichmentResult::empty("en"));
    }

    #[test]
    fn test_unknown_model_uses_fallback() {
        let analyzer = SemanticAnalyzer::new(AnalysisConfig::default().with_model("xx_missing"));
        assert!(!analyzer.has_backend());
        let result = analyzer.analyze(TEXT);
        assert_eq!(result.analysis_backend, "frequency");
        assert!(!result.keywords.is_empty());
    }
}
