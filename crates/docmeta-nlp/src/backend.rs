//! Language backend abstraction and factory.

use std::sync::Arc;

use tracing::info;

use crate::config::{AnalysisConfig, DEFAULT_MODEL};
use crate::error::{NlpError, NlpResult};
use crate::frequency::FrequencyBackend;
use crate::rule_based::RuleBasedBackend;
use crate::types::LinguisticFeatures;

/// Model id that selects the frequency-only backend directly.
pub const FREQUENCY_MODEL: &str = "frequency";

/// Produces the linguistic part of an enrichment result.
///
/// Statistics and readability are computed by the analyzer itself, so a
/// backend only contributes keywords, entities, summary, topics and
/// sentiment.
#[cfg_attr(test, mockall::automock)]
pub trait LanguageBackend: Send + Sync {
    /// Backend name reported as `analysis_backend`.
    fn name(&self) -> &'static str;

    /// Analyze non-blank `text`.
    fn features(&self, text: &str, config: &AnalysisConfig) -> NlpResult<LinguisticFeatures>;
}

/// Factory for language backends.
pub struct BackendFactory;

impl BackendFactory {
    /// Load the backend registered under `model_id`.
    pub fn load(model_id: &str) -> NlpResult<Arc<dyn LanguageBackend>> {
        match model_id {
            DEFAULT_MODEL => {
                let backend = RuleBasedBackend::new();
                info!(model = model_id, "Loaded rule-based language model");
                Ok(Arc::new(backend))
            }
            FREQUENCY_MODEL => Ok(Arc::new(FrequencyBackend)),
            other => Err(NlpError::ModelNotFound(other.to_string())),
        }
    }

    /// Known model ids.
    pub fn available_models() -> &'static [&'static str] {
        &[DEFAULT_MODEL, FREQUENCY_MODEL]
    }
}
