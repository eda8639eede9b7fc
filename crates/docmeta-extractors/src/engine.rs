//! Extraction engine routing files to the matching extractor.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use crate::factory::ExtractorFactory;
use crate::types::ExtractionResult;
use crate::Extractor;

/// Engine for extracting text using registered extractors.
///
/// Routes by lowercase file extension. [`ExtractionEngine::extract`] never
/// fails: every error ends up in the result's `error` field.
pub struct ExtractionEngine {
    extractors: Vec<Arc<dyn Extractor>>,
}

impl ExtractionEngine {
    /// Create new empty engine.
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Create engine with all extractors for the default configuration.
    pub fn with_defaults() -> Self {
        Self::with_config(&ExtractionConfig::default())
    }

    /// Create engine with all extractors for `config`.
    pub fn with_config(config: &ExtractionConfig) -> Self {
        Self {
            extractors: ExtractorFactory::all(config),
        }
    }

    /// Add an extractor to the engine.
    ///
    /// Extractors added later are consulted after existing ones.
    pub fn add_extractor(mut self, extractor: Arc<dyn Extractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    /// Find the extractor for an extension (without dot, any case).
    pub fn find_extractor(&self, extension: &str) -> Option<&Arc<dyn Extractor>> {
        let extension = extension.trim_start_matches('.').to_lowercase();
        self.extractors.iter().find(|e| e.supports(&extension))
    }

    /// Check if the engine can handle an extension.
    pub fn supports(&self, extension: &str) -> bool {
        self.find_extractor(extension).is_some()
    }

    /// List all supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.extractors
            .iter()
            .flat_map(|e| e.supported_extensions().iter().copied())
            .collect()
    }

    /// Extract text from in-memory content with a known extension.
    pub fn extract_bytes(&self, content: &[u8], extension: &str) -> ExtractionResult {
        let extension = extension.trim_start_matches('.').to_lowercase();

        let Some(extractor) = self.find_extractor(&extension) else {
            let err = ExtractError::UnsupportedFormat(format!(".{}", extension));
            warn!(extension = %extension, "No extractor for file type");
            return ExtractionResult::failure(err.to_string());
        };

        debug!(extractor = extractor.name(), bytes = content.len(), "Extracting text");

        match extractor.extract(content) {
            Ok(raw) => {
                let result = ExtractionResult::from_raw(raw);
                info!(
                    method = %result.extraction_method,
                    pages = result.page_count,
                    words = result.word_count,
                    "Text extraction complete"
                );
                result
            }
            Err(e) => {
                if e.is_missing_dependency() {
                    warn!(extractor = extractor.name(), error = %e, "Extractor dependency missing");
                } else {
                    warn!(extractor = extractor.name(), error = %e, "Text extraction failed");
                }
                ExtractionResult::failure(e.to_string())
            }
        }
    }

    /// Extract text from a file.
    pub fn extract(&self, path: &Path) -> ExtractionResult {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();

        if !self.supports(&extension) {
            warn!(path = %path.display(), "Unsupported file format");
            return ExtractionResult::failure(
                ExtractError::UnsupportedFormat(format!(".{}", extension)).to_string(),
            );
        }

        match std::fs::read(path) {
            Ok(content) => self.extract_bytes(&content, &extension),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read file");
                ExtractionResult::failure(ExtractError::Io(e).to_string())
            }
        }
    }

    /// Get the number of registered extractors.
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    /// Check if the engine has no registered extractors.
    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl Default for ExtractionEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
