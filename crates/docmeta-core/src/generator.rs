//! Pipeline orchestrator: extraction, enrichment and synthesis for one file.

use std::path::Path;
use std::time::Instant;

use docmeta_extractors::{ExtractionEngine, ExtractionResult};
use docmeta_nlp::{EnrichmentResult, SemanticAnalyzer};
use tracing::{debug, info, warn};

use crate::config::GeneratorConfig;
use crate::formats::SupportedFormats;
use crate::synthesis::synthesize;
use crate::types::{DocumentInfo, MetadataRecord, ProcessingInfo};
use crate::validation::validate_file;

/// Produces a [`MetadataRecord`] for a document path.
///
/// Construction loads the language backend once; the generator is then
/// shared read-only (it is `Send + Sync`) across batch workers.
pub struct MetadataGenerator {
    config: GeneratorConfig,
    formats: SupportedFormats,
    engine: ExtractionEngine,
    analyzer: SemanticAnalyzer,
}

impl MetadataGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let engine = ExtractionEngine::with_config(&config.extraction);
        let analyzer = SemanticAnalyzer::new(config.analysis.clone());
        Self::with_components(config, engine, analyzer)
    }

    /// Assemble from prebuilt stages.
    pub fn with_components(
        config: GeneratorConfig,
        engine: ExtractionEngine,
        analyzer: SemanticAnalyzer,
    ) -> Self {
        info!(
            extractors = engine.len(),
            model = %config.analysis.model,
            backend_loaded = analyzer.has_backend(),
            "Metadata generator initialized"
        );
        Self {
            config,
            formats: SupportedFormats::default(),
            engine,
            analyzer,
        }
    }

    /// Replace the supported-format table.
    pub fn with_formats(mut self, formats: SupportedFormats) -> Self {
        self.formats = formats;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn formats(&self) -> &SupportedFormats {
        &self.formats
    }

    /// Run the full pipeline. Never fails: problems are recorded in
    /// `processing_info` and the record is still complete.
    pub fn generate_metadata(&self, path: &Path) -> MetadataRecord {
        let started = Instant::now();
        info!(path = %path.display(), "Generating metadata");

        if let Err(e) = validate_file(path, self.config.max_file_size) {
            warn!(path = %path.display(), error = %e, "File validation failed");
            return self.failure_record(path, e.to_string());
        }

        let mut processing = ProcessingInfo::started();

        let document_info = DocumentInfo::from_path(path, &self.formats).unwrap_or_else(|e| {
            processing.push_error(format!("Could not read file information: {}", e));
            DocumentInfo::placeholder(path, &self.formats)
        });

        let extraction = self.engine.extract(path);
        if !extraction.success {
            let reason = extraction.error.as_deref().unwrap_or("unknown error");
            processing.push_error(format!("Text extraction failed: {}", reason));
        }

        let enrichment = if extraction.has_text() {
            self.analyzer.analyze(&extraction.text)
        } else {
            warn!(path = %path.display(), "No text extracted, skipping semantic analysis");
            EnrichmentResult::empty(self.analyzer.config().language.clone())
        };

        let derived_metadata = synthesize(&document_info, &extraction, &enrichment);
        processing.elapsed_ms = elapsed_ms(started);

        debug!(
            path = %path.display(),
            method = %extraction.extraction_method,
            words = extraction.word_count,
            quality = derived_metadata.quality_score,
            elapsed_ms = processing.elapsed_ms,
            "Metadata generated"
        );

        MetadataRecord {
            document_info,
            extraction_info: extraction,
            content_analysis: enrichment,
            derived_metadata,
            processing_info: processing,
        }
    }

    /// Complete record for a document that never entered the pipeline.
    pub fn failure_record(&self, path: &Path, error: impl Into<String>) -> MetadataRecord {
        let error = error.into();
        let document_info = DocumentInfo::placeholder(path, &self.formats);
        let extraction = ExtractionResult::failure(error.clone());
        let enrichment = EnrichmentResult::empty(self.analyzer.config().language.clone());
        let derived_metadata = synthesize(&document_info, &extraction, &enrichment);

        let mut processing = ProcessingInfo::started();
        processing.push_error(error);

        MetadataRecord {
            document_info,
            extraction_info: extraction,
            content_analysis: enrichment,
            derived_metadata,
            processing_info: processing,
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocumentCategory;

    fn generator() -> MetadataGenerator {
        MetadataGenerator::new(GeneratorConfig::default())
    }

    #[test]
    fn test_generator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MetadataGenerator>();
    }

    #[test]
    fn test_missing_file_yields_failed_record() {
        let record = generator().generate_metadata(Path::new("/definitely/not/here.txt"));
        assert!(!record.is_success());
        assert_eq!(record.document_info.filename, "here.txt");
        assert_eq!(record.derived_metadata.quality_score, 0.0);
        assert_eq!(record.derived_metadata.category, DocumentCategory::GeneralDocument);
        assert!(record.first_error().unwrap().starts_with("File does not exist"));
    }

    #[test]
    fn test_oversized_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.txt");
        std::fs::write(&path, "x".repeat(64)).unwrap();

        let generator = MetadataGenerator::new(GeneratorConfig::default().with_max_file_size(10));
        let record = generator.generate_metadata(&path);
        assert!(!record.is_success());
        assert!(record.first_error().unwrap().starts_with("File too large"));
    }

    #[test]
    fn test_empty_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.txt");
        std::fs::write(&path, "   \n").unwrap();

        let record = generator().generate_metadata(&path);
        assert!(record.is_success());
        assert_eq!(record.extraction_info.word_count, 0);
        assert_eq!(record.content_analysis.analysis_backend, "none");
        assert_eq!(record.derived_metadata.estimated_reading_time, "0 minutes");
        assert_eq!(record.derived_metadata.title, "Blank");
    }

    #[test]
    fn test_unreadable_format_records_extraction_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.rtf");
        std::fs::write(&path, "{\\rtf1 hello}").unwrap();

        let record = generator().generate_metadata(&path);
        assert!(!record.is_success());
        assert!(record.first_error().unwrap().starts_with("Text extraction failed: "));
        assert_eq!(record.document_info.document_type, "Rich Text Format");
        assert_eq!(record.document_info.file_hash.len(), 64);
    }
}
