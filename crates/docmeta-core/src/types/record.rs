//! The complete per-document metadata record.

use chrono::{DateTime, Utc};
use docmeta_extractors::ExtractionResult;
use docmeta_nlp::EnrichmentResult;
use serde::{Deserialize, Serialize};

use super::{DerivedMetadata, DocumentInfo};

/// Crate version stamped into every record.
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// How and when a record was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingInfo {
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub success: bool,
    pub errors: Vec<String>,
    pub elapsed_ms: u64,
}

impl ProcessingInfo {
    /// Fresh info stamped now, successful until an error is recorded.
    pub fn started() -> Self {
        Self {
            timestamp: Utc::now(),
            version: GENERATOR_VERSION.to_string(),
            success: true,
            errors: Vec::new(),
            elapsed_ms: 0,
        }
    }

    pub fn push_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.success = false;
    }
}

/// Everything known about one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub document_info: DocumentInfo,
    pub extraction_info: ExtractionResult,
    pub content_analysis: EnrichmentResult,
    pub derived_metadata: DerivedMetadata,
    pub processing_info: ProcessingInfo,
}

impl MetadataRecord {
    pub fn is_success(&self) -> bool {
        self.processing_info.success
    }

    /// First recorded error, if any.
    pub fn first_error(&self) -> Option<&str> {
        self.processing_info.errors.first().map(String::as_str)
    }
}
