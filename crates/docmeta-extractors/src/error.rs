//! Extraction error types.

use thiserror::Error;

/// Errors that can occur during text extraction.
///
/// These never escape [`crate::ExtractionEngine::extract`]; the engine folds
/// them into the `error` field of an [`crate::ExtractionResult`].
#[derive(Error, Debug)]
pub enum ExtractError {
    /// File extension is not handled by any registered extractor.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// A format library was not compiled in or is not installed.
    #[error("{format} support not available: {hint}")]
    MissingDependency {
        /// Human-readable format name.
        format: String,
        /// What is needed to enable it.
        hint: String,
    },

    /// None of the candidate encodings could decode a text file.
    #[error("Could not decode text file with any supported encoding (tried {0})")]
    Decoding(String),

    /// Extraction process failed.
    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    /// IO error during extraction.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PDF-specific extraction error.
    #[cfg(feature = "pdf")]
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    /// DOCX-specific extraction error.
    #[cfg(feature = "docx")]
    #[error("DOCX extraction error: {0}")]
    Docx(String),

    /// Image decode or recognition error.
    #[error("Image error: {0}")]
    Image(String),
}

impl ExtractError {
    /// Create a missing-dependency error.
    pub fn missing_dependency(format: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::MissingDependency {
            format: format.into(),
            hint: hint.into(),
        }
    }

    /// Whether this is a hard dependency failure rather than a per-file one.
    pub fn is_missing_dependency(&self) -> bool {
        matches!(self, Self::MissingDependency { .. })
    }
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
