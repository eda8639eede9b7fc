//! Core types for text extraction.

use serde::{Deserialize, Serialize};

/// Output of a single format extractor, before engine post-processing.
///
/// Extractors report only what they know about the source: the normalized
/// text, how many pages they saw, and which method produced the text. Word
/// and character counts are filled in uniformly by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawExtraction {
    /// Normalized extracted text (may be empty).
    pub text: String,
    /// Page count as reported by the adapter.
    pub page_count: usize,
    /// Name of the adapter or engine that produced the text.
    pub method: String,
}

impl RawExtraction {
    /// Create a new raw extraction.
    pub fn new(text: impl Into<String>, page_count: usize, method: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            page_count,
            method: method.into(),
        }
    }

    /// An extraction that ran without error but found no text.
    pub fn empty(page_count: usize, method: impl Into<String>) -> Self {
        Self::new(String::new(), page_count, method)
    }

    /// Check if extraction produced meaningful content.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// The per-document extraction record.
///
/// Exactly one is produced per document per run. On total failure `success`
/// is false, `text` is empty and `error` carries the reason. Note that
/// `success == true` does not imply text: an image-only PDF without OCR
/// succeeds with empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Whether extraction completed without error.
    pub success: bool,
    /// Normalized extracted text.
    pub text: String,
    /// Number of pages seen by the adapter.
    pub page_count: usize,
    /// Whitespace-delimited word count of `text`.
    pub word_count: usize,
    /// Character count of `text`.
    pub character_count: usize,
    /// Adapter or engine that produced the text.
    pub extraction_method: String,
    /// Error message on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionResult {
    /// Build a successful result from raw extractor output.
    ///
    /// Counts are recomputed here so every adapter reports them the same way.
    pub fn from_raw(raw: RawExtraction) -> Self {
        let (word_count, character_count) = if raw.text.is_empty() {
            (0, 0)
        } else {
            (raw.text.split_whitespace().count(), raw.text.chars().count())
        };

        Self {
            success: true,
            text: raw.text,
            page_count: raw.page_count,
            word_count,
            character_count,
            extraction_method: raw.method,
            error: None,
        }
    }

    /// Build a failed result.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Whether the extraction produced any text.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}
