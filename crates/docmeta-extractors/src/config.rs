//! Extraction configuration.

use serde::{Deserialize, Serialize};

use crate::text::TextEncoding;

/// Configuration for the extraction engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Candidate encodings for plain-text files, tried in order.
    pub encodings: Vec<TextEncoding>,
    /// Tesseract language codes used for OCR (joined with `+`).
    pub ocr_languages: Vec<String>,
    /// Whether to wire an OCR backend into the PDF and image extractors.
    pub ocr_enabled: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            encodings: TextEncoding::default_order(),
            ocr_languages: vec!["eng".to_string()],
            ocr_enabled: true,
        }
    }
}

impl ExtractionConfig {
    /// Language argument in the form tesseract expects (`eng+deu`).
    pub fn ocr_language_arg(&self) -> String {
        if self.ocr_languages.is_empty() {
            "eng".to_string()
        } else {
            self.ocr_languages.join("+")
        }
    }
}
