//! Factory for creating extractors.
//!
//! Formats whose feature is compiled out are still claimed, by an
//! [`UnavailableExtractor`], so callers get a missing-dependency error
//! instead of "unsupported format".

use std::sync::Arc;

use crate::config::ExtractionConfig;
use crate::error::{ExtractError, ExtractResult};
use crate::ocr::{self, ImageExtractor, OcrBackend, IMAGE_EXTENSIONS};
use crate::text::TextExtractor;
use crate::types::RawExtraction;
use crate::Extractor;

#[cfg(feature = "docx")]
use crate::docx::DocxExtractor;
#[cfg(feature = "pdf")]
use crate::pdf::PdfExtractor;

/// Placeholder for a format whose library is not compiled in.
#[derive(Debug, Clone)]
pub struct UnavailableExtractor {
    format: &'static str,
    extensions: &'static [&'static str],
    hint: &'static str,
}

impl UnavailableExtractor {
    /// Create a placeholder claiming `extensions`.
    pub fn new(
        format: &'static str,
        extensions: &'static [&'static str],
        hint: &'static str,
    ) -> Self {
        Self {
            format,
            extensions,
            hint,
        }
    }
}

impl Extractor for UnavailableExtractor {
    fn extract(&self, _content: &[u8]) -> ExtractResult<RawExtraction> {
        Err(ExtractError::missing_dependency(self.format, self.hint))
    }

    fn supported_extensions(&self) -> &[&str] {
        self.extensions
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

/// Factory for creating format extractors.
pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Create a plain-text extractor.
    pub fn text(config: &ExtractionConfig) -> Arc<dyn Extractor> {
        Arc::new(TextExtractor::with_encodings(config.encodings.clone()))
    }

    /// Create a PDF extractor.
    #[cfg(feature = "pdf")]
    pub fn pdf(ocr: Option<Arc<dyn OcrBackend>>) -> Arc<dyn Extractor> {
        Arc::new(PdfExtractor::new(ocr))
    }

    /// Create a PDF extractor.
    #[cfg(not(feature = "pdf"))]
    pub fn pdf(_ocr: Option<Arc<dyn OcrBackend>>) -> Arc<dyn Extractor> {
        Arc::new(UnavailableExtractor::new(
            "PDF",
            &["pdf"],
            "build with the `pdf` feature",
        ))
    }

    /// Create a DOCX extractor.
    #[cfg(feature = "docx")]
    pub fn docx() -> Arc<dyn Extractor> {
        Arc::new(DocxExtractor::new())
    }

    /// Create a DOCX extractor.
    #[cfg(not(feature = "docx"))]
    pub fn docx() -> Arc<dyn Extractor> {
        Arc::new(UnavailableExtractor::new(
            "DOCX",
            &["docx", "doc"],
            "build with the `docx` feature",
        ))
    }

    /// Create an image OCR extractor.
    pub fn image(ocr: Option<Arc<dyn OcrBackend>>, languages: &str) -> Arc<dyn Extractor> {
        Arc::new(ImageExtractor::new(ocr, languages))
    }

    /// Create every extractor for the given configuration.
    ///
    /// The OCR backend is probed once and shared by the PDF and image
    /// extractors.
    pub fn all(config: &ExtractionConfig) -> Vec<Arc<dyn Extractor>> {
        let ocr = if config.ocr_enabled {
            ocr::default_backend()
        } else {
            None
        };
        Self::all_with_ocr(config, ocr)
    }

    /// Create every extractor with an explicit OCR backend.
    pub fn all_with_ocr(
        config: &ExtractionConfig,
        ocr: Option<Arc<dyn OcrBackend>>,
    ) -> Vec<Arc<dyn Extractor>> {
        vec![
            Self::text(config),
            Self::pdf(ocr.clone()),
            Self::docx(),
            Self::image(ocr, &config.ocr_language_arg()),
        ]
    }

    /// Extensions handled by the image extractor.
    pub fn image_extensions() -> &'static [&'static str] {
        IMAGE_EXTENSIONS
    }
}
