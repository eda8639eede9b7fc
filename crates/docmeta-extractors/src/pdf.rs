//! PDF text extraction with an engine fallback chain.
//!
//! Two independent text-layer engines are tried in order (pdf-extract, then
//! lopdf). The first one that yields any non-empty page text wins and its
//! name is recorded as the extraction method. Image-only PDFs fall through
//! to OCR when a backend is configured.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{ExtractError, ExtractResult};
use crate::normalize::normalize;
use crate::ocr::OcrBackend;
use crate::types::RawExtraction;
use crate::Extractor;

/// Text returned for image-only PDFs when OCR is configured.
///
/// Rasterizing PDF pages for OCR is not implemented; callers get this
/// explanation instead of recognized text.
pub const PDF_OCR_PLACEHOLDER: &str =
    "OCR extraction for PDF files requires page rasterization, which is not available";

/// A PDF text-layer engine returning one string per page.
pub trait PdfTextEngine: Send + Sync {
    /// Engine name, recorded as the extraction method when it wins.
    fn name(&self) -> &str;

    /// Extract the text layer of each page.
    fn page_texts(&self, content: &[u8]) -> ExtractResult<Vec<String>>;
}

/// Engine backed by the pdf-extract crate.
#[cfg(feature = "pdf")]
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractEngine;

#[cfg(feature = "pdf")]
impl PdfTextEngine for PdfExtractEngine {
    fn name(&self) -> &str {
        "pdf-extract"
    }

    fn page_texts(&self, content: &[u8]) -> ExtractResult<Vec<String>> {
        // pdf-extract panics on some malformed inputs
        let outcome =
            std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(content));

        match outcome {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(ExtractError::Pdf(format!("pdf-extract: {}", e))),
            Err(_) => Err(ExtractError::Pdf("pdf-extract panicked on malformed input".to_string())),
        }
    }
}

/// Engine backed by lopdf's content-stream text extraction.
#[cfg(feature = "pdf")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfEngine;

#[cfg(feature = "pdf")]
impl PdfTextEngine for LopdfEngine {
    fn name(&self) -> &str {
        "lopdf"
    }

    fn page_texts(&self, content: &[u8]) -> ExtractResult<Vec<String>> {
        let doc = lopdf::Document::load_mem(content)
            .map_err(|e| ExtractError::Pdf(format!("lopdf: {}", e)))?;

        let pages = doc
            .get_pages()
            .keys()
            .map(|&number| match doc.extract_text(&[number]) {
                Ok(text) => text,
                Err(e) => {
                    debug!(page = number, error = %e, "lopdf could not read page text");
                    String::new()
                }
            })
            .collect();

        Ok(pages)
    }
}

/// PDF extractor running a chain of text-layer engines.
pub struct PdfExtractor {
    engines: Vec<Arc<dyn PdfTextEngine>>,
    ocr: Option<Arc<dyn OcrBackend>>,
}

impl PdfExtractor {
    /// Create a PDF extractor with the default engine chain.
    #[cfg(feature = "pdf")]
    pub fn new(ocr: Option<Arc<dyn OcrBackend>>) -> Self {
        Self::with_engines(vec![Arc::new(PdfExtractEngine), Arc::new(LopdfEngine)], ocr)
    }

    /// Create a PDF extractor with an explicit engine chain.
    pub fn with_engines(
        engines: Vec<Arc<dyn PdfTextEngine>>,
        ocr: Option<Arc<dyn OcrBackend>>,
    ) -> Self {
        Self { engines, ocr }
    }

    /// Names of the engines in the order they are tried.
    pub fn engine_names(&self) -> Vec<&str> {
        self.engines.iter().map(|e| e.name()).collect()
    }
}

impl Extractor for PdfExtractor {
    fn extract(&self, content: &[u8]) -> ExtractResult<RawExtraction> {
        let mut page_count = 0;
        let mut opened = false;
        let mut last_error: Option<ExtractError> = None;

        for engine in &self.engines {
            match engine.page_texts(content) {
                Ok(pages) => {
                    opened = true;
                    page_count = pages.len();

                    let texts: Vec<&str> = pages
                        .iter()
                        .map(String::as_str)
                        .filter(|page| !page.trim().is_empty())
                        .collect();

                    if !texts.is_empty() {
                        debug!(engine = engine.name(), pages = page_count, "PDF text layer extracted");
                        return Ok(RawExtraction::new(
                            normalize(&texts.join("\n")),
                            page_count,
                            engine.name(),
                        ));
                    }

                    debug!(engine = engine.name(), pages = page_count, "PDF engine found no text");
                }
                Err(e) => {
                    warn!(engine = engine.name(), error = %e, "PDF engine failed, trying next");
                    last_error = Some(e);
                }
            }
        }

        // No engine could even open the document
        if !opened {
            return Err(last_error.unwrap_or_else(|| {
                ExtractError::ExtractionFailed("No PDF engines configured".to_string())
            }));
        }

        if let Some(ocr) = &self.ocr {
            info!(backend = ocr.name(), "No text extracted from PDF, attempting OCR");
            return Ok(RawExtraction::new(PDF_OCR_PLACEHOLDER, page_count, "pdf_ocr"));
        }

        Ok(RawExtraction::empty(page_count, "pdf_text_extraction"))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn name(&self) -> &str {
        "pdf"
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Engine with a canned page list or error.
    pub struct StubEngine {
        pub name: &'static str,
        pub pages: Result<Vec<String>, String>,
    }

    impl StubEngine {
        pub fn pages(name: &'static str, pages: &[&str]) -> Arc<dyn PdfTextEngine> {
            Arc::new(Self {
                name,
                pages: Ok(pages.iter().map(|p| p.to_string()).collect()),
            })
        }

        pub fn failing(name: &'static str) -> Arc<dyn PdfTextEngine> {
            Arc::new(Self {
                name,
                pages: Err("corrupt xref".to_string()),
            })
        }
    }

    impl PdfTextEngine for StubEngine {
        fn name(&self) -> &str {
            self.name
        }

        fn page_texts(&self, _content: &[u8]) -> ExtractResult<Vec<String>> {
            self.pages.clone().map_err(ExtractError::ExtractionFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::StubEngine;
    use super::*;
    use crate::ocr::test_support::StubOcr;

    #[test]
    fn test_first_engine_wins() {
        let extractor = PdfExtractor::with_engines(
            vec![
                StubEngine::pages("first", &["Page one", "Page  two"]),
                StubEngine::pages("second", &["other"]),
            ],
            None,
        );

        let result = extractor.extract(b"%PDF").unwrap();
        assert_eq!(result.text, "Page one Page two");
        assert_eq!(result.page_count, 2);
        assert_eq!(result.method, "first");
    }

    #[test]
    fn test_falls_through_to_second_engine_on_empty_pages() {
        let extractor = PdfExtractor::with_engines(
            vec![
                StubEngine::pages("first", &["", "  "]),
                StubEngine::pages("second", &["recovered text", ""]),
            ],
            None,
        );

        let result = extractor.extract(b"%PDF").unwrap();
        assert_eq!(result.text, "recovered text");
        assert_eq!(result.method, "second");
    }

    #[test]
    fn test_falls_through_on_engine_error() {
        let extractor = PdfExtractor::with_engines(
            vec![
                StubEngine::failing("first"),
                StubEngine::pages("second", &["text"]),
            ],
            None,
        );

        assert_eq!(extractor.extract(b"%PDF").unwrap().method, "second");
    }

    #[test]
    fn test_image_only_pdf_without_ocr_is_empty_success() {
        let extractor = PdfExtractor::with_engines(
            vec![
                StubEngine::pages("first", &["", ""]),
                StubEngine::pages("second", &["", ""]),
            ],
            None,
        );

        let result = extractor.extract(b"%PDF").unwrap();
        assert!(result.is_empty());
        assert_eq!(result.page_count, 2);
        assert_eq!(result.method, "pdf_text_extraction");
    }

    #[test]
    fn test_image_only_pdf_with_ocr_returns_placeholder() {
        let ocr = Arc::new(StubOcr {
            response: Ok("never called".to_string()),
        });
        let extractor = PdfExtractor::with_engines(
            vec![StubEngine::pages("first", &[""])],
            Some(ocr),
        );

        let result = extractor.extract(b"%PDF").unwrap();
        assert_eq!(result.text, PDF_OCR_PLACEHOLDER);
        assert_eq!(result.method, "pdf_ocr");
    }

    #[test]
    fn test_all_engines_fail_is_error() {
        let extractor = PdfExtractor::with_engines(
            vec![StubEngine::failing("first"), StubEngine::failing("second")],
            None,
        );

        assert!(extractor.extract(b"not a pdf").is_err());
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn test_default_engine_order() {
        let extractor = PdfExtractor::new(None);
        assert_eq!(extractor.engine_names(), vec!["pdf-extract", "lopdf"]);
        assert!(extractor.supports("pdf"));
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn test_real_engines_reject_garbage() {
        let extractor = PdfExtractor::new(None);
        assert!(extractor.extract(b"definitely not a pdf").is_err());
    }
}
