//! docmeta-extractors - Text extraction for document metadata generation.
//!
//! Provides extractors for plain text, PDF, DOCX and raster images behind a
//! single synchronous [`Extractor`] trait, and an [`ExtractionEngine`] that
//! routes files by extension and never fails.
//!
//! # Features
//!
//! - `pdf` (default) - PDF text layers via pdf-extract, falling back to lopdf
//! - `docx` (default) - DOCX text extraction via docx-rs
//! - `image` - Image decoding
//! - `ocr` - Image OCR via tesseract (requires tesseract installed)
//! - `full` - All extraction features
//!
//! # Example
//!
//! ```ignore
//! use docmeta_extractors::ExtractionEngine;
//!
//! let engine = ExtractionEngine::with_defaults();
//! let result = engine.extract(Path::new("report.pdf"));
//! if result.success {
//!     println!("{} words via {}", result.word_count, result.extraction_method);
//! }
//! ```

mod config;
mod engine;
mod error;
mod factory;
mod normalize;
mod text;
mod types;

pub mod ocr;
pub mod pdf;

#[cfg(feature = "docx")]
mod docx;

pub use config::ExtractionConfig;
pub use engine::ExtractionEngine;
pub use error::{ExtractError, ExtractResult};
pub use factory::{ExtractorFactory, UnavailableExtractor};
pub use normalize::normalize;
pub use ocr::{ImageExtractor, OcrBackend, IMAGE_EXTENSIONS};
pub use pdf::{PdfExtractor, PdfTextEngine};
pub use text::{TextEncoding, TextExtractor};
pub use types::{ExtractionResult, RawExtraction};

#[cfg(feature = "docx")]
pub use docx::DocxExtractor;

/// Core Extractor trait - all format extractors implement this.
///
/// Extractors are synchronous and stateless per call; the engine owns
/// dispatch and result post-processing.
pub trait Extractor: Send + Sync {
    /// Extract normalized text from file bytes.
    fn extract(&self, content: &[u8]) -> ExtractResult<RawExtraction>;

    /// Lowercase file extensions (without dot) this extractor handles.
    fn supported_extensions(&self) -> &[&str];

    /// Check if this extractor handles the given extension.
    fn supports(&self, extension: &str) -> bool {
        self.supported_extensions().contains(&extension)
    }

    /// Human-readable name for this extractor.
    fn name(&self) -> &str;
}
