//! OCR adapter for raster images.
//!
//! [`OcrBackend`] is the seam between extractors and the recognition
//! engine. The Tesseract implementation is only compiled with the `ocr`
//! feature; without it no backend exists and image files fail with a
//! missing-dependency error.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{ExtractError, ExtractResult};
use crate::normalize::normalize;
use crate::types::RawExtraction;
use crate::Extractor;

/// Recognition engine used by the image extractor and the PDF fallback.
pub trait OcrBackend: Send + Sync {
    /// Backend identifier.
    fn name(&self) -> &str;

    /// Whether the backend can run (binary installed, models present).
    fn is_available(&self) -> bool;

    /// Recognize text in an encoded raster image.
    ///
    /// `languages` uses tesseract syntax (`eng+deu`).
    fn recognize(&self, content: &[u8], languages: &str) -> ExtractResult<String>;
}

/// Tesseract OCR via the system binary.
#[cfg(feature = "ocr")]
#[derive(Debug, Clone, Default)]
pub struct TesseractOcr;

#[cfg(feature = "ocr")]
impl TesseractOcr {
    /// Create a tesseract backend.
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "ocr")]
impl OcrBackend for TesseractOcr {
    fn name(&self) -> &str {
        "tesseract"
    }

    fn is_available(&self) -> bool {
        rusty_tesseract::get_tesseract_version().is_ok()
    }

    fn recognize(&self, content: &[u8], languages: &str) -> ExtractResult<String> {
        use rusty_tesseract::{Args, Image};

        let img = image::load_from_memory(content)
            .map_err(|e| ExtractError::Image(format!("Failed to decode image: {}", e)))?;

        // Tesseract does best on grayscale input
        let gray = image::DynamicImage::ImageLuma8(img.to_luma8());
        let tesseract_image = Image::from_dynamic_image(&gray)
            .map_err(|e| ExtractError::Image(format!("Failed to prepare image: {}", e)))?;

        let args = Args {
            lang: languages.to_string(),
            ..Args::default()
        };

        rusty_tesseract::image_to_string(&tesseract_image, &args)
            .map_err(|e| ExtractError::Image(format!("Tesseract failed: {}", e)))
    }
}

/// Create the default OCR backend if one is compiled in and installed.
pub fn default_backend() -> Option<Arc<dyn OcrBackend>> {
    #[cfg(feature = "ocr")]
    {
        let backend = TesseractOcr::new();
        if backend.is_available() {
            return Some(Arc::new(backend));
        }
        warn!("Tesseract binary not found; OCR disabled");
    }

    None
}

/// Image extractor that runs OCR over a raster image.
pub struct ImageExtractor {
    ocr: Option<Arc<dyn OcrBackend>>,
    languages: String,
}

impl ImageExtractor {
    /// Create an image extractor with the given OCR backend and languages.
    pub fn new(ocr: Option<Arc<dyn OcrBackend>>, languages: impl Into<String>) -> Self {
        Self {
            ocr,
            languages: languages.into(),
        }
    }

    /// Whether an OCR backend is wired in.
    pub fn has_ocr(&self) -> bool {
        self.ocr.is_some()
    }

    /// Detect image format from magic bytes.
    fn detect_format(content: &[u8]) -> Option<&'static str> {
        if content.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            Some("png")
        } else if content.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some("jpeg")
        } else if content.starts_with(b"GIF87a") || content.starts_with(b"GIF89a") {
            Some("gif")
        } else if content.starts_with(b"RIFF") && content.len() > 12 && &content[8..12] == b"WEBP"
        {
            Some("webp")
        } else if content.starts_with(b"II*\0") || content.starts_with(b"MM\0*") {
            Some("tiff")
        } else if content.starts_with(b"BM") {
            Some("bmp")
        } else {
            None
        }
    }
}

impl Extractor for ImageExtractor {
    fn extract(&self, content: &[u8]) -> ExtractResult<RawExtraction> {
        let ocr = self.ocr.as_ref().ok_or_else(|| {
            ExtractError::missing_dependency(
                "OCR",
                "build with the `ocr` feature and install tesseract",
            )
        })?;

        debug!(
            format = Self::detect_format(content).unwrap_or("unknown"),
            backend = ocr.name(),
            "Running OCR on image"
        );

        // Decode and recognition failures degrade to empty text
        match ocr.recognize(content, &self.languages) {
            Ok(text) => Ok(RawExtraction::new(normalize(&text), 1, "ocr")),
            Err(e) => {
                warn!(error = %e, "OCR extraction failed");
                Ok(RawExtraction::empty(0, "ocr"))
            }
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        IMAGE_EXTENSIONS
    }

    fn name(&self) -> &str {
        "image-ocr"
    }
}

/// Raster image extensions routed to OCR.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif", "tiff", "bmp", "gif", "webp"];
