//! docmeta-core - Document metadata generation.
//!
//! Runs each document through three stages and fuses their output into a
//! [`MetadataRecord`]:
//!
//! 1. Text extraction ([`docmeta_extractors`]) with per-format fallback chains
//! 2. Semantic enrichment ([`docmeta_nlp`]): keywords, entities, summary,
//!    topics, sentiment and readability
//! 3. Metadata synthesis ([`synthesis`]): title, description, category,
//!    content type, complexity, quality score and reading time
//!
//! # Example
//!
//! ```ignore
//! use docmeta_core::{GeneratorConfig, MetadataGenerator};
//!
//! let generator = MetadataGenerator::new(GeneratorConfig::default());
//! let record = generator.generate_metadata(Path::new("report.pdf"));
//! println!("{} ({})", record.derived_metadata.title, record.derived_metadata.category);
//! ```

pub mod config;
pub mod error;
pub mod formats;
pub mod generator;
pub mod persist;
pub mod processor;
pub mod synthesis;
pub mod types;
pub mod validation;

pub use config::{GeneratorConfig, DEFAULT_MAX_FILE_SIZE, DEFAULT_PROCESSING_TIMEOUT_SECS};
pub use error::{CoreResult, DocmetaError, ErrorCode};
pub use formats::{extension_of, FormatEntry, SupportedFormats, UNKNOWN_DOCUMENT};
pub use generator::MetadataGenerator;
pub use persist::{load_metadata, save_metadata};
pub use processor::{discover_documents, DocumentProcessor};
pub use synthesis::synthesize;
pub use types::*;
pub use validation::{validate_directory, validate_file, validate_format};

pub use docmeta_extractors::{ExtractionConfig, ExtractionResult};
pub use docmeta_nlp::{AnalysisConfig, EnrichmentResult};
