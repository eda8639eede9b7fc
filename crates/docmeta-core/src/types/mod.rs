//! Record types for docmeta.

mod derived;
mod document_info;
mod record;
mod stats;

pub use derived::{ComplexityLevel, ContentType, DerivedMetadata, DocumentCategory};
pub use document_info::{file_hash, DocumentInfo};
pub use record::{MetadataRecord, ProcessingInfo, GENERATOR_VERSION};
pub use stats::{BatchInfo, BatchSummary, FileSummary, ProcessingStats};
