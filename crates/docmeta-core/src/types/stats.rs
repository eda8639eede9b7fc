//! Batch processing statistics and summaries.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::MetadataRecord;

/// Running counters of a processor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingStats {
    pub total_files: usize,
    pub successful: usize,
    pub failed: usize,
    pub errors: Vec<String>,
}

impl ProcessingStats {
    pub fn record_success(&mut self) {
        self.total_files += 1;
        self.successful += 1;
    }

    pub fn record_failure(&mut self, error: impl Into<String>) {
        self.total_files += 1;
        self.failed += 1;
        self.errors.push(error.into());
    }

    /// Whether at least one document succeeded.
    pub fn any_successful(&self) -> bool {
        self.successful > 0
    }
}

/// One line of a batch summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSummary {
    pub filename: String,
    pub file_size_mb: f64,
    pub success: bool,
    pub title: String,
    pub category: String,
    pub quality_score: f64,
    pub word_count: usize,
}

impl From<&MetadataRecord> for FileSummary {
    fn from(record: &MetadataRecord) -> Self {
        Self {
            filename: record.document_info.filename.clone(),
            file_size_mb: record.document_info.file_size_mb,
            success: record.processing_info.success,
            title: record.derived_metadata.title.clone(),
            category: record.derived_metadata.category.to_string(),
            quality_score: record.derived_metadata.quality_score,
            word_count: record.extraction_info.word_count,
        }
    }
}

/// Directory-level counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchInfo {
    pub directory: String,
    pub processed_files: usize,
    pub successful_files: usize,
    pub failed_files: usize,
    pub processing_stats: ProcessingStats,
}

/// Summary written as `batch_summary_<dirname>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub batch_info: BatchInfo,
    pub file_summaries: Vec<FileSummary>,
}

impl BatchSummary {
    pub fn new(directory: &Path, records: &[MetadataRecord], stats: &ProcessingStats) -> Self {
        let successful = records.iter().filter(|r| r.is_success()).count();
        Self {
            batch_info: BatchInfo {
                directory: directory.display().to_string(),
                processed_files: records.len(),
                successful_files: successful,
                failed_files: records.len() - successful,
                processing_stats: stats.clone(),
            },
            file_summaries: records.iter().map(FileSummary::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_counters() {
        let mut stats = ProcessingStats::default();
        assert!(!stats.any_successful());
        stats.record_success();
        stats.record_failure("Error processing a.pdf: boom");
        assert_eq!(stats.total_files, 2);
        assert_eq!(stats.successful, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.errors.len(), 1);
        assert!(stats.any_successful());
    }

    #[test]
    fn test_empty_batch_summary() {
        let summary = BatchSummary::new(Path::new("/docs"), &[], &ProcessingStats::default());
        assert_eq!(summary.batch_info.processed_files, 0);
        assert_eq!(summary.batch_info.failed_files, 0);
        assert!(summary.file_summaries.is_empty());
    }
}
