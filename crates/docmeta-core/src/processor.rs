//! Batch document processor.
//!
//! Wraps a [`MetadataGenerator`] with format checks, persistence and
//! running statistics. Single documents run synchronously on the caller's
//! thread; file lists and directories fan out to blocking worker threads,
//! bounded by the configured concurrency, with the processing timeout
//! applied per document.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::stream::{self, StreamExt};
use tracing::{error, info, warn};
use walkdir::WalkDir;

use crate::config::GeneratorConfig;
use crate::error::{CoreResult, DocmetaError};
use crate::formats::SupportedFormats;
use crate::generator::MetadataGenerator;
use crate::persist::{batch_summary_path, metadata_path, save_metadata};
use crate::types::{BatchSummary, MetadataRecord, ProcessingStats};
use crate::validation::{validate_directory, validate_file, validate_format};

/// Processes documents and keeps counters across calls.
pub struct DocumentProcessor {
    generator: Arc<MetadataGenerator>,
    stats: Mutex<ProcessingStats>,
}

impl DocumentProcessor {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_generator(MetadataGenerator::new(config))
    }

    pub fn with_generator(generator: MetadataGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
            stats: Mutex::new(ProcessingStats::default()),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        self.generator.config()
    }

    pub fn supported_formats(&self) -> &SupportedFormats {
        self.generator.formats()
    }

    pub fn validate_file_format(&self, path: &Path) -> bool {
        self.generator.formats().supports_path(path)
    }

    /// Process one document and save its record to `output`, or to
    /// `<output_dir>/<stem>_metadata.json` when `output` is `None`.
    ///
    /// Always returns a record; failures are counted in [`Self::stats`].
    pub fn process_single_document(&self, path: &Path, output: Option<&Path>) -> MetadataRecord {
        info!(path = %path.display(), "Processing document");
        let outcome = run_document(&self.generator, path, output);
        self.finish(path, outcome)
    }

    /// Process `paths` in order, up to `concurrency` at a time.
    pub async fn process_file_list(&self, paths: &[PathBuf]) -> Vec<MetadataRecord> {
        let concurrency = self.config().concurrency.max(1);
        let timeout = self.config().processing_timeout();
        info!(files = paths.len(), concurrency, "Processing file list");

        let mut outcomes: Vec<(usize, PathBuf, CoreResult<MetadataRecord>)> =
            stream::iter(paths.iter().cloned().enumerate())
                .map(|(index, path)| {
                    let generator = Arc::clone(&self.generator);
                    async move {
                        let task_path = path.clone();
                        let task = tokio::task::spawn_blocking(move || {
                            run_document(&generator, &task_path, None)
                        });
                        let outcome = match tokio::time::timeout(timeout, task).await {
                            Ok(Ok(outcome)) => outcome,
                            Ok(Err(join)) => Err(DocmetaError::Internal(join.to_string())),
                            Err(_) => Err(DocmetaError::timeout(&path, timeout.as_secs())),
                        };
                        (index, path, outcome)
                    }
                })
                .buffer_unordered(concurrency)
                .collect()
                .await;

        outcomes.sort_by_key(|(index, _, _)| *index);
        outcomes
            .into_iter()
            .map(|(_, path, outcome)| self.finish(&path, outcome))
            .collect()
    }

    /// Process every supported file under `directory` and write
    /// `batch_summary_<dirname>.json` to the output directory.
    pub async fn process_directory(
        &self,
        directory: &Path,
        recursive: bool,
    ) -> CoreResult<Vec<MetadataRecord>> {
        info!(directory = %directory.display(), recursive, "Processing directory");
        validate_directory(directory)?;

        let files = discover_documents(directory, recursive, self.supported_formats());
        info!(files = files.len(), "Found files to process");

        let records = self.process_file_list(&files).await;

        let summary = BatchSummary::new(directory, &records, &self.stats());
        let summary_path = batch_summary_path(&self.config().output_dir, directory);
        match save_metadata(&summary, &summary_path) {
            Ok(()) => info!(path = %summary_path.display(), "Batch summary saved"),
            Err(e) => error!(path = %summary_path.display(), error = %e, "Failed to save batch summary"),
        }

        Ok(records)
    }

    /// Snapshot of the counters.
    pub fn stats(&self) -> ProcessingStats {
        self.lock_stats().clone()
    }

    pub fn reset_stats(&self) {
        *self.lock_stats() = ProcessingStats::default();
    }

    fn finish(&self, path: &Path, outcome: CoreResult<MetadataRecord>) -> MetadataRecord {
        match outcome {
            Ok(record) => {
                let mut stats = self.lock_stats();
                if record.is_success() {
                    stats.record_success();
                } else {
                    let reason = record.first_error().unwrap_or("unknown error");
                    stats.record_failure(format!("Error processing {}: {}", path.display(), reason));
                }
                record
            }
            Err(e) => {
                let message = format!("Error processing {}: {}", path.display(), e);
                error!(path = %path.display(), error = %e, code = e.code().as_str(), "Document processing failed");
                self.lock_stats().record_failure(message.clone());
                self.generator.failure_record(path, message)
            }
        }
    }

    fn lock_stats(&self) -> MutexGuard<'_, ProcessingStats> {
        self.stats.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Validate, generate and save one document.
fn run_document(
    generator: &MetadataGenerator,
    path: &Path,
    output: Option<&Path>,
) -> CoreResult<MetadataRecord> {
    validate_file(path, generator.config().max_file_size)?;
    validate_format(path, generator.formats())?;

    let record = generator.generate_metadata(path);
    if !record.is_success() {
        warn!(path = %path.display(), errors = ?record.processing_info.errors, "Metadata generated with errors");
    }

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| metadata_path(&generator.config().output_dir, path));
    save_metadata(&record, &output)?;
    info!(path = %output.display(), "Metadata saved");

    Ok(record)
}

/// Supported files under `directory`, sorted by path.
pub fn discover_documents(
    directory: &Path,
    recursive: bool,
    formats: &SupportedFormats,
) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(directory).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "Skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| formats.supports_path(path))
        .collect();

    files.sort();
    files
}
