//! Configuration system for docmeta.

use std::path::{Path, PathBuf};
use std::time::Duration;

use docmeta_extractors::ExtractionConfig;
use docmeta_nlp::AnalysisConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{CoreResult, DocmetaError};

/// Default maximum input size: 50 MB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Default per-document processing timeout in seconds.
pub const DEFAULT_PROCESSING_TIMEOUT_SECS: u64 = 300;

/// Main generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Text extraction settings.
    pub extraction: ExtractionConfig,
    /// Semantic analysis settings.
    pub analysis: AnalysisConfig,
    /// Largest accepted input file in bytes.
    pub max_file_size: u64,
    /// Per-document timeout applied by the batch processor.
    pub processing_timeout_secs: u64,
    /// Directory for `<stem>_metadata.json` and batch summaries.
    pub output_dir: PathBuf,
    /// Documents processed in parallel; 1 is sequential.
    pub concurrency: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            analysis: AnalysisConfig::default(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            processing_timeout_secs: DEFAULT_PROCESSING_TIMEOUT_SECS,
            output_dir: default_output_dir(),
            concurrency: 1,
        }
    }
}

/// `~/.docmeta/output`, or `.docmeta/output` when there is no home directory.
pub fn default_output_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".docmeta"))
        .unwrap_or_else(|| PathBuf::from(".docmeta"))
        .join("output")
}

impl GeneratorConfig {
    /// Load configuration from a file (TOML, JSON, or YAML).
    pub fn from_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        match ext {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| DocmetaError::Configuration(e.to_string()))
            }
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| DocmetaError::Configuration(e.to_string())),
            Some("yaml" | "yml") => serde_yaml::from_str(&content)
                .map_err(|e| DocmetaError::Configuration(e.to_string())),
            _ => Err(DocmetaError::Configuration(
                "Unsupported config file format. Use .toml, .json, or .yaml".to_string(),
            )),
        }
    }

    /// Load configuration from `DOCMETA_*` environment variables, reading a
    /// `.env` file first when one is present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::default().apply_env(|key| std::env::var(key).ok())
    }

    /// Overlay variables from `lookup` onto this configuration.
    ///
    /// Unparseable numeric values are logged and ignored.
    pub fn apply_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: std::str::FromStr>(key: &str, value: Option<String>) -> Option<T> {
            let value = value?;
            match value.trim().parse() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(variable = key, value = %value, "Ignoring invalid environment value");
                    None
                }
            }
        }

        if let Some(v) = parsed("DOCMETA_MAX_FILE_SIZE", lookup("DOCMETA_MAX_FILE_SIZE")) {
            self.max_file_size = v;
        }
        if let Some(v) = parsed("DOCMETA_PROCESSING_TIMEOUT", lookup("DOCMETA_PROCESSING_TIMEOUT")) {
            self.processing_timeout_secs = v;
        }
        if let Some(v) = parsed::<usize>("DOCMETA_CONCURRENCY", lookup("DOCMETA_CONCURRENCY")) {
            self.concurrency = v.max(1);
        }
        if let Some(dir) = lookup("DOCMETA_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(model) = lookup("DOCMETA_MODEL") {
            self.analysis.model = model;
        }
        if let Some(v) = parsed("DOCMETA_MAX_KEYWORDS", lookup("DOCMETA_MAX_KEYWORDS")) {
            self.analysis.max_keywords = v;
        }
        if let Some(v) = parsed("DOCMETA_MAX_ENTITIES", lookup("DOCMETA_MAX_ENTITIES")) {
            self.analysis.max_entities = v;
        }
        if let Some(v) = parsed("DOCMETA_SUMMARY_SENTENCES", lookup("DOCMETA_SUMMARY_SENTENCES")) {
            self.analysis.summary_sentences = v;
        }
        if let Some(languages) = lookup("DOCMETA_OCR_LANGUAGES") {
            let languages: Vec<String> = languages
                .split(['+', ','])
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from)
                .collect();
            if !languages.is_empty() {
                self.extraction.ocr_languages = languages;
            }
        }

        self
    }

    /// Processing timeout as a [`Duration`].
    pub fn processing_timeout(&self) -> Duration {
        Duration::from_secs(self.processing_timeout_secs)
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the batch concurrency (at least 1).
    pub fn with_concurrency(mut self, jobs: usize) -> Self {
        self.concurrency = jobs.max(1);
        self
    }

    /// Set the maximum input size in bytes.
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Set the analysis configuration.
    pub fn with_analysis(mut self, analysis: AnalysisConfig) -> Self {
        self.analysis = analysis;
        self
    }

    /// Set the extraction configuration.
    pub fn with_extraction(mut self, extraction: ExtractionConfig) -> Self {
        self.extraction = extraction;
        self
    }
}
