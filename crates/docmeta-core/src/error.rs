//! Error types for docmeta operations.
//!
//! Pipeline stages report failures inside their result records; these errors
//! cover the collaborators around them (validation, configuration,
//! persistence and batch processing), each with a stable code and, where it
//! helps, a suggestion for the user.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for docmeta operations.
pub type CoreResult<T> = Result<T, DocmetaError>;

/// Main error type for docmeta-core.
#[derive(Error, Debug)]
pub enum DocmetaError {
    /// Input path does not exist.
    #[error("File does not exist: {}", path.display())]
    NotFound { path: PathBuf, code: ErrorCode },

    /// Input path exists but is not a regular file.
    #[error("Path is not a file: {}", path.display())]
    NotAFile { path: PathBuf, code: ErrorCode },

    /// Input file exceeds the configured size limit.
    #[error("File too large: {size} bytes > {max} bytes")]
    FileTooLarge { size: u64, max: u64, code: ErrorCode },

    /// Extension missing from the supported-format table.
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat { extension: String, code: ErrorCode },

    /// Directory argument is missing or not a directory.
    #[error("Invalid directory path: {}", path.display())]
    InvalidDirectory { path: PathBuf, code: ErrorCode },

    /// Processing exceeded the per-document timeout.
    #[error("Processing timed out after {seconds}s: {}", path.display())]
    Timeout { path: PathBuf, seconds: u64, code: ErrorCode },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Validation (VAL_xxx)
    ValFileNotFound,
    ValNotAFile,
    ValFileTooLarge,
    ValUnsupportedFormat,
    ValInvalidDirectory,

    // Processing (PROC_xxx)
    ProcTimeout,

    // Configuration (CFG_xxx)
    CfgInvalid,

    // Persistence (IO_xxx)
    IoFailed,
    IoSerialization,

    // Internal
    Internal,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValFileNotFound => "VAL_001",
            ErrorCode::ValNotAFile => "VAL_002",
            ErrorCode::ValFileTooLarge => "VAL_003",
            ErrorCode::ValUnsupportedFormat => "VAL_004",
            ErrorCode::ValInvalidDirectory => "VAL_005",
            ErrorCode::ProcTimeout => "PROC_001",
            ErrorCode::CfgInvalid => "CFG_001",
            ErrorCode::IoFailed => "IO_001",
            ErrorCode::IoSerialization => "IO_002",
            ErrorCode::Internal => "INT_001",
        }
    }
}

impl DocmetaError {
    /// Create a not-found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound {
            path: path.into(),
            code: ErrorCode::ValFileNotFound,
        }
    }

    /// Create a not-a-file error.
    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::NotAFile {
            path: path.into(),
            code: ErrorCode::ValNotAFile,
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(size: u64, max: u64) -> Self {
        Self::FileTooLarge {
            size,
            max,
            code: ErrorCode::ValFileTooLarge,
        }
    }

    /// Create an unsupported-format error; `extension` includes the dot.
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
            code: ErrorCode::ValUnsupportedFormat,
        }
    }

    /// Create an invalid-directory error.
    pub fn invalid_directory(path: impl Into<PathBuf>) -> Self {
        Self::InvalidDirectory {
            path: path.into(),
            code: ErrorCode::ValInvalidDirectory,
        }
    }

    /// Create a timeout error.
    pub fn timeout(path: impl Into<PathBuf>, seconds: u64) -> Self {
        Self::Timeout {
            path: path.into(),
            seconds,
            code: ErrorCode::ProcTimeout,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { code, .. } => *code,
            Self::NotAFile { code, .. } => *code,
            Self::FileTooLarge { code, .. } => *code,
            Self::UnsupportedFormat { code, .. } => *code,
            Self::InvalidDirectory { code, .. } => *code,
            Self::Timeout { code, .. } => *code,
            Self::Configuration(_) => ErrorCode::CfgInvalid,
            Self::Io(_) => ErrorCode::IoFailed,
            Self::Serialization(_) => ErrorCode::IoSerialization,
            Self::Internal(_) => ErrorCode::Internal,
        }
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::NotFound { .. } => Some("Check the path and ensure the file exists"),
            Self::FileTooLarge { .. } => Some("Raise max_file_size or split the document"),
            Self::UnsupportedFormat { .. } => {
                Some("Run `docmeta formats` to see supported formats")
            }
            Self::Timeout { .. } => Some("Raise processing_timeout_secs for large documents"),
            Self::Configuration(_) => Some("Use a .toml, .json, or .yaml configuration file"),
            _ => None,
        }
    }
}
