//! Error types for semantic analysis.

use thiserror::Error;

/// Errors raised by language backends.
///
/// The [`crate::SemanticAnalyzer`] never returns these; it logs them and
/// switches to the frequency fallback.
#[derive(Error, Debug)]
pub enum NlpError {
    /// Requested linguistic model is not known.
    #[error("Could not load language model: {0}")]
    ModelNotFound(String),

    /// Backend failed while processing text.
    #[error("Analysis failed: {0}")]
    Analysis(String),
}

impl NlpError {
    /// Create an analysis error.
    pub fn analysis(msg: impl Into<String>) -> Self {
        Self::Analysis(msg.into())
    }
}

/// Result type for backend operations.
pub type NlpResult<T> = Result<T, NlpError>;
