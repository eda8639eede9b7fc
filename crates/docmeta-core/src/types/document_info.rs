//! Per-file document information.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::CoreResult;
use crate::formats::{extension_of, SupportedFormats};

const HASH_CHUNK_SIZE: usize = 4096;
const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// File-level facts computed once at pipeline entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub filename: String,
    pub file_stem: String,
    /// Absolute path.
    pub file_path: String,
    /// Lowercase extension with leading dot.
    pub file_extension: String,
    pub file_size_bytes: u64,
    /// Size in MB rounded to two decimals.
    pub file_size_mb: f64,
    /// SHA-256 of the file contents, lowercase hex.
    pub file_hash: String,
    /// Creation time where the platform exposes it.
    pub created_date: Option<DateTime<Utc>>,
    pub modified_date: Option<DateTime<Utc>>,
    pub mime_type: String,
    /// Label from the supported-format table.
    pub document_type: String,
}

impl DocumentInfo {
    /// Stat and hash the file at `path`.
    pub fn from_path(path: &Path, formats: &SupportedFormats) -> CoreResult<Self> {
        let metadata = std::fs::metadata(path)?;
        let absolute = std::fs::canonicalize(path)?;
        let extension = extension_of(path);

        Ok(Self {
            file_hash: file_hash(path)?,
            file_path: absolute.display().to_string(),
            file_size_bytes: metadata.len(),
            file_size_mb: size_in_mb(metadata.len()),
            created_date: metadata.created().ok().map(DateTime::<Utc>::from),
            modified_date: metadata.modified().ok().map(DateTime::<Utc>::from),
            mime_type: mime_type(path),
            document_type: formats.document_type(&extension).to_string(),
            file_extension: extension,
            ..Self::placeholder(path, formats)
        })
    }

    /// Name-only information for a file that could not be read.
    pub fn placeholder(path: &Path, formats: &SupportedFormats) -> Self {
        let extension = extension_of(path);
        Self {
            filename: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            file_stem: path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            file_path: path.display().to_string(),
            file_size_bytes: 0,
            file_size_mb: 0.0,
            file_hash: String::new(),
            created_date: None,
            modified_date: None,
            mime_type: mime_type(path),
            document_type: formats.document_type(&extension).to_string(),
            file_extension: extension,
        }
    }
}

/// SHA-256 of the file, streamed in 4 KiB chunks.
pub fn file_hash(path: &Path) -> CoreResult<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; HASH_CHUNK_SIZE];

    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

fn size_in_mb(bytes: u64) -> f64 {
    (bytes as f64 / BYTES_PER_MB * 100.0).round() / 100.0
}

fn mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
        .to_string()
}
