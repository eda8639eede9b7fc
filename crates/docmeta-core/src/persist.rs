//! JSON persistence for metadata records and batch summaries.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::CoreResult;
use crate::types::MetadataRecord;

/// Write `value` as pretty JSON, creating parent directories.
pub fn save_metadata<T: Serialize + ?Sized>(value: &T, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), "Metadata written");
    Ok(())
}

/// Read a record written by [`save_metadata`].
pub fn load_metadata(path: &Path) -> CoreResult<MetadataRecord> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// `<output_dir>/<stem>_metadata.json`.
pub fn metadata_path(output_dir: &Path, document: &Path) -> PathBuf {
    let stem = document
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    output_dir.join(format!("{}_metadata.json", stem))
}

/// `<output_dir>/batch_summary_<dirname>.json`.
pub fn batch_summary_path(output_dir: &Path, directory: &Path) -> PathBuf {
    let name = directory
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .or_else(|| {
            fs::canonicalize(directory)
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| "root".to_string());
    output_dir.join(format!("batch_summary_{}.json", name))
}
