//! Input checks run before a document enters the pipeline.

use std::path::Path;

use crate::error::{CoreResult, DocmetaError};
use crate::formats::{extension_of, SupportedFormats};

/// Check that `path` is an existing regular file of at most `max_size` bytes.
pub fn validate_file(path: &Path, max_size: u64) -> CoreResult<()> {
    if !path.exists() {
        return Err(DocmetaError::not_found(path));
    }
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(DocmetaError::not_a_file(path));
    }
    if metadata.len() > max_size {
        return Err(DocmetaError::file_too_large(metadata.len(), max_size));
    }
    Ok(())
}

/// Check that the extension of `path` is in `formats`.
pub fn validate_format(path: &Path, formats: &SupportedFormats) -> CoreResult<()> {
    let extension = extension_of(path);
    if formats.is_supported(&extension) {
        Ok(())
    } else {
        Err(DocmetaError::unsupported_format(extension))
    }
}

pub fn validate_directory(path: &Path) -> CoreResult<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(DocmetaError::invalid_directory(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_validate_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, "0123456789").unwrap();

        assert!(validate_file(&file, 10).is_ok());
        assert_eq!(
            validate_file(&file, 9).unwrap_err().code(),
            ErrorCode::ValFileTooLarge
        );
        assert_eq!(
            validate_file(&dir.path().join("missing.txt"), 10).unwrap_err().code(),
            ErrorCode::ValFileNotFound
        );
        assert_eq!(
            validate_file(dir.path(), 10).unwrap_err().code(),
            ErrorCode::ValNotAFile
        );
    }

    #[test]
    fn test_validate_format() {
        let formats = SupportedFormats::default();
        assert!(validate_format(Path::new("report.PDF"), &formats).is_ok());
        let err = validate_format(Path::new("archive.zip"), &formats).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported file format: .zip");
    }

    #[test]
    fn test_validate_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_directory(dir.path()).is_ok());
        assert_eq!(
            validate_directory(&dir.path().join("nope")).unwrap_err().code(),
            ErrorCode::ValInvalidDirectory
        );
    }
}
