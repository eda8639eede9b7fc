//! Supported-format table.

use std::path::Path;

use docmeta_extractors::IMAGE_EXTENSIONS;
use serde::Serialize;

/// Label for extensions missing from the table.
pub const UNKNOWN_DOCUMENT: &str = "Unknown Document";

/// One supported extension and its document-type label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatEntry {
    /// Lowercase extension with leading dot.
    pub extension: String,
    pub label: String,
}

/// Ordered table of the extensions the processor accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportedFormats {
    entries: Vec<FormatEntry>,
}

impl Default for SupportedFormats {
    fn default() -> Self {
        let mut table = Self::documents_only();
        for ext in IMAGE_EXTENSIONS {
            table = table.with_format(format!(".{}", ext), format!("{} Image (OCR)", ext.to_uppercase()));
        }
        table
    }
}

impl SupportedFormats {
    /// The office-document formats without raster images.
    pub fn documents_only() -> Self {
        let entries = [
            (".pdf", "PDF Document"),
            (".docx", "Word Document"),
            (".txt", "Text Document"),
            (".doc", "Word Document (Legacy)"),
            (".rtf", "Rich Text Format"),
        ]
        .into_iter()
        .map(|(extension, label)| FormatEntry {
            extension: extension.to_string(),
            label: label.to_string(),
        })
        .collect();

        Self { entries }
    }

    /// Add or relabel a format; `extension` may omit the dot.
    pub fn with_format(mut self, extension: impl AsRef<str>, label: impl Into<String>) -> Self {
        let extension = normalize_extension(extension.as_ref());
        let label = label.into();
        match self.entries.iter_mut().find(|e| e.extension == extension) {
            Some(entry) => entry.label = label,
            None => self.entries.push(FormatEntry { extension, label }),
        }
        self
    }

    /// Label for `extension` (with or without dot, any case).
    pub fn label(&self, extension: &str) -> Option<&str> {
        let extension = normalize_extension(extension);
        self.entries
            .iter()
            .find(|e| e.extension == extension)
            .map(|e| e.label.as_str())
    }

    /// Label for `extension`, or [`UNKNOWN_DOCUMENT`].
    pub fn document_type(&self, extension: &str) -> &str {
        self.label(extension).unwrap_or(UNKNOWN_DOCUMENT)
    }

    pub fn is_supported(&self, extension: &str) -> bool {
        self.label(extension).is_some()
    }

    /// Whether the file at `path` has a supported extension.
    pub fn supports_path(&self, path: &Path) -> bool {
        self.is_supported(&extension_of(path))
    }

    pub fn entries(&self) -> &[FormatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lowercase extension of `path` with a leading dot, or an empty string.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default()
}

fn normalize_extension(extension: &str) -> String {
    let lower = extension.to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{}", lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_table_order() {
        let formats = SupportedFormats::documents_only();
        let extensions: Vec<&str> = formats.entries().iter().map(|e| e.extension.as_str()).collect();
        assert_eq!(extensions, vec![".pdf", ".docx", ".txt", ".doc", ".rtf"]);
        assert_eq!(formats.document_type(".doc"), "Word Document (Legacy)");
    }

    #[test]
    fn test_lookup_is_case_and_dot_insensitive() {
        let formats = SupportedFormats::default();
        assert_eq!(formats.label("PDF"), Some("PDF Document"));
        assert_eq!(formats.label(".TXT"), Some("Text Document"));
        assert_eq!(formats.document_type(".xyz"), UNKNOWN_DOCUMENT);
        assert!(formats.is_supported(".png"));
        assert_eq!(formats.label(".png"), Some("PNG Image (OCR)"));
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Path::new("/tmp/Report.PDF")), ".pdf");
        assert_eq!(extension_of(Path::new("README")), "");
        assert!(SupportedFormats::default().supports_path(Path::new("notes.txt")));
    }

    #[test]
    fn test_with_format_relabels() {
        let formats = SupportedFormats::documents_only().with_format("rtf", "RTF");
        assert_eq!(formats.len(), 5);
        assert_eq!(formats.label(".rtf"), Some("RTF"));
    }
}
