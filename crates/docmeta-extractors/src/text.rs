//! Plain-text extraction with an ordered encoding fallback.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ExtractError, ExtractResult};
use crate::normalize::normalize;
use crate::types::RawExtraction;
use crate::Extractor;

/// Character encodings tried when reading plain-text files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextEncoding {
    /// UTF-8 (a leading BOM is dropped by normalization).
    #[serde(rename = "utf-8")]
    Utf8,
    /// UTF-16 with a byte-order mark, either endianness.
    #[serde(rename = "utf-16")]
    Utf16,
    /// ISO-8859-1; every byte maps to a code point, so it never fails.
    #[serde(rename = "latin-1")]
    Latin1,
    /// Windows-1252; fails on the five undefined bytes in 0x80..=0x9F.
    #[serde(rename = "cp1252")]
    Cp1252,
}

impl TextEncoding {
    /// The default candidate order.
    pub fn default_order() -> Vec<TextEncoding> {
        vec![Self::Utf8, Self::Utf16, Self::Latin1, Self::Cp1252]
    }

    /// Encoding label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16 => "utf-16",
            Self::Latin1 => "latin-1",
            Self::Cp1252 => "cp1252",
        }
    }

    /// Decode bytes, returning `None` if they are not valid in this encoding.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            Self::Utf16 => decode_utf16(bytes),
            Self::Latin1 => Some(bytes.iter().map(|&b| b as char).collect()),
            Self::Cp1252 => bytes.iter().map(|&b| cp1252_char(b)).collect(),
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn decode_utf16(bytes: &[u8]) -> Option<String> {
    let (little_endian, body) = match bytes {
        [0xFF, 0xFE, rest @ ..] => (true, rest),
        [0xFE, 0xFF, rest @ ..] => (false, rest),
        _ => return None,
    };
    if body.len() % 2 != 0 {
        return None;
    }

    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|pair| {
            if little_endian {
                u16::from_le_bytes([pair[0], pair[1]])
            } else {
                u16::from_be_bytes([pair[0], pair[1]])
            }
        })
        .collect();

    String::from_utf16(&units).ok()
}

fn cp1252_char(byte: u8) -> Option<char> {
    let c = match byte {
        0x80 => '\u{20AC}',
        0x82 => '\u{201A}',
        0x83 => '\u{0192}',
        0x84 => '\u{201E}',
        0x85 => '\u{2026}',
        0x86 => '\u{2020}',
        0x87 => '\u{2021}',
        0x88 => '\u{02C6}',
        0x89 => '\u{2030}',
        0x8A => '\u{0160}',
        0x8B => '\u{2039}',
        0x8C => '\u{0152}',
        0x8E => '\u{017D}',
        0x91 => '\u{2018}',
        0x92 => '\u{2019}',
        0x93 => '\u{201C}',
        0x94 => '\u{201D}',
        0x95 => '\u{2022}',
        0x96 => '\u{2013}',
        0x97 => '\u{2014}',
        0x98 => '\u{02DC}',
        0x99 => '\u{2122}',
        0x9A => '\u{0161}',
        0x9B => '\u{203A}',
        0x9C => '\u{0153}',
        0x9E => '\u{017E}',
        0x9F => '\u{0178}',
        0x81 | 0x8D | 0x8F | 0x90 | 0x9D => return None,
        other => other as char,
    };
    Some(c)
}

/// Plain-text extractor.
///
/// Tries each configured encoding in order; the first that decodes wins.
#[derive(Debug, Clone)]
pub struct TextExtractor {
    encodings: Vec<TextEncoding>,
}

impl TextExtractor {
    /// Create a text extractor with the default encoding order.
    pub fn new() -> Self {
        Self::with_encodings(TextEncoding::default_order())
    }

    /// Create a text extractor with a custom encoding order.
    pub fn with_encodings(encodings: Vec<TextEncoding>) -> Self {
        Self { encodings }
    }

    /// Encodings in the order they are tried.
    pub fn encodings(&self) -> &[TextEncoding] {
        &self.encodings
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for TextExtractor {
    fn extract(&self, content: &[u8]) -> ExtractResult<RawExtraction> {
        for encoding in &self.encodings {
            if let Some(decoded) = encoding.decode(content) {
                debug!(encoding = %encoding, bytes = content.len(), "Decoded text file");
                return Ok(RawExtraction::new(normalize(&decoded), 1, "direct_text_read"));
            }
        }

        let tried = self
            .encodings
            .iter()
            .map(TextEncoding::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        Err(ExtractError::Decoding(tried))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn name(&self) -> &str {
        "text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8() {
        let result = TextExtractor::new()
            .extract("Grüße aus  Köln\n".as_bytes())
            .unwrap();
        assert_eq!(result.text, "Grüße aus Köln");
        assert_eq!(result.page_count, 1);
        assert_eq!(result.method, "direct_text_read");
    }

    #[test]
    fn test_utf8_bom_is_dropped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"hello");
        let result = TextExtractor::new().extract(&bytes).unwrap();
        assert_eq!(result.text, "hello");
    }

    #[test]
    fn test_utf16_with_bom() {
        let mut le = vec![0xFF, 0xFE];
        for unit in "naïve text".encode_utf16() {
            le.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(TextExtractor::new().extract(&le).unwrap().text, "naïve text");

        let mut be = vec![0xFE, 0xFF];
        for unit in "big end".encode_utf16() {
            be.extend_from_slice(&unit.to_be_bytes());
        }
        assert_eq!(TextExtractor::new().extract(&be).unwrap().text, "big end");
    }

    #[test]
    fn test_latin1_fallback() {
        let bytes = b"caf\xe9 cr\xe8me";
        let result = TextExtractor::new().extract(bytes).unwrap();
        assert_eq!(result.text, "café crème");
    }

    #[test]
    fn test_cp1252_when_ordered_first() {
        let extractor = TextExtractor::with_encodings(vec![TextEncoding::Cp1252]);
        let result = extractor.extract(b"\x93quoted\x94 \x80 5").unwrap();
        assert_eq!(result.text, "\u{201C}quoted\u{201D} \u{20AC} 5");
    }

    #[test]
    fn test_cp1252_rejects_undefined_bytes() {
        assert!(TextEncoding::Cp1252.decode(b"bad \x81 byte").is_none());
    }

    #[test]
    fn test_all_encodings_fail() {
        let extractor = TextExtractor::with_encodings(vec![TextEncoding::Utf8, TextEncoding::Utf16]);
        let err = extractor.extract(b"\xff\xff\xff").unwrap_err();
        assert!(matches!(err, ExtractError::Decoding(_)));
        assert!(err.to_string().contains("utf-8, utf-16"));
    }

    #[test]
    fn test_utf16_requires_bom_and_even_length() {
        assert!(TextEncoding::Utf16.decode(b"ab").is_none());
        assert!(TextEncoding::Utf16.decode(&[0xFF, 0xFE, 0x41]).is_none());
    }

    #[test]
    fn test_round_trip_through_supported_encodings() {
        let original = "The quick brown fox\n\njumps over the lazy dog.";
        let expected = normalize(original);

        let utf8 = original.as_bytes().to_vec();
        let mut utf16 = vec![0xFF, 0xFE];
        for unit in original.encode_utf16() {
            utf16.extend_from_slice(&unit.to_le_bytes());
        }

        for bytes in [utf8, utf16] {
            let result = TextExtractor::new().extract(&bytes).unwrap();
            assert_eq!(result.text, expected);
        }
    }

    #[test]
    fn test_supports_txt_only() {
        let extractor = TextExtractor::new();
        assert!(extractor.supports("txt"));
        assert!(!extractor.supports("pdf"));
    }
}
