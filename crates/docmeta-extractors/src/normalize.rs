//! Whitespace and printable-character cleanup for extracted text.

/// Normalize extracted text.
///
/// Drops non-printable characters, collapses every whitespace run into a
/// single space and trims the ends. Non-printables go first so that removing
/// one between two spaces cannot leave a double space behind, which keeps
/// `normalize(normalize(t)) == normalize(t)`.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let printable: String = text
        .chars()
        .filter(|c| c.is_whitespace() || is_printable(*c))
        .collect();

    printable.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether a non-whitespace character should survive normalization.
fn is_printable(c: char) -> bool {
    !c.is_control() && !is_format_char(c)
}

/// Invisible Unicode format characters that PDF and DOCX text layers leak.
fn is_format_char(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'
            | '\u{061C}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
    )
}
