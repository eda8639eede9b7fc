//! Word-boundary tokenizer with byte offsets.
//!
//! Segments on Unicode word boundaries, then splits English clitics
//! (`company's` becomes `company` + `'s`, `don't` becomes `do` + `n't`).

use unicode_segmentation::UnicodeSegmentation;

/// Coarse token class derived from the characters it contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Number,
    Punct,
    Symbol,
    Space,
}

/// A token and its byte span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    fn new(text: &'a str, start: usize) -> Self {
        Self {
            text,
            start,
            end: start + text.len(),
            kind: classify(text),
        }
    }

    /// Whether this token carries letters or digits.
    pub fn is_wordlike(&self) -> bool {
        matches!(self.kind, TokenKind::Word | TokenKind::Number)
    }
}

const SYMBOLS: &str = "$€£¥%+=<>^|~#@&*©®™°§";
const CLITICS: &[&str] = &["n't", "'s", "'re", "'ll", "'ve", "'d", "'m"];

fn classify(text: &str) -> TokenKind {
    if text.chars().all(char::is_whitespace) {
        TokenKind::Space
    } else if text.chars().any(char::is_alphabetic) {
        TokenKind::Word
    } else if text.chars().any(|c| c.is_ascii_digit() || c.is_numeric()) {
        TokenKind::Number
    } else if text.chars().all(|c| SYMBOLS.contains(c)) {
        TokenKind::Symbol
    } else {
        TokenKind::Punct
    }
}

/// Split a trailing clitic off a word segment, returning the split point.
fn clitic_split(word: &str) -> Option<usize> {
    let folded = word.to_lowercase().replace('\u{2019}', "'");
    // Byte lengths match after folding only when no curly apostrophe is present
    if folded.len() != word.len() {
        let curly_offset = word.rfind('\u{2019}')?;
        let clitic = folded.get(curly_offset..)?;
        return match clitic {
            "'s" | "'re" | "'ll" | "'ve" | "'d" | "'m" if curly_offset > 0 => Some(curly_offset),
            _ => None,
        };
    }

    CLITICS.iter().find_map(|clitic| {
        folded
            .strip_suffix(clitic)
            .filter(|stem| !stem.is_empty() && stem.chars().any(char::is_alphabetic))
            .map(str::len)
    })
}

/// Tokenize `text` into word, number, punctuation, symbol and space tokens.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();

    for (start, segment) in text.split_word_bound_indices() {
        if classify(segment) == TokenKind::Word {
            if let Some(split) = clitic_split(segment) {
                tokens.push(Token::new(&segment[..split], start));
                tokens.push(Token::new(&segment[split..], start + split));
                continue;
            }
        }
        tokens.push(Token::new(segment, start));
    }

    tokens
}
