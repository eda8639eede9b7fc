//! Title, description and reading-time text.

use docmeta_nlp::EnrichmentResult;

use crate::types::DocumentInfo;

pub const UNTITLED: &str = "Untitled Document";
const MAX_SUMMARY_TITLE_CHARS: usize = 100;
const MIN_DESCRIPTION_SUMMARY_CHARS: usize = 20;
const WORDS_PER_MINUTE: f64 = 225.0;

/// A title source: returns a title when it can make one.
pub type TitleStrategy = fn(&DocumentInfo, &EnrichmentResult) -> Option<String>;

/// Title sources in priority order.
pub static TITLE_STRATEGIES: &[(&str, TitleStrategy)] = &[
    ("file stem", title_from_stem),
    ("summary", title_from_summary),
    ("keywords", title_from_keywords),
];

/// First letter upper-cased, the rest lower-cased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Stems longer than three characters, with `_` and `-` as word breaks.
pub fn title_from_stem(info: &DocumentInfo, _: &EnrichmentResult) -> Option<String> {
    if info.file_stem.chars().count() <= 3 {
        return None;
    }
    let spaced = info.file_stem.replace(['_', '-'], " ");
    let title = spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");
    (!title.is_empty()).then_some(title)
}

/// Summary text before its first period, when short enough.
pub fn title_from_summary(_: &DocumentInfo, enrichment: &EnrichmentResult) -> Option<String> {
    let first = enrichment.summary.split('.').next()?.trim();
    (!first.is_empty() && first.chars().count() < MAX_SUMMARY_TITLE_CHARS).then(|| first.to_string())
}

/// Top three keywords, capitalized.
pub fn title_from_keywords(_: &DocumentInfo, enrichment: &EnrichmentResult) -> Option<String> {
    if enrichment.keywords.is_empty() {
        return None;
    }
    Some(
        enrichment
            .keywords
            .iter()
            .take(3)
            .map(|k| capitalize(&k.word))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

pub fn resolve_title(info: &DocumentInfo, enrichment: &EnrichmentResult) -> String {
    TITLE_STRATEGIES
        .iter()
        .find_map(|(_, strategy)| strategy(info, enrichment))
        .unwrap_or_else(|| UNTITLED.to_string())
}

pub fn describe(enrichment: &EnrichmentResult) -> String {
    if enrichment.summary.chars().count() > MIN_DESCRIPTION_SUMMARY_CHARS {
        return enrichment.summary.clone();
    }

    let topics: Vec<&str> = enrichment.topics.iter().take(3).map(String::as_str).collect();
    let keywords: Vec<&str> = enrichment.keywords.iter().take(5).map(|k| k.word.as_str()).collect();

    let mut parts = Vec::new();
    if !topics.is_empty() {
        parts.push(format!("This document discusses {}.", topics.join(", ")));
    }
    if !keywords.is_empty() {
        parts.push(format!("Key themes include {}.", keywords.join(", ")));
    }

    if parts.is_empty() {
        "Document content analysis completed.".to_string()
    } else {
        parts.join(" ")
    }
}

/// Reading time at 225 words per minute.
pub fn reading_time(word_count: usize) -> String {
    if word_count == 0 {
        return "0 minutes".to_string();
    }

    let minutes = ((word_count as f64 / WORDS_PER_MINUTE).round() as u64).max(1);
    if minutes == 1 {
        return "1 minute".to_string();
    }
    if minutes < 60 {
        return format!("{} minutes", minutes);
    }

    let hours = minutes / 60;
    match minutes % 60 {
        0 if hours == 1 => "1 hour".to_string(),
        0 => format!("{} hours", hours),
        rest => format!("{}h {}m", hours, rest),
    }
}
