//! Enrichment result types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A ranked keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// Lower-cased (and, on the linguistic path, lemmatized) word.
    pub word: String,
    /// Occurrences among candidate tokens.
    pub frequency: usize,
    /// `frequency / candidate count`.
    pub relevance_score: f64,
}

/// Named-entity labels produced by the rule-based recognizer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum EntityLabel {
    Person,
    Org,
    Gpe,
    Date,
    Time,
    Money,
    Percent,
}

impl EntityLabel {
    /// Human-readable label description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Person => "People, including fictional",
            Self::Org => "Companies, agencies, institutions, etc.",
            Self::Gpe => "Countries, cities, states",
            Self::Date => "Absolute or relative dates or periods",
            Self::Time => "Times smaller than a day",
            Self::Money => "Monetary values, including unit",
            Self::Percent => "Percentage, including \"%\"",
        }
    }
}

/// A recognized named entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Surface text.
    pub text: String,
    /// Entity label.
    pub label: EntityLabel,
    /// Label description.
    pub description: String,
    /// Start character offset in the analyzed text.
    pub start: usize,
    /// End character offset (exclusive).
    pub end: usize,
    /// Rule confidence in `[0, 1]`.
    pub confidence: f64,
}

/// Coarse document sentiment.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

/// Surface statistics of the analyzed text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStatistics {
    pub sentence_count: usize,
    pub word_count: usize,
    pub character_count: usize,
    pub character_count_no_spaces: usize,
    pub paragraph_count: usize,
    pub average_words_per_sentence: f64,
    pub average_characters_per_word: f64,
}

/// What a language backend contributes to an enrichment result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinguisticFeatures {
    pub keywords: Vec<Keyword>,
    pub entities: Vec<Entity>,
    pub summary: String,
    pub topics: Vec<String>,
    pub sentiment: Sentiment,
}

/// Full semantic enrichment of one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentResult {
    pub keywords: Vec<Keyword>,
    pub entities: Vec<Entity>,
    pub summary: String,
    pub language: String,
    pub topics: Vec<String>,
    pub sentiment: Sentiment,
    /// Flesch reading ease, clamped to `[0, 100]`.
    pub readability_score: f64,
    pub text_statistics: TextStatistics,
    /// Backend that produced the linguistic features.
    pub analysis_backend: String,
}

impl EnrichmentResult {
    /// Zero-valued result for blank input.
    pub fn empty(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            analysis_backend: "none".to_string(),
            ..Default::default()
        }
    }

    /// Whether any entity carries `label`.
    pub fn has_entity(&self, label: EntityLabel) -> bool {
        self.entities.iter().any(|e| e.label == label)
    }
}
