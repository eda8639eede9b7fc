//! The full linguistic backend built on the in-crate pipeline.

use std::collections::HashSet;

use tracing::debug;

use crate::backend::LanguageBackend;
use crate::config::AnalysisConfig;
use crate::doc::{AnalyzedToken, Doc};
use crate::error::NlpResult;
use crate::keywords::rank_keywords;
use crate::ner;
use crate::types::{Entity, Keyword, LinguisticFeatures};
use crate::{lemmatizer, sentences, sentiment, stats, stopwords, tagger};

/// Sentences at or below this trimmed length never enter a summary.
const MIN_SUMMARY_SENTENCE_CHARS: usize = 20;
const MAX_TOPICS: usize = 10;
const MAX_TOPIC_WORDS: usize = 3;

/// Rule-based English analysis: tagging, lemmas, noun chunks and entities.
#[derive(Debug, Clone, Copy)]
pub struct RuleBasedBackend;

impl RuleBasedBackend {
    /// Build the backend, forcing lexicon and pattern initialization now
    /// rather than on the first document.
    pub fn new() -> Self {
        stopwords::warm_up();
        tagger::warm_up();
        lemmatizer::warm_up();
        sentences::warm_up();
        ner::warm_up();
        sentiment::warm_up();
        stats::warm_up();
        Self
    }

    fn keywords(&self, doc: &Doc<'_>, limit: usize) -> Vec<Keyword> {
        let candidates = doc
            .tokens
            .iter()
            .filter(|t| is_lexical(t) && t.pos.is_content())
            .map(|t| t.lemma.to_lowercase());
        rank_keywords(candidates, limit)
    }

    fn entities(&self, doc: &Doc<'_>, limit: usize) -> Vec<Entity> {
        let mut seen = HashSet::new();
        let mut entities: Vec<Entity> = doc
            .entities
            .iter()
            .filter(|span| seen.insert((span.text.to_lowercase(), span.label)))
            .map(|span| Entity {
                text: span.text.clone(),
                label: span.label,
                description: span.label.description().to_string(),
                start: ner::char_offset(doc.text, span.start),
                end: ner::char_offset(doc.text, span.end),
                confidence: span.confidence,
            })
            .collect();

        entities.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        entities.truncate(limit);
        entities
    }

    fn summary(&self, doc: &Doc<'_>, target: usize) -> String {
        let sentences: Vec<&str> = doc
            .sentence_texts()
            .map(str::trim)
            .filter(|s| s.chars().count() > MIN_SUMMARY_SENTENCE_CHARS)
            .collect();

        if sentences.len() <= target {
            return sentences.join(" ");
        }

        let lemmas: HashSet<String> = doc
            .tokens
            .iter()
            .filter(|t| is_lexical(t))
            .map(|t| t.lemma.to_lowercase())
            .collect();

        let mut scored: Vec<(&str, f64)> = sentences
            .iter()
            .map(|sentence| {
                let words: Vec<String> = sentence.to_lowercase().split_whitespace().map(String::from).collect();
                let hits = words.iter().filter(|w| lemmas.contains(w.as_str())).count();
                let score = if words.is_empty() {
                    0.0
                } else {
                    hits as f64 / words.len() as f64
                };
                (*sentence, score)
            })
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored
            .into_iter()
            .take(target)
            .map(|(sentence, _)| sentence)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn topics(&self, doc: &Doc<'_>) -> Vec<String> {
        let chunks = doc
            .noun_chunks()
            .into_iter()
            .filter(|chunk| {
                chunk.text.split_whitespace().count() <= MAX_TOPIC_WORDS
                    && !doc.tokens[chunk.root].is_stop
            })
            .map(|chunk| chunk.text.trim().to_string());

        let nouns = doc
            .tokens
            .iter()
            .filter(|t| t.pos == tagger::PosTag::Noun && !t.is_stop && t.text.chars().count() > 3)
            .map(|t| t.text.to_string());

        let mut seen = HashSet::new();
        chunks
            .chain(nouns)
            .filter(|topic| seen.insert(topic.clone()))
            .take(MAX_TOPICS)
            .collect()
    }
}

impl Default for RuleBasedBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Not a stop word, punctuation or whitespace, and longer than two characters.
fn is_lexical(token: &AnalyzedToken<'_>) -> bool {
    !token.is_stop && !token.is_punct && !token.is_space && token.text.chars().count() > 2
}

impl LanguageBackend for RuleBasedBackend {
    fn name(&self) -> &'static str {
        "rule_based"
    }

    fn features(&self, text: &str, config: &AnalysisConfig) -> NlpResult<LinguisticFeatures> {
        let doc = Doc::parse(text);
        debug!(
            tokens = doc.tokens.len(),
            sentences = doc.sentences.len(),
            entities = doc.entities.len(),
            "Parsed document"
        );

        Ok(LinguisticFeatures {
            keywords: self.keywords(&doc, config.max_keywords),
            entities: self.entities(&doc, config.max_entities),
            summary: self.summary(&doc, config.summary_sentences),
            topics: self.topics(&doc),
            sentiment: sentiment::classify(text),
        })
    }
}
