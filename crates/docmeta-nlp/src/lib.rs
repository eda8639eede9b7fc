//! docmeta-nlp - Semantic enrichment for document metadata generation.
//!
//! [`SemanticAnalyzer`] turns extracted text into keywords, named entities,
//! an extractive summary, topics, sentiment, readability and text
//! statistics. Linguistic work is delegated to a [`LanguageBackend`]; the
//! built-in rule-based English backend (`en_core_rules`) tokenizes, tags,
//! lemmatizes, chunks and recognizes entities without external models. When
//! no backend is available or it fails, a frequency-only path takes over.
//!
//! # Example
//!
//! ```ignore
//! use docmeta_nlp::{AnalysisConfig, SemanticAnalyzer};
//!
//! let analyzer = SemanticAnalyzer::new(AnalysisConfig::default());
//! let result = analyzer.analyze("Acme Corp grew revenue 12% in 2024.");
//! println!("{:?}", result.entities);
//! ```

mod analyzer;
mod backend;
mod config;
mod error;
mod frequency;
mod keywords;
mod rule_based;
mod types;

pub mod doc;
pub mod lemmatizer;
pub mod ner;
pub mod sentences;
pub mod sentiment;
pub mod stats;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;

pub use analyzer::SemanticAnalyzer;
pub use backend::{BackendFactory, LanguageBackend, FREQUENCY_MODEL};
pub use config::{AnalysisConfig, DEFAULT_MODEL};
pub use error::{NlpError, NlpResult};
pub use frequency::FrequencyBackend;
pub use keywords::rank_keywords;
pub use rule_based::RuleBasedBackend;
pub use types::{
    EnrichmentResult, Entity, EntityLabel, Keyword, LinguisticFeatures, Sentiment, TextStatistics,
};
