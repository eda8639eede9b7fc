//! Metadata synthesizer: fuses the three pipeline stages into
//! [`DerivedMetadata`] with deterministic rules.

pub mod rules;
pub mod scoring;
pub mod title;

use docmeta_extractors::ExtractionResult;
use docmeta_nlp::EnrichmentResult;

use crate::types::{DerivedMetadata, DocumentInfo};

pub use rules::{
    classify_category, classify_complexity, classify_content_type, first_match, Rule, Signals,
    CATEGORY_RULES, COMPLEXITY_RULES, CONTENT_TYPE_RULES,
};
pub use scoring::{quality_score, Adjustment, QualityInputs, QUALITY_ADJUSTMENTS};
pub use title::{describe, reading_time, resolve_title, TITLE_STRATEGIES, UNTITLED};

const MAX_TOPICS: usize = 5;
const MAX_ENTITIES: usize = 10;
const MAX_KEYWORDS: usize = 10;

/// Derive descriptive metadata. Pure: same inputs, same output.
pub fn synthesize(
    info: &DocumentInfo,
    extraction: &ExtractionResult,
    enrichment: &EnrichmentResult,
) -> DerivedMetadata {
    let signals = Signals::from_enrichment(enrichment);

    DerivedMetadata {
        title: resolve_title(info, enrichment),
        description: describe(enrichment),
        category: classify_category(&signals),
        primary_language: enrichment.language.clone(),
        quality_score: quality_score(&QualityInputs::new(extraction, enrichment)),
        complexity_level: classify_complexity(&signals),
        main_topics: enrichment.topics.iter().take(MAX_TOPICS).cloned().collect(),
        key_entities: enrichment
            .entities
            .iter()
            .take(MAX_ENTITIES)
            .map(|e| e.text.clone())
            .collect(),
        top_keywords: enrichment
            .keywords
            .iter()
            .take(MAX_KEYWORDS)
            .map(|k| k.word.clone())
            .collect(),
        content_type: classify_content_type(&signals),
        estimated_reading_time: reading_time(extraction.word_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::SupportedFormats;
    use crate::types::{ComplexityLevel, ContentType, DocumentCategory};
    use docmeta_nlp::{Entity, EntityLabel, Keyword};
    use std::path::Path;

    fn entity(text: &str, label: EntityLabel) -> Entity {
        Entity {
            text: text.to_string(),
            label,
            description: label.description().to_string(),
            start: 0,
            end: text.chars().count(),
            confidence: 0.9,
        }
    }

    #[test]
    fn test_synthesize_is_pure_and_capped() {
        let info = DocumentInfo::placeholder(Path::new("annual_review.txt"), &SupportedFormats::default());
        let extraction = ExtractionResult {
            success: true,
            word_count: 450,
            ..Default::default()
        };
        let enrichment = EnrichmentResult {
            keywords: (0..15)
                .map(|i| Keyword {
                    word: format!("term{}", i),
                    frequency: 1,
                    relevance_score: 0.05,
                })
                .collect(),
            entities: (0..12).map(|i| entity(&format!("Date {}", i), EntityLabel::Date)).collect(),
            topics: (0..8).map(|i| format!("topic {}", i)).collect(),
            readability_score: 55.0,
            ..EnrichmentResult::empty("en")
        };

        let first = synthesize(&info, &extraction, &enrichment);
        let second = synthesize(&info, &extraction, &enrichment);
        assert_eq!(first, second);

        assert_eq!(first.title, "Annual Review");
        assert_eq!(first.main_topics.len(), 5);
        assert_eq!(first.key_entities.len(), 10);
        assert_eq!(first.top_keywords.len(), 10);
        assert_eq!(first.primary_language, "en");
        assert_eq!(first.estimated_reading_time, "2 minutes");
        assert_eq!(first.category, DocumentCategory::GeneralDocument);
        assert_eq!(first.content_type, ContentType::Informational);
        assert_eq!(first.complexity_level, ComplexityLevel::Moderate);
    }

    #[test]
    fn test_org_entity_outranks_keyword_rules() {
        let info = DocumentInfo::placeholder(Path::new("doc.txt"), &SupportedFormats::default());
        let enrichment = EnrichmentResult {
            entities: vec![entity("Acme Corp", EntityLabel::Org)],
            keywords: ["research", "contract", "software"]
                .iter()
                .map(|w| Keyword {
                    word: w.to_string(),
                    frequency: 1,
                    relevance_score: 1.0 / 3.0,
                })
                .collect(),
            ..EnrichmentResult::empty("en")
        };
        let derived = synthesize(&info, &ExtractionResult::default(), &enrichment);
        assert_eq!(derived.category, DocumentCategory::BusinessCorporate);
    }
}
