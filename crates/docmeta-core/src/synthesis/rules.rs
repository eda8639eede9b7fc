//! Classification cascades as ordered (predicate, outcome) lists.
//!
//! The first rule whose predicate holds decides the outcome; when none
//! holds the cascade's default applies.

use std::collections::HashSet;

use docmeta_nlp::{EnrichmentResult, EntityLabel};

use crate::types::{ComplexityLevel, ContentType, DocumentCategory};

/// Facts about an enrichment result that the rules look at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signals {
    /// Entity labels present.
    pub labels: HashSet<EntityLabel>,
    /// Lower-cased keyword words.
    pub keywords: HashSet<String>,
    pub readability: f64,
    pub average_words_per_sentence: f64,
}

impl Signals {
    pub fn from_enrichment(enrichment: &EnrichmentResult) -> Self {
        Self {
            labels: enrichment.entities.iter().map(|e| e.label).collect(),
            keywords: enrichment
                .keywords
                .iter()
                .map(|k| k.word.to_lowercase())
                .collect(),
            readability: enrichment.readability_score,
            average_words_per_sentence: enrichment.text_statistics.average_words_per_sentence,
        }
    }

    pub fn has_entity(&self, label: EntityLabel) -> bool {
        self.labels.contains(&label)
    }

    /// Whether any of `words` is a keyword.
    pub fn has_keyword(&self, words: &[&str]) -> bool {
        words.iter().any(|w| self.keywords.contains(*w))
    }
}

/// One step of a cascade.
pub struct Rule<O> {
    pub name: &'static str,
    pub predicate: fn(&Signals) -> bool,
    pub outcome: O,
}

/// Outcome of the first matching rule, or `default`.
pub fn first_match<O: Copy>(rules: &[Rule<O>], signals: &Signals, default: O) -> O {
    rules
        .iter()
        .find(|rule| (rule.predicate)(signals))
        .map_or(default, |rule| rule.outcome)
}

pub const RESEARCH_WORDS: &[&str] = &["research", "study", "analysis", "method"];
pub const REPORT_WORDS: &[&str] = &["report", "summary", "overview"];
pub const LEGAL_WORDS: &[&str] = &["legal", "law", "contract", "agreement"];
pub const TECHNICAL_WORDS: &[&str] = &["technical", "system", "software", "computer"];
pub const MEETING_WORDS: &[&str] = &["meeting", "agenda", "schedule"];
pub const PERIODIC_REPORT_WORDS: &[&str] = &["report", "quarterly", "annual"];
pub const INSTRUCTION_WORDS: &[&str] = &["instruction", "manual", "guide", "how"];

pub static CATEGORY_RULES: &[Rule<DocumentCategory>] = &[
    Rule {
        name: "organization entity",
        predicate: |s| s.has_entity(EntityLabel::Org),
        outcome: DocumentCategory::BusinessCorporate,
    },
    Rule {
        name: "person entity",
        predicate: |s| s.has_entity(EntityLabel::Person),
        outcome: DocumentCategory::BiographicalPersonal,
    },
    Rule {
        name: "research keywords",
        predicate: |s| s.has_keyword(RESEARCH_WORDS),
        outcome: DocumentCategory::AcademicResearch,
    },
    Rule {
        name: "report keywords",
        predicate: |s| s.has_keyword(REPORT_WORDS),
        outcome: DocumentCategory::ReportDocumentation,
    },
    Rule {
        name: "legal keywords",
        predicate: |s| s.has_keyword(LEGAL_WORDS),
        outcome: DocumentCategory::LegalRegulatory,
    },
    Rule {
        name: "technical keywords",
        predicate: |s| s.has_keyword(TECHNICAL_WORDS),
        outcome: DocumentCategory::TechnicalIt,
    },
];

pub static CONTENT_TYPE_RULES: &[Rule<ContentType>] = &[
    Rule {
        name: "dated meeting",
        predicate: |s| s.has_entity(EntityLabel::Date) && s.has_keyword(MEETING_WORDS),
        outcome: ContentType::MeetingEvent,
    },
    Rule {
        name: "dated report",
        predicate: |s| s.has_entity(EntityLabel::Date) && s.has_keyword(PERIODIC_REPORT_WORDS),
        outcome: ContentType::Report,
    },
    Rule {
        name: "money entity",
        predicate: |s| s.has_entity(EntityLabel::Money),
        outcome: ContentType::Financial,
    },
    Rule {
        name: "instruction keywords",
        predicate: |s| s.has_keyword(INSTRUCTION_WORDS),
        outcome: ContentType::Instructional,
    },
];

pub static COMPLEXITY_RULES: &[Rule<ComplexityLevel>] = &[
    Rule {
        name: "easy and short sentences",
        predicate: |s| s.readability > 70.0 && s.average_words_per_sentence < 15.0,
        outcome: ComplexityLevel::Simple,
    },
    Rule {
        name: "fair and medium sentences",
        predicate: |s| s.readability > 50.0 && s.average_words_per_sentence < 20.0,
        outcome: ComplexityLevel::Moderate,
    },
    Rule {
        name: "difficult",
        predicate: |s| s.readability > 30.0,
        outcome: ComplexityLevel::Complex,
    },
];

pub fn classify_category(signals: &Signals) -> DocumentCategory {
    first_match(CATEGORY_RULES, signals, DocumentCategory::GeneralDocument)
}

pub fn classify_content_type(signals: &Signals) -> ContentType {
    first_match(CONTENT_TYPE_RULES, signals, ContentType::Informational)
}

pub fn classify_complexity(signals: &Signals) -> ComplexityLevel {
    first_match(COMPLEXITY_RULES, signals, ComplexityLevel::VeryComplex)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(labels: &[EntityLabel], keywords: &[&str]) -> Signals {
        Signals {
            labels: labels.iter().copied().collect(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_every_category_rule_is_reachable() {
        let cases = [
            (signals(&[EntityLabel::Org], &[]), DocumentCategory::BusinessCorporate),
            (signals(&[EntityLabel::Person], &[]), DocumentCategory::BiographicalPersonal),
            (signals(&[], &["study"]), DocumentCategory::AcademicResearch),
            (signals(&[], &["overview"]), DocumentCategory::ReportDocumentation),
            (signals(&[], &["contract"]), DocumentCategory::LegalRegulatory),
            (signals(&[], &["software"]), DocumentCategory::TechnicalIt),
            (signals(&[], &["garden"]), DocumentCategory::GeneralDocument),
        ];
        for (input, expected) in cases {
            assert_eq!(classify_category(&input), expected);
        }
    }

    #[test]
    fn test_category_priority() {
        let both = signals(&[EntityLabel::Person, EntityLabel::Org], &["research", "law"]);
        assert_eq!(classify_category(&both), DocumentCategory::BusinessCorporate);

        let keywords = signals(&[], &["law", "research"]);
        assert_eq!(classify_category(&keywords), DocumentCategory::AcademicResearch);
    }

    #[test]
    fn test_content_type_rules() {
        assert_eq!(
            classify_content_type(&signals(&[EntityLabel::Date], &["agenda"])),
            ContentType::MeetingEvent
        );
        assert_eq!(
            classify_content_type(&signals(&[EntityLabel::Date], &["quarterly"])),
            ContentType::Report
        );
        // Report keywords without a date do not make a report
        assert_eq!(
            classify_content_type(&signals(&[], &["quarterly"])),
            ContentType::Informational
        );
        // A date without matching keywords falls through to the money rule
        assert_eq!(
            classify_content_type(&signals(&[EntityLabel::Date, EntityLabel::Money], &[])),
            ContentType::Financial
        );
        assert_eq!(
            classify_content_type(&signals(&[], &["guide"])),
            ContentType::Instructional
        );
    }

    #[test]
    fn test_complexity_thresholds() {
        let at = |readability: f64, words: f64| Signals {
            readability,
            average_words_per_sentence: words,
            ..Default::default()
        };
        assert_eq!(classify_complexity(&at(80.0, 10.0)), ComplexityLevel::Simple);
        assert_eq!(classify_complexity(&at(80.0, 17.0)), ComplexityLevel::Moderate);
        assert_eq!(classify_complexity(&at(60.0, 25.0)), ComplexityLevel::Complex);
        assert_eq!(classify_complexity(&at(30.0, 5.0)), ComplexityLevel::VeryComplex);
        assert_eq!(classify_complexity(&at(0.0, 0.0)), ComplexityLevel::VeryComplex);
    }

    #[test]
    fn test_rule_names_are_unique() {
        let names: HashSet<&str> = CATEGORY_RULES.iter().map(|r| r.name).collect();
        assert_eq!(names.len(), CATEGORY_RULES.len());
    }
}
