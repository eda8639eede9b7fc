//! Derived descriptive metadata.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Coarse document category.
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
    IntoStaticStr,
)]
pub enum DocumentCategory {
    #[serde(rename = "Business/Corporate")]
    #[strum(serialize = "Business/Corporate")]
    BusinessCorporate,
    #[serde(rename = "Biographical/Personal")]
    #[strum(serialize = "Biographical/Personal")]
    BiographicalPersonal,
    #[serde(rename = "Academic/Research")]
    #[strum(serialize = "Academic/Research")]
    AcademicResearch,
    #[serde(rename = "Report/Documentation")]
    #[strum(serialize = "Report/Documentation")]
    ReportDocumentation,
    #[serde(rename = "Legal/Regulatory")]
    #[strum(serialize = "Legal/Regulatory")]
    LegalRegulatory,
    #[serde(rename = "Technical/IT")]
    #[strum(serialize = "Technical/IT")]
    TechnicalIt,
    #[default]
    #[serde(rename = "General Document")]
    #[strum(serialize = "General Document")]
    GeneralDocument,
}

/// What kind of content the document carries.
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
    IntoStaticStr,
)]
pub enum ContentType {
    #[serde(rename = "Meeting/Event")]
    #[strum(serialize = "Meeting/Event")]
    MeetingEvent,
    Report,
    Financial,
    Instructional,
    #[default]
    Informational,
}

/// Reading difficulty bucket.
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
    IntoStaticStr,
)]
pub enum ComplexityLevel {
    Simple,
    Moderate,
    Complex,
    #[default]
    #[serde(rename = "Very Complex")]
    #[strum(serialize = "Very Complex")]
    VeryComplex,
}

/// Human-facing fields fused from the three pipeline stages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetadata {
    pub title: String,
    pub description: String,
    pub category: DocumentCategory,
    pub primary_language: String,
    /// 0 to 100, one decimal.
    pub quality_score: f64,
    pub complexity_level: ComplexityLevel,
    /// At most five.
    pub main_topics: Vec<String>,
    /// At most ten entity texts.
    pub key_entities: Vec<String>,
    /// At most ten keyword words.
    pub top_keywords: Vec<String>,
    pub content_type: ContentType,
    pub estimated_reading_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_labels() {
        assert_eq!(DocumentCategory::BusinessCorporate.to_string(), "Business/Corporate");
        assert_eq!(ContentType::MeetingEvent.to_string(), "Meeting/Event");
        assert_eq!(ComplexityLevel::VeryComplex.to_string(), "Very Complex");
        assert_eq!(
            DocumentCategory::from_str("Technical/IT").unwrap(),
            DocumentCategory::TechnicalIt
        );
    }

    #[test]
    fn test_serde_matches_display() {
        for category in DocumentCategory::iter() {
            assert_eq!(
                serde_json::to_value(category).unwrap(),
                serde_json::json!(category.to_string())
            );
        }
        for level in ComplexityLevel::iter() {
            assert_eq!(
                serde_json::to_value(level).unwrap(),
                serde_json::json!(level.to_string())
            );
        }
    }
}
