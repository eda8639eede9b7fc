//! Quality score.

use docmeta_extractors::ExtractionResult;
use docmeta_nlp::EnrichmentResult;

/// Inputs the quality adjustments look at.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QualityInputs {
    pub extraction_succeeded: bool,
    pub word_count: usize,
    pub readability: f64,
    pub keyword_count: usize,
    pub entity_count: usize,
}

impl QualityInputs {
    pub fn new(extraction: &ExtractionResult, enrichment: &EnrichmentResult) -> Self {
        Self {
            extraction_succeeded: extraction.success,
            word_count: extraction.word_count,
            readability: enrichment.readability_score,
            keyword_count: enrichment.keywords.len(),
            entity_count: enrichment.entities.len(),
        }
    }
}

/// A score change applied when its condition holds.
pub struct Adjustment {
    pub name: &'static str,
    pub applies: fn(&QualityInputs) -> bool,
    pub delta: f64,
}

pub const BASE_SCORE: f64 = 100.0;

/// Every adjustment whose condition holds is applied.
pub static QUALITY_ADJUSTMENTS: &[Adjustment] = &[
    Adjustment {
        name: "extraction failed",
        applies: |q| !q.extraction_succeeded,
        delta: -50.0,
    },
    Adjustment {
        name: "under 50 words",
        applies: |q| q.word_count < 50,
        delta: -30.0,
    },
    Adjustment {
        name: "under 100 words",
        applies: |q| (50..100).contains(&q.word_count),
        delta: -15.0,
    },
    Adjustment {
        name: "hard to read",
        applies: |q| q.readability < 30.0,
        delta: -20.0,
    },
    Adjustment {
        name: "easy to read",
        applies: |q| q.readability > 80.0,
        delta: 10.0,
    },
    Adjustment {
        name: "fewer than 3 keywords",
        applies: |q| q.keyword_count < 3,
        delta: -15.0,
    },
    Adjustment {
        name: "no entities",
        applies: |q| q.entity_count == 0,
        delta: -10.0,
    },
];

/// Score in `[0, 100]` rounded to one decimal.
pub fn quality_score(inputs: &QualityInputs) -> f64 {
    let raw: f64 = BASE_SCORE
        + QUALITY_ADJUSTMENTS
            .iter()
            .filter(|adjustment| (adjustment.applies)(inputs))
            .map(|adjustment| adjustment.delta)
            .sum::<f64>();
    ((raw * 10.0).round() / 10.0).clamp(0.0, 100.0)
}
