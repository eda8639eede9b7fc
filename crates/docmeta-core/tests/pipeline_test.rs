use std::fs;
use std::path::Path;

use docmeta_core::synthesis::{quality_score, QualityInputs};
use docmeta_core::{
    load_metadata, save_metadata, DocumentCategory, GeneratorConfig, MetadataGenerator,
};

fn write(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_ten_word_text_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "sample.txt",
        "simple words about nothing much written here for testing purposes",
    );

    let record = MetadataGenerator::new(GeneratorConfig::default()).generate_metadata(&path);

    assert!(record.is_success());
    assert_eq!(record.extraction_info.word_count, 10);
    assert_eq!(record.extraction_info.extraction_method, "direct_text_read");
    assert!(record.content_analysis.entities.is_empty());
    assert!(record.derived_metadata.quality_score <= 70.0);
    assert_eq!(record.derived_metadata.estimated_reading_time, "1 minute");
    assert_eq!(record.derived_metadata.title, "Sample");
    assert_eq!(record.document_info.document_type, "Text Document");
    assert_eq!(record.document_info.mime_type, "text/plain");
}

#[test]
fn test_org_entity_decides_category() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "memo.txt",
        "Acme Corp published a research study about contract law and software systems.",
    );

    let record = MetadataGenerator::new(GeneratorConfig::default()).generate_metadata(&path);
    assert!(record.content_analysis.entities.iter().any(|e| e.text == "Acme Corp"));
    assert_eq!(record.derived_metadata.category, DocumentCategory::BusinessCorporate);
    assert!(record.derived_metadata.key_entities.contains(&"Acme Corp".to_string()));
}

#[test]
fn test_record_round_trips_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "quarterly_update.txt",
        "Revenue grew 8% in Q1 2024. The board met on March 3, 2024 to review the annual report.",
    );

    let record = MetadataGenerator::new(GeneratorConfig::default()).generate_metadata(&path);
    let saved = dir.path().join("out/quarterly_update_metadata.json");
    save_metadata(&record, &saved).unwrap();

    let loaded = load_metadata(&saved).unwrap();
    assert_eq!(loaded.document_info.file_hash, record.document_info.file_hash);
    assert_eq!(loaded.derived_metadata.title, "Quarterly Update");
    assert_eq!(loaded.derived_metadata.category, record.derived_metadata.category);
    assert_eq!(loaded.derived_metadata.content_type, record.derived_metadata.content_type);
    assert_eq!(loaded.content_analysis.entities.len(), record.content_analysis.entities.len());
    assert_eq!(loaded.processing_info.version, record.processing_info.version);

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&saved).unwrap()).unwrap();
    for key in [
        "document_info",
        "extraction_info",
        "content_analysis",
        "derived_metadata",
        "processing_info",
    ] {
        assert!(json.get(key).is_some(), "missing {}", key);
    }
}

#[test]
fn test_quality_score_bounds() {
    for succeeded in [true, false] {
        for word_count in [0, 10, 60, 500] {
            for readability in [0.0, 45.0, 95.0] {
                for keyword_count in [0, 2, 10] {
                    for entity_count in [0, 3] {
                        let score = quality_score(&QualityInputs {
                            extraction_succeeded: succeeded,
                            word_count,
                            readability,
                            keyword_count,
                            entity_count,
                        });
                        assert!((0.0..=100.0).contains(&score));
                        assert_eq!((score * 10.0).round() / 10.0, score);
                    }
                }
            }
        }
    }
}
