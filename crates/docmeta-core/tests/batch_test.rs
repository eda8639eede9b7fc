use std::fs;

use docmeta_core::{BatchSummary, DocumentProcessor, ErrorCode, GeneratorConfig};

#[tokio::test]
async fn test_process_directory_writes_records_and_summary() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let docs = input.path().join("inbox");
    fs::create_dir_all(docs.join("nested")).unwrap();
    fs::write(docs.join("alpha.txt"), "The agenda for the weekly meeting is attached.").unwrap();
    fs::write(docs.join("beta.txt"), "This guide explains how to install the software.").unwrap();
    fs::write(docs.join("nested/gamma.txt"), "A short research note about soil samples.").unwrap();
    fs::write(docs.join("ignored.zip"), "zip").unwrap();

    let config = GeneratorConfig::default()
        .with_output_dir(output.path())
        .with_concurrency(2);
    let processor = DocumentProcessor::new(config);

    let records = processor.process_directory(&docs, true).await.unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.document_info.filename.as_str()).collect();
    assert_eq!(names, vec!["alpha.txt", "beta.txt", "gamma.txt"]);
    assert!(records.iter().all(|r| r.is_success()));

    for stem in ["alpha", "beta", "gamma"] {
        assert!(output.path().join(format!("{}_metadata.json", stem)).exists());
    }

    let summary: BatchSummary = serde_json::from_str(
        &fs::read_to_string(output.path().join("batch_summary_inbox.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(summary.batch_info.processed_files, 3);
    assert_eq!(summary.batch_info.successful_files, 3);
    assert_eq!(summary.batch_info.failed_files, 0);
    assert_eq!(summary.file_summaries[0].title, "Alpha");

    let stats = processor.stats();
    assert_eq!(stats.total_files, 3);
    assert_eq!(stats.successful, 3);
    assert!(stats.any_successful());
}

#[tokio::test]
async fn test_non_recursive_directory() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::create_dir(input.path().join("nested")).unwrap();
    fs::write(input.path().join("top.txt"), "Top level document text.").unwrap();
    fs::write(input.path().join("nested/deep.txt"), "Nested document text.").unwrap();

    let processor = DocumentProcessor::new(GeneratorConfig::default().with_output_dir(output.path()));
    let records = processor.process_directory(input.path(), false).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].document_info.filename, "top.txt");
}

#[tokio::test]
async fn test_invalid_directory() {
    let output = tempfile::tempdir().unwrap();
    let processor = DocumentProcessor::new(GeneratorConfig::default().with_output_dir(output.path()));
    let err = processor
        .process_directory(&output.path().join("missing"), true)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValInvalidDirectory);
}

#[tokio::test]
async fn test_file_list_keeps_order_and_counts_failures() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let good = input.path().join("good.txt");
    fs::write(&good, "Plain text that extracts fine.").unwrap();
    let missing = input.path().join("missing.txt");
    let unsupported = input.path().join("table.csv");
    fs::write(&unsupported, "a,b").unwrap();

    let processor = DocumentProcessor::new(
        GeneratorConfig::default()
            .with_output_dir(output.path())
            .with_concurrency(3),
    );
    let records = processor
        .process_file_list(&[missing.clone(), good.clone(), unsupported.clone()])
        .await;

    assert_eq!(records.len(), 3);
    assert!(!records[0].is_success());
    assert!(records[1].is_success());
    assert!(!records[2].is_success());
    assert_eq!(records[1].document_info.filename, "good.txt");

    let stats = processor.stats();
    assert_eq!((stats.total_files, stats.successful, stats.failed), (3, 1, 2));
    assert_eq!(stats.errors.len(), 2);
}
