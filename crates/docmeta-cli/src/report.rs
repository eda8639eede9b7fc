//! Console output for processed documents.

use docmeta_core::{MetadataRecord, ProcessingStats, SupportedFormats};

pub fn print_record(record: &MetadataRecord) {
    let derived = &record.derived_metadata;
    println!("{}", record.document_info.filename);
    if !record.is_success() {
        for error in &record.processing_info.errors {
            println!("  error:        {}", error);
        }
    }
    println!("  title:        {}", derived.title);
    println!("  category:     {}", derived.category);
    println!("  content type: {}", derived.content_type);
    println!("  complexity:   {}", derived.complexity_level);
    println!("  quality:      {:.1}", derived.quality_score);
    println!("  words:        {}", record.extraction_info.word_count);
    println!("  reading time: {}", derived.estimated_reading_time);
    if !derived.top_keywords.is_empty() {
        println!("  keywords:     {}", derived.top_keywords.join(", "));
    }
    if !derived.key_entities.is_empty() {
        println!("  entities:     {}", derived.key_entities.join(", "));
    }
}

pub fn print_stats(stats: &ProcessingStats) {
    println!(
        "Processed {} file(s): {} successful, {} failed",
        stats.total_files, stats.successful, stats.failed
    );
    for error in &stats.errors {
        println!("  {}", error);
    }
}

pub fn print_formats(formats: &SupportedFormats) {
    println!("Supported formats:");
    for entry in formats.entries() {
        println!("  {:<6} {}", entry.extension, entry.label);
    }
}
