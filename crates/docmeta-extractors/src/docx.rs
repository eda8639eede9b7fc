//! DOCX text extraction using docx-rs.
//!
//! Body paragraphs are collected in document order, followed by table cells
//! row by row. Empty fragments are dropped.

use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};
use tracing::debug;

use crate::error::{ExtractError, ExtractResult};
use crate::normalize::normalize;
use crate::types::RawExtraction;
use crate::Extractor;

/// DOCX extractor.
///
/// Also registered for legacy `.doc`; binary Word files fail to parse and
/// surface as an extraction failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create a DOCX extractor.
    pub fn new() -> Self {
        Self
    }

    fn paragraph_text(p: &Paragraph) -> String {
        let mut text = String::new();
        for child in &p.children {
            match child {
                ParagraphChild::Run(run) => Self::push_run(&mut text, &run.children),
                ParagraphChild::Hyperlink(link) => {
                    for inner in &link.children {
                        if let ParagraphChild::Run(run) = inner {
                            Self::push_run(&mut text, &run.children);
                        }
                    }
                }
                _ => {}
            }
        }
        text
    }

    fn push_run(text: &mut String, children: &[RunChild]) {
        for child in children {
            match child {
                RunChild::Text(t) => text.push_str(&t.text),
                RunChild::Tab(_) => text.push('\t'),
                RunChild::Break(_) => text.push('\n'),
                _ => {}
            }
        }
    }

    fn table_cells(table: &Table, out: &mut Vec<String>) {
        for row in &table.rows {
            let TableChild::TableRow(row) = row;
            for cell in &row.cells {
                let TableRowChild::TableCell(cell) = cell;
                let text = cell
                    .children
                    .iter()
                    .filter_map(|content| match content {
                        TableCellContent::Paragraph(p) => Some(Self::paragraph_text(p)),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                if !text.trim().is_empty() {
                    out.push(text);
                }
            }
        }
    }
}

impl Extractor for DocxExtractor {
    fn extract(&self, content: &[u8]) -> ExtractResult<RawExtraction> {
        let docx = docx_rs::read_docx(content)
            .map_err(|e| ExtractError::Docx(format!("Failed to parse DOCX: {}", e)))?;

        let mut paragraphs = Vec::new();
        let mut cells = Vec::new();

        for child in &docx.document.children {
            match child {
                DocumentChild::Paragraph(p) => {
                    let text = Self::paragraph_text(p);
                    if !text.trim().is_empty() {
                        paragraphs.push(text);
                    }
                }
                DocumentChild::Table(t) => Self::table_cells(t, &mut cells),
                _ => {}
            }
        }

        debug!(
            paragraphs = paragraphs.len(),
            cells = cells.len(),
            "Parsed DOCX body"
        );

        paragraphs.extend(cells);
        Ok(RawExtraction::new(
            normalize(&paragraphs.join("\n")),
            1,
            "docx_text_extraction",
        ))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["docx", "doc"]
    }

    fn name(&self) -> &str {
        "docx"
    }
}
