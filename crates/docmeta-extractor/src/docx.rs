//! DOCX text extraction

use crate::error::ExtractorError;
use docmeta_domain::DocumentFormat;
use docx_rs::{Break, BreakType, DocumentChild, ParagraphChild, RunChild};
use tracing::debug;

/// Join the text of every body paragraph with `\n`
///
/// Empty paragraphs contribute empty lines. Tables and other non-paragraph
/// body elements are skipped.
pub(crate) fn extract_docx(file_name: &str, content: &[u8]) -> Result<String, ExtractorError> {
    let docx = docx_rs::read_docx(content)
        .map_err(|e| ExtractorError::parse(DocumentFormat::Docx, file_name, e))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(&paragraph.children)),
            _ => None,
        })
        .collect();

    debug!(file_name, paragraphs = paragraphs.len(), "Read DOCX body");
    Ok(paragraphs.join("\n"))
}

/// Run text plus hyperlink text; tabs become `\t` and only line breaks
/// become `\n` (page and column breaks add nothing)
fn paragraph_text(children: &[ParagraphChild]) -> String {
    let line_break = Break::new(BreakType::TextWrapping);
    let mut text = String::new();
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(br) if *br == line_break => text.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => text.push_str(&paragraph_text(&link.children)),
            _ => {}
        }
    }
    text
}
