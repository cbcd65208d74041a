//! Integration tests for format-specific extraction

use docmeta_domain::{DocumentFormat, UploadedFile};
use docmeta_extractor::{extract, process, Extraction, ExtractorError, Outcome};
use docx_rs::{BreakType, Docx, Hyperlink, HyperlinkType, Paragraph, Run};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

fn courier() -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    }
}

/// Composite font whose glyph codes cannot be mapped back to text
fn identity_font_without_to_unicode() -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type0",
        "BaseFont" => "NotoSansCJK",
        "Encoding" => "Identity-H",
    }
}

/// Build a PDF with one Courier page per entry; `None` leaves the page blank
fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
    let pages: Vec<(Dictionary, Option<&str>)> = pages.iter().map(|text| (courier(), *text)).collect();
    build_pdf_with_fonts(&pages)
}

/// Build a PDF with one page per entry, each page using its own font
fn build_pdf_with_fonts(pages: &[(Dictionary, Option<&str>)]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::new();
    for (font, page) in pages {
        let font_id = doc.add_object(font.clone());
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });
        let operations = match page {
            Some(text) => vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
            None => vec![],
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Pack a DOCX with the given body paragraphs
fn pack_docx(paragraphs: Vec<Paragraph>) -> Vec<u8> {
    let docx = paragraphs
        .into_iter()
        .fold(Docx::new(), |docx, paragraph| docx.add_paragraph(paragraph));

    let mut cursor = std::io::Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).unwrap();
    cursor.into_inner()
}

/// Build a DOCX whose body holds one plain paragraph per entry
fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
    pack_docx(
        paragraphs
            .iter()
            .map(|text| {
                if text.is_empty() {
                    Paragraph::new()
                } else {
                    Paragraph::new().add_run(Run::new().add_text(*text))
                }
            })
            .collect(),
    )
}

fn docx_text(paragraph: Paragraph) -> String {
    let bytes = pack_docx(vec![paragraph]);
    match extract(&UploadedFile::new("runs.docx", bytes)).unwrap() {
        Extraction::Extracted(text) => text,
        other => panic!("Expected extracted text, got {:?}", other),
    }
}

#[test]
fn test_pdf_pages_in_order() {
    let bytes = build_pdf(&[Some("Hello World!"), Some("Second page")]);
    let extraction = extract(&UploadedFile::new("two.pdf", bytes)).unwrap();
    let text = extraction.text().unwrap();

    let first = text.find("Hello").unwrap();
    let second = text.find("Second").unwrap();
    assert!(first < second);

    let tokens: Vec<&str> = text.split_whitespace().collect();
    assert_eq!(tokens, vec!["Hello", "World!", "Second", "page"]);
}

#[test]
fn test_pdf_extension_case_insensitive() {
    let bytes = build_pdf(&[Some("Case test")]);
    let lower = extract(&UploadedFile::new("a.pdf", bytes.clone())).unwrap();
    let upper = extract(&UploadedFile::new("a.PDF", bytes)).unwrap();
    assert_eq!(lower, upper);
}

#[test]
fn test_pdf_without_text_is_empty_outcome() {
    let bytes = build_pdf(&[None]);
    let file = UploadedFile::new("scan.pdf", bytes);
    assert_eq!(extract(&file).unwrap(), Extraction::Extracted(String::new()));
    assert_eq!(process(&file).unwrap(), Outcome::Empty);
}

#[test]
fn test_pdf_summarized() {
    let bytes = build_pdf(&[Some("alpha beta alpha")]);
    let Outcome::Metadata(record) = process(&UploadedFile::new("doc.pdf", bytes)).unwrap() else {
        panic!("Expected metadata");
    };
    assert_eq!(record.title, "alpha");
    assert_eq!(record.word_count, 3);
    assert_eq!(record.top_keywords, "alpha, beta");
}

#[test]
fn test_docx_paragraphs_joined_with_newlines() {
    let bytes = build_docx(&["Title", "", "Body text"]);
    let extraction = extract(&UploadedFile::new("memo.docx", bytes)).unwrap();
    assert_eq!(extraction, Extraction::Extracted("Title\n\nBody text".to_string()));
}

#[test]
fn test_docx_summarized() {
    let bytes = build_docx(&["Quarterly report", "report figures"]);
    let Outcome::Metadata(record) = process(&UploadedFile::new("Q3.DOCX", bytes)).unwrap() else {
        panic!("Expected metadata");
    };
    assert_eq!(record.title, "Quarterly");
    assert_eq!(record.word_count, 4);
    assert_eq!(record.top_keywords, "report, Quarterly, figures");
    assert_eq!(record.preview, "Quarterly report report figures");
}

#[test]
fn test_pdf_uploaded_as_docx_is_parse_error() {
    let bytes = build_pdf(&[Some("Mislabelled")]);
    let err = extract(&UploadedFile::new("mislabelled.docx", bytes)).unwrap_err();
    assert!(matches!(
        err,
        ExtractorError::Parse { format: DocumentFormat::Docx, .. }
    ));
}

#[test]
fn test_truncated_pdf_is_parse_error() {
    let bytes = build_pdf(&[Some("Truncated")]);
    let truncated = bytes[..40].to_vec();
    let err = extract(&UploadedFile::new("cut.pdf", truncated)).unwrap_err();
    assert!(matches!(
        err,
        ExtractorError::Parse { format: DocumentFormat::Pdf, .. }
    ));
}

#[test]
fn test_invalid_utf8_text_is_decode_error() {
    let err = process(&UploadedFile::new("bad.txt", vec![0xc3, 0x28])).unwrap_err();
    assert!(matches!(err, ExtractorError::Decode { .. }));
    assert!(err.to_string().contains("bad.txt"));
}

#[test]
fn test_pdf_unreadable_page_is_skipped() {
    let bytes = build_pdf_with_fonts(&[
        (courier(), Some("Good page")),
        (identity_font_without_to_unicode(), Some("Lost page")),
        (courier(), Some("Last page")),
    ]);
    let file = UploadedFile::new("mixed.pdf", bytes);

    let text = extract(&file).unwrap().text().unwrap().to_string();
    let tokens: Vec<&str> = text.split_whitespace().collect();
    assert_eq!(tokens, vec!["Good", "page", "Last", "page"]);

    let Outcome::Metadata(record) = process(&file).unwrap() else {
        panic!("Expected metadata");
    };
    assert_eq!(record.title, "Good");
    assert_eq!(record.word_count, 4);
}

#[test]
fn test_docx_tab_becomes_tab_character() {
    let paragraph = Paragraph::new().add_run(Run::new().add_text("a").add_tab().add_text("b"));
    assert_eq!(docx_text(paragraph), "a\tb");
}

#[test]
fn test_docx_hyperlink_text_included() {
    let link = Hyperlink::new("section", HyperlinkType::Anchor).add_run(Run::new().add_text("link"));
    let paragraph = Paragraph::new()
        .add_run(Run::new().add_text("see "))
        .add_hyperlink(link)
        .add_run(Run::new().add_text(" here"));
    assert_eq!(docx_text(paragraph), "see link here");
}

#[test]
fn test_docx_line_break_becomes_newline() {
    let paragraph = Paragraph::new().add_run(
        Run::new()
            .add_text("end")
            .add_break(BreakType::TextWrapping)
            .add_text("next"),
    );
    assert_eq!(docx_text(paragraph), "end\nnext");
}

#[test]
fn test_docx_page_and_column_breaks_add_nothing() {
    let paragraph = Paragraph::new().add_run(
        Run::new()
            .add_text("end")
            .add_break(BreakType::Page)
            .add_text("next")
            .add_break(BreakType::Column)
            .add_text("last"),
    );
    assert_eq!(docx_text(paragraph), "endnextlast");

    let bytes = pack_docx(vec![Paragraph::new().add_run(
        Run::new().add_text("end").add_break(BreakType::Page).add_text("next"),
    )]);
    let Outcome::Metadata(record) = process(&UploadedFile::new("paged.docx", bytes)).unwrap() else {
        panic!("Expected metadata");
    };
    assert_eq!(record.word_count, 1);
}
