//! Server-rendered HTML pages.
//!
//! Every page repeats the upload form so a failed upload can be retried
//! without navigating away. All user-supplied text goes through
//! [`escape_html`].

use base64::{engine::general_purpose::STANDARD, Engine as _};
use docmeta_domain::{DocumentFormat, MetadataRecord, CSV_FILE_NAME};

const PAGE_TITLE: &str = "Automated Metadata Generator";

/// Escape text for safe inclusion in HTML content and attributes
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Landing page with the upload form
pub fn index_page() -> String {
    layout("")
}

/// Page listing the metadata fields with a CSV download link
pub fn metadata_page(file_name: &str, record: &MetadataRecord, csv: &str) -> String {
    let mut body = uploaded_banner(file_name);
    body.push_str("<section class=\"metadata\">\n<h2>Metadata Output</h2>\n<ul>\n");
    for (key, value) in record.fields() {
        body.push_str(&format!(
            "<li><strong>{}</strong>: {}</li>\n",
            key,
            escape_html(&value)
        ));
    }
    body.push_str("</ul>\n");
    body.push_str(&format!(
        "<a class=\"download\" download=\"{}\" href=\"{}\">Download Metadata as CSV</a>\n",
        CSV_FILE_NAME,
        csv_data_uri(csv)
    ));
    body.push_str("</section>\n");
    layout(&body)
}

/// Page for an upload that produced no record
pub fn message_page(file_name: &str, message: &str) -> String {
    let mut body = uploaded_banner(file_name);
    body.push_str(&error_panel(message));
    layout(&body)
}

/// Page for a request that failed before or during extraction
pub fn error_page(message: &str) -> String {
    layout(&error_panel(message))
}

/// Inline `data:` URI so the download needs no server-side state
pub fn csv_data_uri(csv: &str) -> String {
    format!("data:text/csv;charset=utf-8;base64,{}", STANDARD.encode(csv))
}

fn uploaded_banner(file_name: &str) -> String {
    format!(
        "<p class=\"success\">Uploaded: {}</p>\n",
        escape_html(file_name)
    )
}

fn error_panel(message: &str) -> String {
    format!("<p class=\"error\">{}</p>\n", escape_html(message))
}

fn accept_list() -> String {
    DocumentFormat::ALL
        .iter()
        .map(|f| format!(".{}", f.extension()))
        .collect::<Vec<_>>()
        .join(",")
}

fn label_list() -> String {
    DocumentFormat::ALL
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn layout(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
.success {{ color: #1b5e20; background: #e8f5e9; padding: .5rem; }}
.error {{ color: #b71c1c; background: #ffebee; padding: .5rem; }}
</style>
</head>
<body>
<h1>{title}</h1>
<form action="/upload" method="post" enctype="multipart/form-data">
<label for="file">Upload your document ({labels})</label>
<input id="file" type="file" name="file" accept="{accept}" required>
<button type="submit">Generate metadata</button>
</form>
{body}</body>
</html>
"#,
        title = PAGE_TITLE,
        labels = label_list(),
        accept = accept_list(),
        body = body,
    )
}
