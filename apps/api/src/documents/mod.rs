//! Document Loader: turns an uploaded file into raw resume text.
//!
//! PDF goes through `pdf-extract`, DOCX through `docx-rs`, TXT is decoded as
//! UTF-8 with invalid sequences dropped. Any failure aborts that one file.

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const TXT_CONTENT_TYPE: &str = "text/plain";

/// Supported resume formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
}

impl DocumentKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            "txt" => Some(DocumentKind::Txt),
            _ => None,
        }
    }

    pub fn from_content_type(content_type: &str) -> Option<Self> {
        // Strip parameters such as "; charset=utf-8"
        let essence = content_type.split(';').next().unwrap_or("").trim();
        match essence.to_ascii_lowercase().as_str() {
            PDF_CONTENT_TYPE => Some(DocumentKind::Pdf),
            DOCX_CONTENT_TYPE => Some(DocumentKind::Docx),
            TXT_CONTENT_TYPE => Some(DocumentKind::Txt),
            _ => None,
        }
    }

    /// The file extension wins; the declared content type is the fallback.
    pub fn detect(file_name: &str, content_type: Option<&str>) -> Option<Self> {
        file_name
            .rsplit_once('.')
            .and_then(|(_, ext)| Self::from_extension(ext))
            .or_else(|| content_type.and_then(Self::from_content_type))
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file type for '{0}' (expected PDF, DOCX or TXT)")]
    UnsupportedType(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("document contains no readable text")]
    Empty,
}

impl LoadError {
    /// The message shown to the uploader.
    pub fn user_message(&self) -> String {
        format!("could not read file: {self}")
    }
}

/// One uploaded file, held in memory for the duration of the request.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedDocument {
    pub fn kind(&self) -> Result<DocumentKind, LoadError> {
        DocumentKind::detect(&self.file_name, self.content_type.as_deref())
            .ok_or_else(|| LoadError::UnsupportedType(self.file_name.clone()))
    }
}

/// Extracts the text of an uploaded document.
///
/// PDF parsing runs on the blocking pool; a panic inside the PDF library is
/// reported as a load error rather than taking the request down.
pub async fn load_text(doc: &UploadedDocument) -> Result<String, LoadError> {
    let kind = doc.kind()?;
    debug!(file = %doc.file_name, ?kind, bytes = doc.data.len(), "Extracting document text");

    let text = match kind {
        DocumentKind::Pdf => {
            let data = doc.data.clone();
            tokio::task::spawn_blocking(move || read_pdf(&data))
                .await
                .map_err(|e| LoadError::Pdf(format!("parser aborted: {e}")))??
        }
        DocumentKind::Docx => read_docx(&doc.data)?,
        DocumentKind::Txt => read_txt(&doc.data),
    };

    if text.trim().is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(text)
}

fn read_pdf(data: &[u8]) -> Result<String, LoadError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| LoadError::Pdf(e.to_string()))
}

/// One line per top-level paragraph. Tables are not read.
fn read_docx(data: &[u8]) -> Result<String, LoadError> {
    use docx_rs::DocumentChild;

    let docx = docx_rs::read_docx(data).map_err(|e| LoadError::Docx(e.to_string()))?;

    let mut text = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(p) = child {
            push_paragraph_text(&p.children, &mut text);
            text.push('\n');
        }
    }
    Ok(text)
}

/// Run text, including runs nested in hyperlinks (mailto and profile links).
fn push_paragraph_text(children: &[docx_rs::ParagraphChild], out: &mut String) {
    use docx_rs::{ParagraphChild, RunChild};

    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    if let RunChild::Text(t) = run_child {
                        out.push_str(&t.text);
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_paragraph_text(&link.children, out),
            _ => {}
        }
    }
}

/// Decodes UTF-8, dropping invalid byte sequences instead of replacing them.
fn read_txt(data: &[u8]) -> String {
    String::from_utf8_lossy(data).replace(char::REPLACEMENT_CHARACTER, "")
}
