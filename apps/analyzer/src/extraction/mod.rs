//! Text extraction from uploaded documents.
//!
//! The document kind comes from the declared content type or, failing that, the file
//! extension. Content is never sniffed. PDFs go through `pdf-extract`; images go through
//! the `tesseract` CLI.

use async_trait::async_trait;
use thiserror::Error;

pub mod ocr;
pub mod pdf;

use ocr::TesseractOcr;
use pdf::extract_pdf_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Image,
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif", "tiff", "bmp", "gif", "webp"];

impl DocumentKind {
    /// Resolves the kind from what the client declared. A specific content type wins over
    /// the file name; `application/octet-stream` defers to the extension.
    pub fn from_declared(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        let from_type = content_type.and_then(|ct| {
            let ct = ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
            if ct == "application/pdf" {
                Some(DocumentKind::Pdf)
            } else if ct.starts_with("image/") {
                Some(DocumentKind::Image)
            } else {
                None
            }
        });

        from_type.or_else(|| {
            let ext = file_name?.rsplit_once('.')?.1.to_ascii_lowercase();
            if ext == "pdf" {
                Some(DocumentKind::Pdf)
            } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
                Some(DocumentKind::Image)
            } else {
                None
            }
        })
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported document type: {0}")]
    Unsupported(String),

    #[error("PDF could not be read: {0}")]
    Pdf(String),

    #[error("OCR failed: {0}")]
    Ocr(String),

    #[error("document contains no readable text")]
    EmptyText,
}

/// Extractor trait. `AppState` holds an `Arc<dyn TextExtractor>`.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Default extractor: PDF text layer for PDFs, OCR for images.
pub struct DocumentExtractor {
    ocr: TesseractOcr,
}

impl DocumentExtractor {
    pub fn new(ocr: TesseractOcr) -> Self {
        Self { ocr }
    }
}

#[async_trait]
impl TextExtractor for DocumentExtractor {
    async fn extract(&self, kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractionError> {
        let text = match kind {
            DocumentKind::Pdf => extract_pdf_text(bytes.to_vec()).await?,
            DocumentKind::Image => self.ocr.recognize(bytes).await?,
        };
        non_blank(text)
    }
}

/// Whitespace-only output counts as an extraction failure.
pub fn non_blank(text: String) -> Result<String, ExtractionError> {
    if text.trim().is_empty() {
        Err(ExtractionError::EmptyText)
    } else {
        Ok(text)
    }
}
