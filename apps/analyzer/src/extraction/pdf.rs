use tracing::debug;

use crate::extraction::ExtractionError;

/// Extracts the text layer of a PDF, page text concatenated in order.
///
/// Runs on the blocking pool; a panic inside the parser is reported as an unreadable PDF.
pub async fn extract_pdf_text(bytes: Vec<u8>) -> Result<String, ExtractionError> {
    let size = bytes.len();
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| ExtractionError::Pdf(format!("parser aborted: {e}")))?
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    debug!(bytes = size, chars = text.len(), "PDF text extracted");
    Ok(text)
}
