//! OCR for image uploads via the `tesseract` command-line tool.

use std::io::Write;

use tokio::process::Command;
use tracing::debug;

use crate::extraction::ExtractionError;

pub const DEFAULT_TESSERACT_PATH: &str = "tesseract";
pub const DEFAULT_LANGUAGE: &str = "eng";

#[derive(Debug, Clone)]
pub struct TesseractOcr {
    binary: String,
    language: String,
}

impl TesseractOcr {
    pub fn new(binary: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            language: language.into(),
        }
    }

    /// Writes the image to a temp file and reads the recognized text from stdout.
    pub async fn recognize(&self, image: &[u8]) -> Result<String, ExtractionError> {
        let mut input = tempfile::NamedTempFile::new()
            .map_err(|e| ExtractionError::Ocr(format!("failed to create temp file: {e}")))?;
        input
            .write_all(image)
            .and_then(|_| input.flush())
            .map_err(|e| ExtractionError::Ocr(format!("failed to write temp file: {e}")))?;

        let output = Command::new(&self.binary)
            .arg(input.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .await
            .map_err(|e| ExtractionError::Ocr(format!("failed to run {}: {e}", self.binary)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractionError::Ocr(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(bytes = image.len(), chars = text.len(), "OCR complete");
        Ok(text)
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new(DEFAULT_TESSERACT_PATH, DEFAULT_LANGUAGE)
    }
}
