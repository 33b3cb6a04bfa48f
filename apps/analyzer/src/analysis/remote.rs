//! Remote analysis: pluggable, trait-based adapter over an external AI service.
//!
//! `AnalysisService` holds an `Option<Arc<dyn RemoteAnalyzer>>`; `None` means local-only.
//! Implementations report failure through `RemoteError` and never retry.

use async_trait::async_trait;
use thiserror::Error;

use crate::analysis::prompts::build_analysis_prompt;
use crate::analysis::record::{AnalysisRecord, SchemaError};
use crate::llm_client::{LlmClient, LlmError};

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("Remote analysis failed schema validation: {0}")]
    Schema(#[from] SchemaError),
}

#[async_trait]
pub trait RemoteAnalyzer: Send + Sync {
    /// Short backend label for logs.
    fn name(&self) -> &str;

    async fn analyze(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<AnalysisRecord, RemoteError>;
}

/// Remote analyzer backed by Gemini.
pub struct GeminiAnalyzer(pub LlmClient);

#[async_trait]
impl RemoteAnalyzer for GeminiAnalyzer {
    fn name(&self) -> &str {
        self.0.model()
    }

    async fn analyze(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<AnalysisRecord, RemoteError> {
        let prompt = build_analysis_prompt(resume_text, job_description);
        let value = self.0.call_json(&prompt).await?;
        Ok(AnalysisRecord::from_untrusted(&value)?)
    }
}
