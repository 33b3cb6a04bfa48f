//! Analysis orchestration: input checks → content gate → remote (if configured) → local.
//!
//! Remote failures are logged and absorbed; the caller always gets a record for
//! resume-like, non-empty input.

use std::sync::Arc;

use tracing::{info, warn};

use crate::analysis::engine::ScoringEngine;
use crate::analysis::job_fit::estimate_fit;
use crate::analysis::record::AnalysisRecord;
use crate::analysis::remote::RemoteAnalyzer;
use crate::analysis::validation::ContentGate;
use crate::errors::AppError;

/// Which path produced the record. Logged, never sent to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisSource {
    Remote,
    Local,
    LocalFallback,
}

#[derive(Debug)]
pub struct Analysis {
    pub record: AnalysisRecord,
    pub source: AnalysisSource,
}

pub struct AnalysisService {
    engine: Arc<ScoringEngine>,
    gate: ContentGate,
    remote: Option<Arc<dyn RemoteAnalyzer>>,
}

impl AnalysisService {
    pub fn new(
        engine: Arc<ScoringEngine>,
        gate: ContentGate,
        remote: Option<Arc<dyn RemoteAnalyzer>>,
    ) -> Self {
        Self {
            engine,
            gate,
            remote,
        }
    }

    pub fn remote_configured(&self) -> bool {
        self.remote.is_some()
    }

    pub async fn analyze(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<Analysis, AppError> {
        if resume_text.trim().is_empty() {
            return Err(AppError::Validation("Resume text is required".to_string()));
        }

        let gate = self.gate.check(resume_text);
        if !gate.passed {
            return Err(AppError::Validation(format!(
                "The document does not look like a resume (found {} of {} expected resume sections)",
                gate.found.len(),
                gate.required
            )));
        }

        let job_description = job_description.filter(|jd| !jd.trim().is_empty());

        let Some(remote) = &self.remote else {
            info!("Running local analysis (no remote backend configured)");
            return Ok(Analysis {
                record: self.engine.analyze(resume_text, job_description),
                source: AnalysisSource::Local,
            });
        };

        match remote.analyze(resume_text, job_description).await {
            Ok(mut record) => {
                if record.job_fit.is_none() {
                    record.job_fit = Some(estimate_fit(resume_text, job_description));
                }
                info!(
                    backend = remote.name(),
                    ats_score = record.ats_score,
                    "Remote analysis complete"
                );
                Ok(Analysis {
                    record,
                    source: AnalysisSource::Remote,
                })
            }
            Err(e) => {
                warn!(
                    backend = remote.name(),
                    "Remote analysis failed, falling back to local engine: {e}"
                );
                Ok(Analysis {
                    record: self.engine.analyze(resume_text, job_description),
                    source: AnalysisSource::LocalFallback,
                })
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::analysis::record::SchemaError;
    use crate::analysis::remote::RemoteError;
    use crate::llm_client::LlmError;

    pub const RESUME: &str =
        "Experienced Python and AWS developer with leadership skills. Education: BSc.";

    /// Stub backend returning a canned result.
    pub struct StubRemote(pub fn() -> Result<AnalysisRecord, RemoteError>);

    #[async_trait]
    impl RemoteAnalyzer for StubRemote {
        fn name(&self) -> &str {
            "stub"
        }

        async fn analyze(
            &self,
            _resume_text: &str,
            _job_description: Option<&str>,
        ) -> Result<AnalysisRecord, RemoteError> {
            (self.0)()
        }
    }

    pub fn remote_record() -> Result<AnalysisRecord, RemoteError> {
        Ok(AnalysisRecord {
            ats_score: 77,
            summary: "remote summary".to_string(),
            skill_gaps: "remote gaps".to_string(),
            strengths: "remote strengths".to_string(),
            recommendations: "remote recommendations".to_string(),
            job_fit: None,
        })
    }

    pub fn remote_down() -> Result<AnalysisRecord, RemoteError> {
        Err(RemoteError::Llm(LlmError::Api {
            status: 503,
            message: "unavailable".to_string(),
        }))
    }

    fn remote_garbage() -> Result<AnalysisRecord, RemoteError> {
        Err(RemoteError::Schema(SchemaError::InvalidScore))
    }

    pub fn service(remote: Option<Arc<dyn RemoteAnalyzer>>) -> AnalysisService {
        AnalysisService::new(Arc::new(ScoringEngine::default()), ContentGate::default(), remote)
    }

    #[tokio::test]
    async fn test_local_mode_without_remote() {
        let analysis = service(None).analyze(RESUME, None).await.unwrap();
        assert_eq!(analysis.source, AnalysisSource::Local);
        assert_eq!(analysis.record, ScoringEngine::default().analyze(RESUME, None));
    }

    #[tokio::test]
    async fn test_remote_success_is_used() {
        let svc = service(Some(Arc::new(StubRemote(remote_record))));
        let analysis = svc.analyze(RESUME, Some("Python role")).await.unwrap();
        assert_eq!(analysis.source, AnalysisSource::Remote);
        assert_eq!(analysis.record.ats_score, 77);
        assert_eq!(analysis.record.summary, "remote summary");
        // filled locally when the remote omits it
        assert_eq!(analysis.record.job_fit.as_deref(), Some("50%"));
    }

    #[tokio::test]
    async fn test_remote_error_falls_back_to_local() {
        let svc = service(Some(Arc::new(StubRemote(remote_down))));
        let analysis = svc.analyze(RESUME, None).await.unwrap();
        assert_eq!(analysis.source, AnalysisSource::LocalFallback);
        assert_eq!(analysis.record, ScoringEngine::default().analyze(RESUME, None));
    }

    #[tokio::test]
    async fn test_remote_schema_error_falls_back_to_local() {
        let svc = service(Some(Arc::new(StubRemote(remote_garbage))));
        let analysis = svc.analyze(RESUME, None).await.unwrap();
        assert_eq!(analysis.source, AnalysisSource::LocalFallback);
        assert!(analysis.record.ats_score > 70);
    }

    #[tokio::test]
    async fn test_network_failure_falls_back_to_local() {
        use crate::analysis::remote::GeminiAnalyzer;
        use crate::llm_client::{LlmClient, DEFAULT_MODEL};
        use std::time::Duration;

        let client = LlmClient::new(
            "test-key".to_string(),
            "http://127.0.0.1:9".to_string(),
            DEFAULT_MODEL.to_string(),
            Duration::from_secs(2),
        )
        .unwrap();
        let svc = service(Some(Arc::new(GeminiAnalyzer(client))));
        let analysis = svc.analyze(RESUME, None).await.unwrap();
        assert_eq!(analysis.source, AnalysisSource::LocalFallback);
        assert!(!analysis.record.summary.is_empty());
    }

    #[tokio::test]
    async fn test_gemini_error_status_falls_back_to_local() {
        use crate::analysis::remote::GeminiAnalyzer;
        use crate::llm_client::tests::{spawn_gemini_stub, stub_client, BROKEN_MODEL};

        let client = stub_client(spawn_gemini_stub().await, BROKEN_MODEL);
        let svc = service(Some(Arc::new(GeminiAnalyzer(client))));
        let analysis = svc.analyze(RESUME, None).await.unwrap();
        assert_eq!(analysis.source, AnalysisSource::LocalFallback);
        assert_eq!(analysis.record.ats_score, 91);
    }

    #[tokio::test]
    async fn test_gemini_fenced_response_is_coerced() {
        use crate::analysis::record::PLACEHOLDER;
        use crate::analysis::remote::GeminiAnalyzer;
        use crate::llm_client::tests::{spawn_gemini_stub, stub_client};
        use crate::llm_client::DEFAULT_MODEL;

        let client = stub_client(spawn_gemini_stub().await, DEFAULT_MODEL);
        let svc = service(Some(Arc::new(GeminiAnalyzer(client))));
        let analysis = svc.analyze(RESUME, None).await.unwrap();
        assert_eq!(analysis.source, AnalysisSource::Remote);
        assert_eq!(analysis.record.ats_score, 81);
        assert_eq!(analysis.record.summary, "Strong backend profile");
        assert_eq!(analysis.record.strengths, PLACEHOLDER);
        assert_eq!(analysis.record.job_fit.as_deref(), Some("N/A"));
    }

    #[tokio::test]
    async fn test_empty_resume_is_input_error() {
        let svc = service(Some(Arc::new(StubRemote(remote_record))));
        for text in ["", "   \n"] {
            let err = svc.analyze(text, None).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(ref m) if m.contains("required")));
        }
    }

    #[tokio::test]
    async fn test_non_resume_is_rejected_before_scoring() {
        let svc = service(Some(Arc::new(StubRemote(remote_record))));
        let err = svc
            .analyze("Preheat the oven and whisk two eggs.", None)
            .await
            .unwrap_err();
        assert!(
            matches!(err, AppError::Validation(ref m) if m.contains("does not look like a resume"))
        );
    }

    #[tokio::test]
    async fn test_blank_job_description_is_treated_as_absent() {
        let analysis = service(None).analyze(RESUME, Some("  ")).await.unwrap();
        assert_eq!(analysis.record.job_fit.as_deref(), Some("N/A"));
    }
}
