//! Axum route handlers for the Analysis API.

use anyhow::anyhow;
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::record::AnalysisRecord;
use crate::errors::AppError;
use crate::extraction::{DocumentKind, ExtractionError};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisRecord,
}

/// The `file` part of an upload.
#[derive(Debug)]
struct UploadedDocument {
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze
///
/// Scores already-extracted resume text, optionally against a job description.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    check_rate_limit(&state)?;

    let Json(request) = payload.map_err(|e| {
        body_error(e.status(), format!("Malformed request body: {}", e.body_text()))
    })?;

    let resume_text = request.resume_text.unwrap_or_default();
    run_analysis(&state, &resume_text, request.job_description.as_deref()).await
}

/// POST /api/analyze/upload
///
/// Multipart form: `file` (PDF or image) and optional `jobDescription`.
/// Extracts text first, then runs the same pipeline as `/api/analyze`.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    check_rate_limit(&state)?;

    let mut multipart = multipart
        .map_err(|e| body_error(e.status(), format!("Malformed upload: {}", e.body_text())))?;

    let mut document: Option<UploadedDocument> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| body_error(e.status(), format!("Malformed upload: {}", e.body_text())))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(read_error)?;
                document = Some(UploadedDocument {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            Some("jobDescription") => {
                let text = field.text().await.map_err(read_error)?;
                job_description = Some(text);
            }
            _ => {}
        }
    }

    let document = document
        .ok_or_else(|| AppError::Validation("A resume file is required".to_string()))?;

    let kind = DocumentKind::from_declared(
        document.content_type.as_deref(),
        document.file_name.as_deref(),
    )
    .ok_or_else(|| {
        ExtractionError::Unsupported(
            document
                .content_type
                .clone()
                .or_else(|| document.file_name.clone())
                .unwrap_or_else(|| "unknown".to_string()),
        )
    })?;

    info!(?kind, bytes = document.bytes.len(), "Extracting uploaded document");
    let text = state.extractor.extract(kind, &document.bytes).await?;

    run_analysis(&state, &text, job_description.as_deref()).await
}

/// Oversized bodies are the client's fault; anything else unreadable stays a 500.
fn body_error(status: StatusCode, detail: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(detail)
    } else {
        AppError::Internal(anyhow!(detail))
    }
}

fn read_error(e: MultipartError) -> AppError {
    body_error(e.status(), format!("Failed to read upload: {}", e.body_text()))
}

fn check_rate_limit(state: &AppState) -> Result<(), AppError> {
    if state.rate_limiter.try_acquire() {
        return Ok(());
    }
    warn!(
        "Rate limit exceeded ({} requests this window)",
        state.rate_limiter.current()
    );
    Err(AppError::RateLimited)
}

async fn run_analysis(
    state: &AppState,
    resume_text: &str,
    job_description: Option<&str>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let analysis = state.analysis.analyze(resume_text, job_description).await?;

    info!(
        source = ?analysis.source,
        ats_score = analysis.record.ats_score,
        "Analysis served"
    );

    Ok(Json(AnalyzeResponse {
        analysis: analysis.record,
    }))
}
