use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::extraction::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Remote-service failures never reach this type; they are absorbed by the local fallback.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad input: missing resume text or a document that fails the content gate.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Request body over `MAX_UPLOAD_BYTES`.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Validation(msg) => {
                tracing::warn!("Rejected request: {msg}");
                (StatusCode::BAD_REQUEST, msg.clone(), None)
            }
            AppError::Extraction(e) => {
                tracing::warn!("Extraction failed: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Could not read text from the uploaded document".to_string(),
                    Some(e.to_string()),
                )
            }
            AppError::PayloadTooLarge(detail) => {
                tracing::warn!("Rejected oversized request: {detail}");
                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    "Document too large".to_string(),
                    Some(detail.clone()),
                )
            }
            AppError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "Too many requests, please try again shortly".to_string(),
                None,
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to analyze resume".to_string(),
                    Some(e.to_string()),
                )
            }
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}
