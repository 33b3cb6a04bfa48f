//! The canonical analysis output shape, shared by the local engine and the remote adapter.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Placeholder for any narrative field the producer left out.
pub const PLACEHOLDER: &str = "Not available";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub ats_score: u32,
    pub summary: String,
    pub skill_gaps: String,
    pub strengths: String,
    pub recommendations: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_fit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("missing or non-numeric atsScore")]
    InvalidScore,
}

impl AnalysisRecord {
    /// Validates an untrusted JSON payload against the record schema.
    ///
    /// `atsScore` must be a number (or numeric string); it is rounded and clamped to
    /// 0–100. Missing or non-string text fields become [`PLACEHOLDER`]; `jobFit` is kept
    /// only when it is a non-blank string.
    pub fn from_untrusted(value: &Value) -> Result<Self, SchemaError> {
        let obj = value
            .as_object()
            .ok_or_else(|| SchemaError::NotAnObject(json_kind(value)))?;

        let ats_score = obj
            .get("atsScore")
            .and_then(numeric)
            .filter(|n| n.is_finite())
            .ok_or(SchemaError::InvalidScore)?
            .round()
            .clamp(0.0, 100.0) as u32;

        let text = |key: &str| {
            obj.get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(PLACEHOLDER)
                .to_string()
        };

        let job_fit = obj
            .get("jobFit")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        Ok(Self {
            ats_score,
            summary: text("summary"),
            skill_gaps: text("skillGaps"),
            strengths: text("strengths"),
            recommendations: text("recommendations"),
            job_fit,
        })
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_camel_case_without_missing_job_fit() {
        let record = AnalysisRecord {
            ats_score: 80,
            summary: "s".to_string(),
            skill_gaps: "g".to_string(),
            strengths: "st".to_string(),
            recommendations: "r".to_string(),
            job_fit: None,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["atsScore"], 80);
        assert_eq!(value["skillGaps"], "g");
        assert!(value.get("jobFit").is_none());
    }

    #[test]
    fn test_from_untrusted_complete_payload() {
        let record = AnalysisRecord::from_untrusted(&json!({
            "atsScore": 84,
            "summary": "Strong backend profile",
            "skillGaps": "Kubernetes",
            "strengths": "Rust, Postgres",
            "recommendations": "Add metrics",
            "jobFit": "72%"
        }))
        .unwrap();
        assert_eq!(record.ats_score, 84);
        assert_eq!(record.summary, "Strong backend profile");
        assert_eq!(record.job_fit.as_deref(), Some("72%"));
    }

    #[test]
    fn test_missing_text_fields_become_placeholder() {
        let record =
            AnalysisRecord::from_untrusted(&json!({"atsScore": 50, "summary": null})).unwrap();
        assert_eq!(record.summary, PLACEHOLDER);
        assert_eq!(record.skill_gaps, PLACEHOLDER);
        assert_eq!(record.strengths, PLACEHOLDER);
        assert_eq!(record.recommendations, PLACEHOLDER);
        assert!(record.job_fit.is_none());
    }

    #[test]
    fn test_score_is_rounded_and_clamped() {
        let high = AnalysisRecord::from_untrusted(&json!({"atsScore": 140})).unwrap();
        assert_eq!(high.ats_score, 100);
        let low = AnalysisRecord::from_untrusted(&json!({"atsScore": -3})).unwrap();
        assert_eq!(low.ats_score, 0);
        let frac = AnalysisRecord::from_untrusted(&json!({"atsScore": 77.6})).unwrap();
        assert_eq!(frac.ats_score, 78);
    }

    #[test]
    fn test_numeric_string_score_is_accepted() {
        let record = AnalysisRecord::from_untrusted(&json!({"atsScore": " 88% "})).unwrap();
        assert_eq!(record.ats_score, 88);
    }

    #[test]
    fn test_missing_score_is_rejected() {
        assert_eq!(
            AnalysisRecord::from_untrusted(&json!({"summary": "ok"})),
            Err(SchemaError::InvalidScore)
        );
        assert_eq!(
            AnalysisRecord::from_untrusted(&json!({"atsScore": "high"})),
            Err(SchemaError::InvalidScore)
        );
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert_eq!(
            AnalysisRecord::from_untrusted(&json!([1, 2])),
            Err(SchemaError::NotAnObject("an array"))
        );
    }
}
