use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::analysis::engine::EngineSettings;
use crate::analysis::matcher::MatchMode;
use crate::analysis::score::ScoreWeights;
use crate::extraction::ocr::{DEFAULT_LANGUAGE, DEFAULT_TESSERACT_PATH};
use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Placeholder some `.env` templates ship with; treated as "no key".
const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// `None` runs the service in local-only mode.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub remote_timeout: Duration,
    pub rate_limit_max_requests: u64,
    pub rate_limit_window: Duration,
    pub max_upload_bytes: usize,
    pub engine: EngineSettings,
    pub validation_min_terms: usize,
    pub taxonomy_path: Option<PathBuf>,
    pub tesseract_path: String,
    pub ocr_language: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = ScoreWeights::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let weights = ScoreWeights {
            base: parse_or(&get, "SCORE_BASE", defaults.base)?,
            variety_bonus: parse_or(&get, "SCORE_VARIETY_BONUS", defaults.variety_bonus)?,
            per_keyword_bonus: parse_or(
                &get,
                "SCORE_PER_KEYWORD_BONUS",
                defaults.per_keyword_bonus,
            )?,
            count_bonus_cap: parse_or(&get, "SCORE_COUNT_BONUS_CAP", defaults.count_bonus_cap)?,
            cap: parse_or(&get, "SCORE_CAP", defaults.cap)?,
        };

        let match_mode = if parse_or(&get, "MATCH_WHOLE_WORDS", false)? {
            MatchMode::WholeWord
        } else {
            MatchMode::Substring
        };

        Ok(Config {
            port: parse_or(&get, "PORT", 8080)?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            gemini_api_key: get("GEMINI_API_KEY")
                .map(|k| k.trim().to_string())
                .filter(|k| k != PLACEHOLDER_API_KEY),
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_base_url: get("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            remote_timeout: Duration::from_secs(parse_or(&get, "REMOTE_TIMEOUT_SECS", 30)?),
            rate_limit_max_requests: parse_or(&get, "RATE_LIMIT_MAX_REQUESTS", 100)?,
            rate_limit_window: Duration::from_secs(parse_or(&get, "RATE_LIMIT_WINDOW_SECS", 60)?),
            max_upload_bytes: parse_or(&get, "MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            engine: EngineSettings {
                weights,
                diverse_threshold: parse_or(&get, "DIVERSE_SKILLS_THRESHOLD", 5)?,
                match_mode,
            },
            validation_min_terms: parse_or(&get, "VALIDATION_MIN_TERMS", 2)?,
            taxonomy_path: get("TAXONOMY_PATH").map(PathBuf::from),
            tesseract_path: get("TESSERACT_PATH")
                .unwrap_or_else(|| DEFAULT_TESSERACT_PATH.to_string()),
            ocr_language: get("OCR_LANGUAGE").unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        })
    }
}

fn parse_or<T>(get: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.gemini_model, DEFAULT_MODEL);
        assert_eq!(config.remote_timeout, Duration::from_secs(30));
        assert_eq!(config.rate_limit_max_requests, 100);
        assert_eq!(config.engine.weights, ScoreWeights::default());
        assert_eq!(config.engine.diverse_threshold, 5);
        assert_eq!(config.engine.match_mode, MatchMode::Substring);
        assert_eq!(config.validation_min_terms, 2);
        assert!(config.taxonomy_path.is_none());
    }

    #[test]
    fn test_placeholder_and_blank_keys_mean_local_mode() {
        let key = |value: &str| {
            config_from(&[("GEMINI_API_KEY", value)])
                .unwrap()
                .gemini_api_key
        };
        assert_eq!(key("your_api_key_here"), None);
        assert_eq!(key("   "), None);
        assert_eq!(key(" abc123 ").as_deref(), Some("abc123"));
    }

    #[test]
    fn test_scoring_constants_are_overridable() {
        let config = config_from(&[
            ("SCORE_BASE", "60"),
            ("SCORE_CAP", "90"),
            ("MATCH_WHOLE_WORDS", "true"),
            ("VALIDATION_MIN_TERMS", "3"),
        ])
        .unwrap();
        assert_eq!(config.engine.weights.base, 60);
        assert_eq!(config.engine.weights.cap, 90);
        assert_eq!(config.engine.weights.variety_bonus, 5);
        assert_eq!(config.engine.match_mode, MatchMode::WholeWord);
        assert_eq!(config.validation_min_terms, 3);
    }

    #[test]
    fn test_invalid_value_names_the_variable() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"), "{err}");
    }
}
