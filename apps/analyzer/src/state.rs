use std::sync::Arc;

use crate::analysis::service::AnalysisService;
use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::rate_limit::RateLimiter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Gate + remote adapter + local engine.
    pub analysis: Arc<AnalysisService>,
    /// Pluggable extractor. Default: `DocumentExtractor` (pdf-extract + tesseract).
    pub extractor: Arc<dyn TextExtractor>,
    /// Process-wide request budget, checked by every analysis handler.
    pub rate_limiter: Arc<RateLimiter>,
}
