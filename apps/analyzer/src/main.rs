mod analysis;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod rate_limit;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::engine::ScoringEngine;
use crate::analysis::remote::{GeminiAnalyzer, RemoteAnalyzer};
use crate::analysis::service::AnalysisService;
use crate::analysis::taxonomy::KeywordTaxonomy;
use crate::analysis::validation::ContentGate;
use crate::config::Config;
use crate::extraction::ocr::TesseractOcr;
use crate::extraction::DocumentExtractor;
use crate::llm_client::LlmClient;
use crate::rate_limit::RateLimiter;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume analyzer v{}", env!("CARGO_PKG_VERSION"));

    // Taxonomy: built-in unless a JSON override is configured
    let taxonomy = match &config.taxonomy_path {
        Some(path) => KeywordTaxonomy::from_json_file(path)?,
        None => KeywordTaxonomy::default(),
    };
    info!("Keyword taxonomy loaded ({} keywords)", taxonomy.keyword_count());

    let engine = ScoringEngine::new(&taxonomy, config.engine.clone())
        .context("Failed to compile keyword taxonomy")?;

    // Remote backend is optional; without a key every request runs locally
    let remote: Option<Arc<dyn RemoteAnalyzer>> = match &config.gemini_api_key {
        Some(key) => {
            let llm = LlmClient::new(
                key.clone(),
                config.gemini_base_url.clone(),
                config.gemini_model.clone(),
                config.remote_timeout,
            )?;
            info!("Remote analysis enabled (model: {})", llm.model());
            Some(Arc::new(GeminiAnalyzer(llm)))
        }
        None => {
            info!("No GEMINI_API_KEY set, running in local analysis mode");
            None
        }
    };

    let analysis = AnalysisService::new(
        Arc::new(engine),
        ContentGate::new(config.validation_min_terms),
        remote,
    );

    let extractor = DocumentExtractor::new(TesseractOcr::new(
        config.tesseract_path.clone(),
        config.ocr_language.clone(),
    ));

    let rate_limiter = RateLimiter::new(config.rate_limit_max_requests, config.rate_limit_window);
    info!(
        "Rate limit: {} requests per {}s",
        config.rate_limit_max_requests,
        config.rate_limit_window.as_secs()
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        analysis: Arc::new(analysis),
        extractor: Arc::new(extractor),
        rate_limiter: Arc::new(rate_limiter),
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
