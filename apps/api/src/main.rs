mod config;
mod errors;
mod export;
mod extraction;
mod formatting;
mod llm_client;
mod rate_limit;
mod routes;
mod search;
mod state;
mod table;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::formatting::{CandidateFormatter, FormatBackend, HeuristicFormatter, LlmTableFormatter};
use crate::llm_client::LlmClient;
use crate::rate_limit::RateLimiter;
use crate::routes::build_router;
use crate::search::ExaClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HireAI API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize search client
    let search = ExaClient::new(config.exa_api_key.clone()).context("building search client")?;
    info!(
        "Search client initialized ({} results, category '{}', mode {})",
        config.search.result_count,
        config.search.category,
        config.search.mode.as_str()
    );

    // Initialize formatter backend (swap via FORMAT_BACKEND)
    let formatter = build_formatter(&config)?;
    info!("Formatter backend: {:?}", formatter.backend());

    // Build app state
    let state = AppState {
        search: Arc::new(search),
        formatter,
        rate_limiter: Arc::new(RateLimiter::new(config.max_requests_per_hour)),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_formatter(config: &Config) -> Result<Arc<dyn CandidateFormatter>> {
    match config.format_backend {
        FormatBackend::Heuristic => Ok(Arc::new(HeuristicFormatter)),
        FormatBackend::Llm => {
            let api_key = config
                .anthropic_api_key
                .clone()
                .context("ANTHROPIC_API_KEY is required for the llm formatter")?;
            let llm = LlmClient::new(api_key).context("building LLM client")?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Ok(Arc::new(LlmTableFormatter::new(Arc::new(llm))))
        }
    }
}
