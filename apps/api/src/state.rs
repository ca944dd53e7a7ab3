use std::sync::Arc;

use crate::config::Config;
use crate::formatting::CandidateFormatter;
use crate::rate_limit::RateLimiter;
use crate::search::ProfileSearch;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Upstream search provider. Default: `ExaClient`.
    pub search: Arc<dyn ProfileSearch>,
    /// Pluggable formatter, chosen via FORMAT_BACKEND.
    pub formatter: Arc<dyn CandidateFormatter>,
    pub rate_limiter: Arc<RateLimiter>,
    pub config: Config,
}
