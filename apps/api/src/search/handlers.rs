//! Axum route handlers for the Search API.

use axum::{extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::SearchResponse;
use crate::formatting::{CandidateView, FormatBackend};
use crate::search::shape_query;
use crate::state::AppState;

pub const NO_RESULTS_TEXT: &str = "No search results found. Try a different query.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct CandidateSearchResponse {
    pub query: String,
    pub backend: FormatBackend,
    /// Set instead of `view` when the provider returned nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<CandidateView>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/search
///
/// Full pipeline: rate limit → shape query → search → configured formatter.
pub async fn handle_search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SearchRequest>,
) -> Result<Json<CandidateSearchResponse>, AppError> {
    let client = client_key(&headers);
    if !state.rate_limiter.check(&client) {
        return Err(AppError::RateLimited);
    }

    let shaped = shape_query(&request.query, &state.config.search)?;
    info!("Searching: '{}'", shaped.query);

    let response = state.search.search(&shaped).await?;
    let backend = state.formatter.backend();

    if response.results.is_empty() {
        return Ok(Json(CandidateSearchResponse {
            query: shaped.query,
            backend,
            text: Some(NO_RESULTS_TEXT.to_string()),
            view: None,
        }));
    }

    let view = state.formatter.format(&response).await?;
    info!(
        "Formatted {} candidates from {} results via {:?}",
        view.candidate_count(),
        response.results.len(),
        backend
    );

    Ok(Json(CandidateSearchResponse {
        query: shaped.query,
        backend,
        text: None,
        view: Some(view),
    }))
}

/// POST /api/v1/search/profiles
///
/// Shapes the query and returns the provider response untouched.
pub async fn handle_search_profiles(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    if !state.rate_limiter.check(&client_key(&headers)) {
        return Err(AppError::RateLimited);
    }

    let shaped = shape_query(&request.query, &state.config.search)?;
    let response = state.search.search(&shaped).await?;

    Ok(Json(response))
}

/// First hop of `x-forwarded-for`, or "unknown".
fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("unknown")
        .to_string()
}
