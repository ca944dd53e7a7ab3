pub mod health;

use axum::{routing::{get, post}, Router};

use crate::formatting::handlers as formatting;
use crate::search::handlers as search;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Search API
        .route("/api/v1/search", post(search::handle_search))
        .route("/api/v1/search/profiles", post(search::handle_search_profiles))
        // Formatting API (no upstream calls)
        .route("/api/v1/profiles/extract", post(formatting::handle_extract))
        .route("/api/v1/tables/parse", post(formatting::handle_parse_table))
        .route("/api/v1/export", post(formatting::handle_export))
        .with_state(state)
}
