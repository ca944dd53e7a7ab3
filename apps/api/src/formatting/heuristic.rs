use async_trait::async_trait;

use crate::errors::AppError;
use crate::extraction::{extract_people, SearchResponse};
use crate::formatting::{CandidateFormatter, CandidateView, FormatBackend};

/// Pure-Rust formatter built on the profile extractor. Deterministic, no LLM call.
pub struct HeuristicFormatter;

#[async_trait]
impl CandidateFormatter for HeuristicFormatter {
    fn backend(&self) -> FormatBackend {
        FormatBackend::Heuristic
    }

    async fn format(&self, response: &SearchResponse) -> Result<CandidateView, AppError> {
        Ok(CandidateView::People {
            people: extract_people(&response.results),
        })
    }
}
