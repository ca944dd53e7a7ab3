use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::extraction::SearchResponse;
use crate::formatting::prompts::{CANDIDATE_TABLE_PROMPT_TEMPLATE, CANDIDATE_TABLE_SYSTEM};
use crate::formatting::{CandidateFormatter, CandidateView, FormatBackend};
use crate::llm_client::TextCompletion;
use crate::table::cells::annotate_rows;
use crate::table::{looks_like_table, parse_markdown_table};

/// Asks the LLM for a Markdown table of candidates and parses it back into rows.
pub struct LlmTableFormatter {
    llm: Arc<dyn TextCompletion>,
}

impl LlmTableFormatter {
    pub fn new(llm: Arc<dyn TextCompletion>) -> Self {
        Self { llm }
    }
}

/// Fills the prompt template with the pretty-printed search response.
pub fn build_prompt(response: &SearchResponse) -> Result<String, serde_json::Error> {
    let results_json = serde_json::to_string_pretty(response)?;
    Ok(CANDIDATE_TABLE_PROMPT_TEMPLATE.replace("{search_results}", &results_json))
}

#[async_trait]
impl CandidateFormatter for LlmTableFormatter {
    fn backend(&self) -> FormatBackend {
        FormatBackend::Llm
    }

    async fn format(&self, response: &SearchResponse) -> Result<CandidateView, AppError> {
        let prompt = build_prompt(response).map_err(|e| AppError::Internal(e.into()))?;

        let markdown = self
            .llm
            .complete(&prompt, CANDIDATE_TABLE_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Candidate formatting failed: {e}")))?;

        let table = parse_markdown_table(&markdown);
        let is_table = looks_like_table(&markdown);
        if table.is_empty() {
            warn!("LLM reply contained no parseable table ({} chars)", markdown.len());
        } else {
            debug!("Parsed {} candidate rows from LLM table", table.rows.len());
        }

        Ok(CandidateView::Table {
            annotated_rows: annotate_rows(&table),
            table,
            markdown,
            is_table,
        })
    }
}
