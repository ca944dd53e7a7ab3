//! Formatter backends: Pluggable strategies that turn a search response into
//! rows the UI can display.
//!
//! - `HeuristicFormatter`: title/URL heuristics, no LLM call.
//! - `LlmTableFormatter`: LLM writes a Markdown table, which is parsed back.
//!
//! `AppState` holds an `Arc<dyn CandidateFormatter>`, chosen at startup via
//! `FORMAT_BACKEND`.

pub mod handlers;
pub mod heuristic;
pub mod llm_table;
pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::{PersonRecord, SearchResponse};
use crate::table::cells::AnnotatedCell;
use crate::table::ParsedTable;

pub use heuristic::HeuristicFormatter;
pub use llm_table::LlmTableFormatter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatBackend {
    Heuristic,
    #[default]
    Llm,
}

impl std::str::FromStr for FormatBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heuristic" => Ok(FormatBackend::Heuristic),
            "llm" => Ok(FormatBackend::Llm),
            other => Err(format!("unknown format backend '{other}'")),
        }
    }
}

/// Structured rows for display, as produced by one of the backends.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CandidateView {
    People {
        people: Vec<PersonRecord>,
    },
    Table {
        table: ParsedTable,
        annotated_rows: Vec<Vec<AnnotatedCell>>,
        /// The model's reply, for clients that render Markdown directly.
        markdown: String,
        /// False when the reply does not resemble a table at all.
        is_table: bool,
    },
}

impl CandidateView {
    pub fn candidate_count(&self) -> usize {
        match self {
            CandidateView::People { people } => people.len(),
            CandidateView::Table { table, .. } => table.rows.len(),
        }
    }
}

/// The formatting contract. Implement this to add a backend without touching
/// handlers or callers.
#[async_trait]
pub trait CandidateFormatter: Send + Sync {
    fn backend(&self) -> FormatBackend;

    async fn format(&self, response: &SearchResponse) -> Result<CandidateView, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse_markdown_table;

    #[test]
    fn test_format_backend_from_str() {
        assert_eq!("LLM".parse::<FormatBackend>(), Ok(FormatBackend::Llm));
        assert_eq!("heuristic".parse::<FormatBackend>(), Ok(FormatBackend::Heuristic));
        assert!("regex".parse::<FormatBackend>().is_err());
    }

    #[test]
    fn test_candidate_count_table() {
        let table = parse_markdown_table("| A |\n|---|\n| 1 |\n| 2 |");
        let view = CandidateView::Table {
            annotated_rows: vec![],
            table,
            markdown: String::new(),
            is_table: true,
        };
        assert_eq!(view.candidate_count(), 2);
    }

    #[test]
    fn test_people_view_serializes_with_kind_tag() {
        let view = CandidateView::People { people: vec![] };
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value, serde_json::json!({"kind": "people", "people": []}));
    }
}
