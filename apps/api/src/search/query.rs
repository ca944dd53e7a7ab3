//! Builds the upstream profile-search request from a recruiter query.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Restricts upstream results to individual profile pages.
pub const SITE_SCOPE: &str = "site:linkedin.com/in";

pub const DEFAULT_RESULT_COUNT: u32 = 10;
pub const DEFAULT_CATEGORY: &str = "linkedin profile";

#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("query cannot be empty")]
    Empty,
}

/// Ranking strategy requested from the search provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Neural,
    Keyword,
    Auto,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Neural => "neural",
            SearchMode::Keyword => "keyword",
            SearchMode::Auto => "auto",
        }
    }
}

impl std::str::FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "neural" => Ok(SearchMode::Neural),
            "keyword" => Ok(SearchMode::Keyword),
            "auto" => Ok(SearchMode::Auto),
            other => Err(format!("unknown search mode '{other}'")),
        }
    }
}

/// Fixed option bundle sent alongside every shaped query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub result_count: u32,
    pub category: String,
    pub mode: SearchMode,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            result_count: DEFAULT_RESULT_COUNT,
            category: DEFAULT_CATEGORY.to_string(),
            mode: SearchMode::Neural,
        }
    }
}

/// The upstream request: scoped query text plus its options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapedQuery {
    pub query: String,
    pub options: SearchOptions,
}

/// Builds the upstream request for `raw`.
///
/// The query is trimmed and joined to [`SITE_SCOPE`] with a single space.
/// No escaping is applied. An empty or whitespace-only query is rejected so
/// callers never reach the search provider with it.
pub fn shape_query(raw: &str, options: &SearchOptions) -> Result<ShapedQuery, QueryError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QueryError::Empty);
    }

    Ok(ShapedQuery {
        query: format!("{trimmed} {SITE_SCOPE}"),
        options: options.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_query_appends_site_scope() {
        let shaped = shape_query("rust engineers in berlin", &SearchOptions::default()).unwrap();
        assert_eq!(shaped.query, "rust engineers in berlin site:linkedin.com/in");
    }

    #[test]
    fn test_shape_query_trims_input() {
        let shaped = shape_query("   staff designer \n", &SearchOptions::default()).unwrap();
        assert_eq!(shaped.query, "staff designer site:linkedin.com/in");
    }

    #[test]
    fn test_shape_query_does_not_escape() {
        let shaped = shape_query("\"head of data\" OR cto", &SearchOptions::default()).unwrap();
        assert_eq!(shaped.query, "\"head of data\" OR cto site:linkedin.com/in");
    }

    #[test]
    fn test_shape_query_default_options() {
        let shaped = shape_query("recruiter", &SearchOptions::default()).unwrap();
        assert_eq!(shaped.options.result_count, 10);
        assert_eq!(shaped.options.category, "linkedin profile");
        assert_eq!(shaped.options.mode, SearchMode::Neural);
    }

    #[test]
    fn test_shape_query_rejects_empty() {
        assert_eq!(shape_query("", &SearchOptions::default()), Err(QueryError::Empty));
    }

    #[test]
    fn test_shape_query_rejects_whitespace() {
        assert_eq!(
            shape_query(" \t\n ", &SearchOptions::default()),
            Err(QueryError::Empty)
        );
    }

    #[test]
    fn test_shape_query_carries_custom_options() {
        let options = SearchOptions {
            result_count: 25,
            category: "people".to_string(),
            mode: SearchMode::Keyword,
        };
        let shaped = shape_query("sre", &options).unwrap();
        assert_eq!(shaped.options, options);
    }

    #[test]
    fn test_search_mode_parses_case_insensitively() {
        assert_eq!("Neural".parse::<SearchMode>(), Ok(SearchMode::Neural));
        assert_eq!(" keyword ".parse::<SearchMode>(), Ok(SearchMode::Keyword));
        assert!("fuzzy".parse::<SearchMode>().is_err());
    }

    #[test]
    fn test_search_mode_serde_lowercase() {
        assert_eq!(serde_json::to_string(&SearchMode::Auto).unwrap(), "\"auto\"");
    }
}
