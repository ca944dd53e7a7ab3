use anyhow::{anyhow, Context, Result};

use crate::formatting::FormatBackend;
use crate::search::query::{SearchMode, SearchOptions, DEFAULT_CATEGORY, DEFAULT_RESULT_COUNT};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub exa_api_key: String,
    /// Only required when the LLM formatter is selected.
    pub anthropic_api_key: Option<String>,
    pub format_backend: FormatBackend,
    pub search: SearchOptions,
    pub max_requests_per_hour: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let format_backend = optional_env("FORMAT_BACKEND")
            .map(|v| v.parse::<FormatBackend>().map_err(|e| anyhow!(e)))
            .transpose()
            .context("FORMAT_BACKEND must be 'llm' or 'heuristic'")?
            .unwrap_or_default();

        let anthropic_api_key = optional_env("ANTHROPIC_API_KEY");
        if format_backend == FormatBackend::Llm && anthropic_api_key.is_none() {
            return Err(anyhow!(
                "Required environment variable 'ANTHROPIC_API_KEY' is not set (FORMAT_BACKEND=llm)"
            ));
        }

        Ok(Config {
            exa_api_key: require_env("EXA_API_KEY")?,
            anthropic_api_key,
            format_backend,
            search: SearchOptions {
                result_count: parse_env("SEARCH_RESULT_COUNT", DEFAULT_RESULT_COUNT)?,
                category: optional_env("SEARCH_CATEGORY")
                    .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
                mode: optional_env("SEARCH_MODE")
                    .map(|v| v.parse::<SearchMode>().map_err(|e| anyhow!(e)))
                    .transpose()
                    .context("SEARCH_MODE must be 'neural', 'keyword' or 'auto'")?
                    .unwrap_or_default(),
            },
            max_requests_per_hour: parse_env("MAX_REQUESTS_PER_HOUR", 100)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match optional_env(key) {
        Some(v) => v
            .trim()
            .parse::<T>()
            .map_err(|_| anyhow!("{key} must be a valid number, got '{v}'")),
        None => Ok(default),
    }
}
