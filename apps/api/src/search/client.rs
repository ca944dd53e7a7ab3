//! Search provider client. All upstream search calls go through [`ProfileSearch`].

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::extraction::SearchResponse;
use crate::search::query::ShapedQuery;

const EXA_SEARCH_URL: &str = "https://api.exa.ai/search";
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Search failed after {retries} retries")]
    Exhausted { retries: u32 },
}

/// The search boundary. Swappable so handlers can be exercised without the network.
#[async_trait]
pub trait ProfileSearch: Send + Sync {
    async fn search(&self, query: &ShapedQuery) -> Result<SearchResponse, SearchError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExaSearchRequest<'a> {
    query: &'a str,
    num_results: u32,
    category: &'a str,
    #[serde(rename = "type")]
    search_type: &'a str,
}

impl<'a> From<&'a ShapedQuery> for ExaSearchRequest<'a> {
    fn from(shaped: &'a ShapedQuery) -> Self {
        Self {
            query: &shaped.query,
            num_results: shaped.options.result_count,
            category: &shaped.options.category,
            search_type: shaped.options.mode.as_str(),
        }
    }
}

/// Exa neural search client with retry on 429 and 5xx.
#[derive(Clone)]
pub struct ExaClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ExaClient {
    pub fn new(api_key: String) -> Result<Self, SearchError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
            api_key,
            base_url: EXA_SEARCH_URL.to_string(),
        })
    }
}

#[async_trait]
impl ProfileSearch for ExaClient {
    async fn search(&self, query: &ShapedQuery) -> Result<SearchResponse, SearchError> {
        let body = ExaSearchRequest::from(query);
        let mut last_error: Option<SearchError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Search attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self
                .client
                .post(&self.base_url)
                .header("x-api-key", &self.api_key)
                .json(&body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(SearchError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let message = response.text().await.unwrap_or_default();
                warn!("Search API returned {}: {}", status, message);
                last_error = Some(SearchError::Api {
                    status: status.as_u16(),
                    message,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(SearchError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let search_response: SearchResponse = response.json().await?;
            debug!(
                "Search succeeded: {} results for '{}'",
                search_response.results.len(),
                query.query
            );
            return Ok(search_response);
        }

        Err(last_error.unwrap_or(SearchError::Exhausted {
            retries: MAX_RETRIES,
        }))
    }
}
