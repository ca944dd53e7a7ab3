// Upstream search: query shaping and the provider client.

pub mod client;
pub mod handlers;
pub mod query;

pub use client::{ExaClient, ProfileSearch, SearchError};
pub use query::{shape_query, QueryError};
