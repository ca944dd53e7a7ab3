// Heuristic candidate extraction: search results → PersonRecord, no LLM involved.

pub mod models;
pub mod profile;
pub mod title;

pub use models::{PersonRecord, SearchResponse};
pub use profile::{extract_people, extract_people_from_str};
