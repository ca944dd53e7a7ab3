//! Filters search results down to individual profile pages
//! and turns each into a [`PersonRecord`] without an LLM call.

use tracing::{debug, warn};

use crate::extraction::models::{PersonRecord, RawResult, SearchResponse};
use crate::extraction::title::{parse_profile_title, ParsedTitle, NAME_DELIMITER};

const PROFILE_PATH: &str = "/in/";
const JOBS_PATH: &str = "/jobs/";
const COMPANY_PATH: &str = "/company/";

/// Whether `result` looks like a single person's profile page.
///
/// Rejects job listings, company pages and titles that do not follow the
/// "Name - Headline" shape.
pub fn is_profile_result(result: &RawResult) -> bool {
    let is_profile_url = result.url.contains(PROFILE_PATH);
    let has_profile_title = result.title.contains(NAME_DELIMITER) && !result.title.contains("jobs");
    let is_job_listing =
        result.url.contains(JOBS_PATH) || result.title.to_lowercase().contains("jobs in");
    let is_company_page = result.url.contains(COMPANY_PATH);

    is_profile_url && has_profile_title && !is_job_listing && !is_company_page
}

/// Extracts people from a batch of raw results. Output length ≤ input length.
pub fn extract_people(results: &[RawResult]) -> Vec<PersonRecord> {
    let people: Vec<PersonRecord> = results
        .iter()
        .filter(|r| is_profile_result(r))
        .map(to_person_record)
        .collect();

    debug!(
        "Extracted {} people from {} results ({} filtered out)",
        people.len(),
        results.len(),
        results.len() - people.len()
    );

    people
}

/// Extracts people from a serialized search response.
///
/// An unparseable payload is treated as "no candidates" rather than an error.
pub fn extract_people_from_str(raw_response: &str) -> Vec<PersonRecord> {
    match serde_json::from_str::<SearchResponse>(raw_response) {
        Ok(response) => extract_people(&response.results),
        Err(e) => {
            warn!("Failed to parse search response: {e}");
            Vec::new()
        }
    }
}

fn to_person_record(result: &RawResult) -> PersonRecord {
    let parsed = parse_profile_title(&result.title);

    PersonRecord {
        name: resolve_name(&parsed, result),
        title: parsed.title,
        company: parsed.company,
        url: result.url.clone(),
        image_url: result.image.clone(),
        published_date: result.published_date.clone(),
        score: result.score,
    }
}

/// Picks the first non-empty name from, in order: the parsed title, the
/// result author, and the profile URL slug. Later sources are only computed
/// when earlier ones come up empty.
fn resolve_name(parsed: &ParsedTitle, result: &RawResult) -> String {
    let providers: [&dyn Fn() -> Option<String>; 3] = [
        &|| Some(parsed.name.clone()).filter(|n| !n.is_empty()),
        &|| result.author.clone().filter(|a| !a.trim().is_empty()),
        &|| Some(name_from_profile_url(&result.url)).filter(|n| !n.is_empty()),
    ];

    providers.iter().find_map(|provider| provider()).unwrap_or_default()
}

/// Synthesises a display name from a profile URL slug,
/// e.g. `.../in/jane-doe?trk=x` → `Jane Doe`.
///
/// Returns an empty string when there is no slug, when it holds a malformed
/// percent escape, or when it is not valid UTF-8 once decoded.
pub fn name_from_profile_url(url: &str) -> String {
    let Some((_, after)) = url.split_once(PROFILE_PATH) else {
        return String::new();
    };

    let slug = after.split(['/', '?']).next().unwrap_or_default();

    if !has_well_formed_escapes(slug) {
        warn!("Error extracting name from URL {url}: malformed percent escape");
        return String::new();
    }

    let decoded = match urlencoding::decode(slug) {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!("Error extracting name from URL {url}: {e}");
            return String::new();
        }
    };

    decoded
        .replace(['-', '_'], " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Every `%` must be followed by two hex digits.
fn has_well_formed_escapes(slug: &str) -> bool {
    let bytes = slug.as_bytes();
    bytes.iter().enumerate().all(|(i, &b)| {
        b != b'%'
            || matches!(
                bytes.get(i + 1..i + 3),
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            )
    })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
