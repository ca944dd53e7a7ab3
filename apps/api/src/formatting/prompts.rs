// Prompt constants for the LLM table formatter.

/// System prompt for candidate formatting. Table-only output.
pub const CANDIDATE_TABLE_SYSTEM: &str = "You are an expert recruitment assistant. \
    You MUST respond with a single Markdown table only. \
    Do NOT include any introductory text, preamble, or concluding notes. \
    Do NOT include explanations or apologies.";

/// Candidate table prompt template. Replace `{search_results}` before sending.
pub const CANDIDATE_TABLE_PROMPT_TEMPLATE: &str = r#"Based on the following JSON search results from a job candidate search engine, extract key information for each potential candidate and format it **ONLY as a Markdown table**. Do not include any introductory text, preamble, or any concluding notes or summaries outside of the table itself. Your entire response should be just the Markdown table.

The search results primarily target LinkedIn profiles. For each relevant LinkedIn profile found, include the following columns in your Markdown table:
| Name | Current Job Title | Current Company | LinkedIn Profile URL | Summary |
|---|---|---|---|---|

- **Name:** The full name of the candidate.
- **Current Job Title:** Their current job title.
- **Current Company:** The company they currently work for.
- **LinkedIn Profile URL:** The direct link to their LinkedIn profile.
- **Summary:** A brief 1-2 sentence summary of their current role or key skills mentioned in the search result snippet, placed within the 'Summary' cell of the table.

If some information (like company or specific title) is not available in a particular search result, indicate 'Not available' or similar for that field within the table cell.
Focus on individual profiles, not company pages or job postings.

Here is the JSON data from the search engine:
"""json
{search_results}
"""
"#;
