//! Axum route handlers for offline formatting: extraction, table parsing, export.

use axum::{http::header, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::export::{people_to_csv, table_to_csv};
use crate::extraction::{extract_people_from_str, PersonRecord};
use crate::table::cells::{annotate_rows, AnnotatedCell};
use crate::table::{looks_like_table, parse_markdown_table, ParsedTable};

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub people: Vec<PersonRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ParseTableRequest {
    pub markdown: String,
}

#[derive(Debug, Serialize)]
pub struct ParseTableResponse {
    pub table: ParsedTable,
    pub annotated_rows: Vec<Vec<AnnotatedCell>>,
    pub is_table: bool,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExportRequest {
    Table { markdown: String },
    People { people: Vec<PersonRecord> },
}

/// POST /api/v1/profiles/extract
///
/// Body is a raw search response. Unparseable bodies yield an empty list.
pub async fn handle_extract(body: String) -> Json<ExtractResponse> {
    Json(ExtractResponse {
        people: extract_people_from_str(&body),
    })
}

/// POST /api/v1/tables/parse
pub async fn handle_parse_table(Json(request): Json<ParseTableRequest>) -> Json<ParseTableResponse> {
    let table = parse_markdown_table(&request.markdown);
    Json(ParseTableResponse {
        annotated_rows: annotate_rows(&table),
        is_table: looks_like_table(&request.markdown),
        table,
    })
}

/// POST /api/v1/export
///
/// Returns the candidates as `text/csv`.
pub async fn handle_export(Json(request): Json<ExportRequest>) -> Result<impl IntoResponse, AppError> {
    let csv = match request {
        ExportRequest::Table { markdown } => table_to_csv(&parse_markdown_table(&markdown))?,
        ExportRequest::People { people } => people_to_csv(&people)?,
    };

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"candidates.csv\""),
        ],
        csv,
    ))
}
