//! Link conventions recognised in table cells for display.
//!
//! These are best-effort pattern matches layered on top of [`ParsedTable`];
//! the parser itself never interprets cell content.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::table::ParsedTable;

static MARKDOWN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("valid markdown link pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellKind {
    /// Bare URL. `profile` is set for LinkedIn links, which get extra emphasis.
    Url { href: String, profile: bool },
    /// `[label](url)` syntax.
    Link { label: String, href: String },
    Text,
}

/// Classifies a single cell.
pub fn classify_cell(cell: &str) -> CellKind {
    if cell.starts_with("http://") || cell.starts_with("https://") {
        return CellKind::Url {
            href: cell.to_string(),
            profile: cell.contains("linkedin.com"),
        };
    }

    if let Some(caps) = MARKDOWN_LINK_RE.captures(cell) {
        return CellKind::Link {
            label: caps[1].to_string(),
            href: caps[2].to_string(),
        };
    }

    CellKind::Text
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedCell {
    /// Column header, or `None` when the row is wider than the header.
    pub column: Option<String>,
    pub text: String,
    #[serde(flatten)]
    pub kind: CellKind,
}

/// Pairs every cell with its column label and link classification.
pub fn annotate_rows(table: &ParsedTable) -> Vec<Vec<AnnotatedCell>> {
    table
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(index, cell)| AnnotatedCell {
                    column: table.column_label(index).map(str::to_string),
                    text: cell.clone(),
                    kind: classify_cell(cell),
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse_markdown_table;

    #[test]
    fn test_linkedin_url_is_profile() {
        assert_eq!(
            classify_cell("https://www.linkedin.com/in/jane-doe"),
            CellKind::Url {
                href: "https://www.linkedin.com/in/jane-doe".to_string(),
                profile: true
            }
        );
    }

    #[test]
    fn test_plain_http_url() {
        assert_eq!(
            classify_cell("http://janedoe.dev"),
            CellKind::Url {
                href: "http://janedoe.dev".to_string(),
                profile: false
            }
        );
    }

    #[test]
    fn test_markdown_link() {
        assert_eq!(
            classify_cell("[Jane Doe](https://linkedin.com/in/jane-doe)"),
            CellKind::Link {
                label: "Jane Doe".to_string(),
                href: "https://linkedin.com/in/jane-doe".to_string()
            }
        );
    }

    #[test]
    fn test_link_embedded_in_text() {
        assert!(matches!(
            classify_cell("See [profile](https://x.io) for more"),
            CellKind::Link { ref label, .. } if label == "profile"
        ));
    }

    #[test]
    fn test_text_cells() {
        assert_eq!(classify_cell("Not available"), CellKind::Text);
        assert_eq!(classify_cell("www.linkedin.com/in/jane"), CellKind::Text);
        assert_eq!(classify_cell("[unclosed](link"), CellKind::Text);
    }

    #[test]
    fn test_annotate_rows_labels_columns() {
        let table = parse_markdown_table(
            "| Name | LinkedIn Profile URL |\n|---|---|\n| Jane | https://linkedin.com/in/jane | extra |",
        );
        let rows = annotate_rows(&table);
        assert_eq!(rows[0][0].column.as_deref(), Some("Name"));
        assert_eq!(rows[0][0].kind, CellKind::Text);
        assert!(matches!(rows[0][1].kind, CellKind::Url { profile: true, .. }));
        assert_eq!(rows[0][2].column, None);
    }

    #[test]
    fn test_annotated_cell_serializes_flat() {
        let cell = AnnotatedCell {
            column: Some("URL".to_string()),
            text: "https://x.io".to_string(),
            kind: classify_cell("https://x.io"),
        };
        let value = serde_json::to_value(&cell).unwrap();
        assert_eq!(value["kind"], "url");
        assert_eq!(value["profile"], false);
        assert_eq!(value["href"], "https://x.io");
    }
}
