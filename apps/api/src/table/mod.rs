//! Recovers headers and rows from an LLM-produced Markdown table.
//!
//! Tolerant by construction: anything that is not a recognisable table yields
//! an empty [`ParsedTable`] instead of an error.

pub mod cells;

use serde::{Deserialize, Serialize};

/// Header + separator + at least one data row.
const MIN_TABLE_LINES: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    /// Rows are not padded or truncated; a row may have more or fewer cells
    /// than `headers`.
    pub rows: Vec<Vec<String>>,
}

impl ParsedTable {
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Header label for column `index`, `None` when a row is wider than the header.
    pub fn column_label(&self, index: usize) -> Option<&str> {
        self.headers.get(index).map(String::as_str)
    }
}

/// Parses the first pipe-delimited table found in `text`.
///
/// The separator line after the header is skipped without validation.
/// Literal `|` characters inside cells are not supported and will split the cell.
pub fn parse_markdown_table(text: &str) -> ParsedTable {
    let lines: Vec<&str> = text.lines().collect();

    let Some(start) = lines.iter().position(|line| is_table_line(line)) else {
        return ParsedTable::default();
    };

    let end = lines[start + 1..]
        .iter()
        .position(|line| !is_table_line(line))
        .map(|offset| start + 1 + offset)
        .unwrap_or(lines.len());

    let block = &lines[start..end];
    if block.len() < MIN_TABLE_LINES {
        return ParsedTable::default();
    }

    ParsedTable {
        headers: split_cells(block[0]),
        rows: block[2..].iter().map(|line| split_cells(line)).collect(),
    }
}

/// Cheap check used before handing a reply to the table view.
pub fn looks_like_table(text: &str) -> bool {
    text.contains('|') && text.contains("\n|")
}

fn is_table_line(line: &str) -> bool {
    line.trim().starts_with('|')
}

fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_parses_simple_table() {
        let table = parse_markdown_table("| A | B |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |");
        assert_eq!(table.headers, strings(&["A", "B"]));
        assert_eq!(table.rows, vec![strings(&["1", "2"]), strings(&["3", "4"])]);
    }

    #[test]
    fn test_no_table_lines_yields_empty() {
        let table = parse_markdown_table("Sorry, I could not find any candidates.");
        assert!(table.is_empty());
    }

    #[test]
    fn test_header_and_separator_only_yields_empty() {
        let table = parse_markdown_table("| A | B |\n|---|---|");
        assert_eq!(table, ParsedTable::default());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_markdown_table("").is_empty());
    }

    #[test]
    fn test_skips_preamble_and_stops_at_first_non_table_line() {
        let text = "Here are your candidates:\n\n\
                    | Name | Company |\n\
                    |---|---|\n\
                    | Jane Doe | Acme |\n\
                    \n\
                    | Ignored | Table |\n";
        let table = parse_markdown_table(text);
        assert_eq!(table.headers, strings(&["Name", "Company"]));
        assert_eq!(table.rows, vec![strings(&["Jane Doe", "Acme"])]);
    }

    #[test]
    fn test_tolerates_indentation_and_code_fences() {
        let text = "```markdown\n  | Name | Title |\n  |:--|:--|\n  | Bo | CTO |\n```";
        let table = parse_markdown_table(text);
        assert_eq!(table.headers, strings(&["Name", "Title"]));
        assert_eq!(table.rows, vec![strings(&["Bo", "CTO"])]);
    }

    #[test]
    fn test_separator_line_is_not_validated() {
        let table = parse_markdown_table("| A |\n| whatever |\n| 1 |");
        assert_eq!(table.rows, vec![strings(&["1"])]);
    }

    #[test]
    fn test_rows_are_not_padded_or_truncated() {
        let table = parse_markdown_table("| A | B | C |\n|---|---|---|\n| 1 |\n| 1 | 2 | 3 | 4 |");
        assert_eq!(table.rows[0], strings(&["1"]));
        assert_eq!(table.rows[1].len(), 4);
        assert_eq!(table.column_label(3), None);
        assert_eq!(table.column_label(2), Some("C"));
    }

    #[test]
    fn test_empty_cells_are_dropped() {
        let table = parse_markdown_table("| A | B |\n|---|---|\n| 1 |   |");
        assert_eq!(table.rows, vec![strings(&["1"])]);
    }

    #[test]
    fn test_pipe_inside_cell_splits_it() {
        let table =
            parse_markdown_table("| Name | Note |\n|---|---|\n| Jane | likes a|b |");
        assert_eq!(table.rows[0], strings(&["Jane", "likes a", "b"]));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "| Name | URL |\n|---|---|\n| Jane | https://linkedin.com/in/jane |";
        assert_eq!(parse_markdown_table(text), parse_markdown_table(text));
    }

    #[test]
    fn test_looks_like_table() {
        assert!(looks_like_table("intro\n| A |\n|---|"));
        assert!(!looks_like_table("a | b on one line"));
        assert!(!looks_like_table("no table here"));
    }
}
