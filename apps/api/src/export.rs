//! CSV export of candidate views.

use csv::WriterBuilder;

use crate::extraction::PersonRecord;
use crate::table::ParsedTable;

const PEOPLE_HEADERS: &[&str] = &["Name", "Title", "Company", "Profile URL", "Score"];

/// Writes the table as CSV, header first. Ragged rows are written as-is.
pub fn table_to_csv(table: &ParsedTable) -> Result<String, csv::Error> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());

    if !table.headers.is_empty() {
        writer.write_record(&table.headers)?;
    }
    for row in &table.rows {
        writer.write_record(row)?;
    }

    finish(writer)
}

pub fn people_to_csv(people: &[PersonRecord]) -> Result<String, csv::Error> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(PEOPLE_HEADERS)?;

    for person in people {
        let score = person.score.map(|s| s.to_string()).unwrap_or_default();
        writer.write_record([
            person.name.as_str(),
            person.title.as_deref().unwrap_or_default(),
            person.company.as_deref().unwrap_or_default(),
            person.url.as_str(),
            score.as_str(),
        ])?;
    }

    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, csv::Error> {
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse_markdown_table;

    #[test]
    fn test_table_to_csv_quotes_commas() {
        let table = parse_markdown_table(
            "| Name | Summary |\n|---|---|\n| Jane Doe | Rust, Go and \"infra\" |",
        );
        let csv = table_to_csv(&table).unwrap();
        assert_eq!(csv, "Name,Summary\nJane Doe,\"Rust, Go and \"\"infra\"\"\"\n");
    }

    #[test]
    fn test_table_to_csv_allows_ragged_rows() {
        let table = parse_markdown_table("| A | B |\n|---|---|\n| 1 |\n| 1 | 2 | 3 |");
        assert_eq!(table_to_csv(&table).unwrap(), "A,B\n1\n1,2,3\n");
    }

    #[test]
    fn test_table_to_csv_empty_table() {
        assert_eq!(table_to_csv(&ParsedTable::default()).unwrap(), "");
    }

    #[test]
    fn test_people_to_csv() {
        let people = vec![PersonRecord {
            name: "Jane Doe".to_string(),
            title: Some("Senior Engineer".to_string()),
            company: None,
            url: "https://linkedin.com/in/jane-doe".to_string(),
            score: Some(0.5),
            ..Default::default()
        }];
        assert_eq!(
            people_to_csv(&people).unwrap(),
            "Name,Title,Company,Profile URL,Score\n\
             Jane Doe,Senior Engineer,,https://linkedin.com/in/jane-doe,0.5\n"
        );
    }
}
