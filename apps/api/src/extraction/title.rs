//! Parsing of profile-page titles shaped like "Name - Title at Company | LinkedIn".

/// Separates the name from the rest of the title.
pub const NAME_DELIMITER: &str = " - ";

/// Trailing text search providers copy from the profile page title.
const BOILERPLATE: &[&str] = &["| LinkedIn", "on LinkedIn"];

/// Delimiters between job title and company, in priority order.
/// The first one present in the remainder wins; the company is the segment
/// between its first and second occurrence.
const TITLE_COMPANY_DELIMITERS: &[&str] = &[" at ", " @ ", NAME_DELIMITER];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedTitle {
    pub name: String,
    pub title: Option<String>,
    pub company: Option<String>,
}

/// Splits a result title into name, job title and company.
///
/// Never fails: unrecognised shapes degrade to a name-only parse.
pub fn parse_profile_title(raw: &str) -> ParsedTitle {
    let Some((name, remainder)) = raw.split_once(NAME_DELIMITER) else {
        return ParsedTitle {
            name: strip_boilerplate(raw),
            title: None,
            company: None,
        };
    };

    let (title, company) = split_title_and_company(remainder);

    ParsedTitle {
        name: name.trim().to_string(),
        title: non_empty(strip_boilerplate(title)),
        company: company.and_then(|c| non_empty(strip_boilerplate(c))),
    }
}

fn split_title_and_company(remainder: &str) -> (&str, Option<&str>) {
    let Some(delimiter) = TITLE_COMPANY_DELIMITERS
        .iter()
        .find(|delimiter| remainder.contains(*delimiter))
    else {
        return (remainder, None);
    };

    let mut segments = remainder.split(*delimiter);
    let title = segments.next().unwrap_or_default();
    (title, segments.next())
}

/// Removes the first occurrence of each boilerplate fragment and trims.
pub fn strip_boilerplate(text: &str) -> String {
    BOILERPLATE
        .iter()
        .fold(text.to_string(), |acc, fragment| acc.replacen(fragment, "", 1))
        .trim()
        .to_string()
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
