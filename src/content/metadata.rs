//! Post metadata extraction from the file name and front-matter

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use super::FrontMatter;

lazy_static! {
    /// `2023-01-15-my-first-post` -> ("2023-01-15", "my-first-post")
    static ref DATED_STEM: Regex = Regex::new(r"^(\d{4}-\d{2}-\d{2})-(.+)$").unwrap();
}

/// Longest description taken from the body, in characters
const DESCRIPTION_LIMIT: usize = 150;

/// Resolved metadata for a single source document
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    /// Markdown body with any front-matter removed
    pub body: String,
    pub title: String,
    /// `None` when the file name carries no valid date
    pub date: Option<NaiveDate>,
    pub description: String,
}

impl Metadata {
    /// Extract metadata from raw file contents and the file's base name.
    ///
    /// Front-matter values win over values derived from the file name or body.
    pub fn extract(raw: &str, file_name: &str) -> Self {
        let (fm, body) = FrontMatter::parse(raw);
        let (date, filename_title) = parse_file_name(file_name);

        let title = fm
            .title()
            .map(str::to_string)
            .unwrap_or(filename_title);

        let description = fm
            .description()
            .map(str::to_string)
            .unwrap_or_else(|| extract_description(body));

        Self {
            body: body.to_string(),
            title,
            date,
            description,
        }
    }
}

/// Strip the extension (everything from the last `.`) from a file name
pub fn file_stem(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(pos) => &file_name[..pos],
        None => file_name,
    }
}

/// Split a file name into its optional date and a human readable title
///
/// Dashes in the title part become spaces. A date-shaped prefix that is not a
/// real calendar date still gets stripped from the title, but yields no date.
pub fn parse_file_name(file_name: &str) -> (Option<NaiveDate>, String) {
    let stem = file_stem(file_name);

    match DATED_STEM.captures(stem) {
        Some(caps) => {
            let date = NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").ok();
            if date.is_none() {
                tracing::debug!("Ignoring invalid date in file name {:?}", file_name);
            }
            (date, caps[2].replace('-', " "))
        }
        None => (None, stem.replace('-', " ")),
    }
}

/// Derive a short description from a markdown body
///
/// Heading and emphasis markers (`#`, `*`, `_`) are removed character by
/// character, so `snake_case` reads as `snakecase`. The first non-blank
/// paragraph is used, cut to 147 characters plus `...` when it is longer
/// than 150.
pub fn extract_description(body: &str) -> String {
    let text: String = body
        .chars()
        .filter(|c| !matches!(c, '#' | '*' | '_'))
        .collect();

    for paragraph in text.split("\n\n") {
        let paragraph = paragraph.trim();
        if !paragraph.is_empty() {
            return truncate(paragraph);
        }
    }

    // Only reachable when the text is all whitespace
    let head: String = text.chars().take(DESCRIPTION_LIMIT).collect();
    head.trim().to_string()
}

fn truncate(text: &str) -> String {
    if text.chars().count() > DESCRIPTION_LIMIT {
        let mut cut: String = text.chars().take(DESCRIPTION_LIMIT - 3).collect();
        cut.push_str("...");
        cut
    } else {
        text.to_string()
    }
}
