//! Post model

use chrono::NaiveDate;

use super::metadata::{file_stem, Metadata};

/// A blog post, one per successfully processed source file
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Publication date, taken from the file name
    pub date: Option<NaiveDate>,

    /// Source file name (basename with extension)
    pub source_name: String,

    /// Output file name (`source_name` with a `.html` extension)
    pub output_name: String,

    /// Short summary shown on the index page
    pub description: String,
}

impl Post {
    /// Create a post from extracted metadata and its source file name
    pub fn new(source_name: &str, meta: &Metadata) -> Self {
        Self {
            title: meta.title.clone(),
            date: meta.date,
            source_name: source_name.to_string(),
            output_name: output_name(source_name),
            description: meta.description.clone(),
        }
    }
}

/// Sort posts by date descending (newest first)
///
/// The sort is stable, so posts sharing a date keep their input order. Undated
/// posts sort after every dated one.
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Map a source file name to the name of its rendered page
pub fn output_name(source_name: &str) -> String {
    format!("{}.html", file_stem(source_name))
}
