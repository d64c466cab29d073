//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Site;

/// Create `content/YYYY-MM-DD-<slug>.md` dated today
pub fn run(site: &Site, title: &str) -> Result<PathBuf> {
    let today = chrono::Local::now().date_naive();
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", title);
    }

    fs::create_dir_all(&site.content_dir)?;

    let file_name = format!("{}-{}.md", today.format("%Y-%m-%d"), slug);
    let file_path = site.content_dir.join(file_name);

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!("---\ntitle: {}\n---\n", yaml_string(title));
    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Quote a title so YAML reads it back verbatim
fn yaml_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
