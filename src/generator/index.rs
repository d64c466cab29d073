//! Index page generation

use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{sort_posts, Post};
use crate::error::BuildError;
use crate::helpers::full_date;
use crate::templates::Template;

pub const INDEX_FILE: &str = "index.html";

/// Builds the index page listing every dated post
pub struct IndexBuilder<'a> {
    template: &'a Template,
    site_title: &'a str,
    intro: &'a str,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(template: &'a Template, site_title: &'a str, intro: &'a str) -> Self {
        Self {
            template,
            site_title,
            intro,
        }
    }

    /// Sort `posts` and render the listing HTML (the `{{content}}` part)
    pub fn render(&self, posts: &mut [Post]) -> String {
        sort_posts(posts);

        let mut content = String::new();
        content.push_str(self.intro);
        content.push_str("<h2>Latest posts</h2>");
        content.push_str("<ul>\n");

        for post in posts.iter() {
            // Undated posts still have a page, they just aren't listed
            let Some(date) = post.date else {
                continue;
            };

            content.push_str(&format!(
                "<li><strong>{}</strong> - <a href=\"{}\">{}</a><p>{}</p></li>\n",
                full_date(&date),
                post.output_name,
                post.title,
                post.description
            ));
        }

        content.push_str("</ul>");
        content
    }

    /// Render the full index page and write it to `build_dir/index.html`
    pub fn write(&self, posts: &mut [Post], build_dir: &Path) -> Result<PathBuf, BuildError> {
        let content = self.render(posts);
        let output = self.template.render(self.site_title, &content);

        let output_path = build_dir.join(INDEX_FILE);
        fs::write(&output_path, output).map_err(|e| BuildError::WriteFile {
            path: output_path.clone(),
            source: e,
        })?;

        Ok(output_path)
    }
}
