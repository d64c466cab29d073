//! Page template with `{{title}}` and `{{content}}` placeholders
//!
//! Substitution is plain string replacement. Nothing is escaped, and the
//! title is replaced before the content, so a title that itself contains
//! `{{content}}` is expanded too.

use std::fs;
use std::path::Path;

use crate::error::BuildError;

pub const TITLE_PLACEHOLDER: &str = "{{title}}";
pub const CONTENT_PLACEHOLDER: &str = "{{content}}";

/// Replace every placeholder occurrence in `template`
pub fn assemble(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// A loaded page template
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    /// Create a template from its source text
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Load a template file
    pub fn load(path: &Path) -> Result<Self, BuildError> {
        if !path.exists() {
            return Err(BuildError::TemplateNotFound(path.to_path_buf()));
        }

        let source = fs::read_to_string(path).map_err(|e| BuildError::ReadTemplate {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self { source })
    }

    /// Render a page
    pub fn render(&self, title: &str, content: &str) -> String {
        assemble(&self.source, title, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "<html><head><title>{{title}}</title></head>\
        <body><h1>{{title}}</h1><div>{{content}}</div></body></html>";

    #[test]
    fn test_assemble_replaces_all() {
        let out = assemble(TEMPLATE, "Hello", "<p>World</p>");
        assert!(!out.contains(TITLE_PLACEHOLDER));
        assert!(!out.contains(CONTENT_PLACEHOLDER));
        assert!(out.contains("<title>Hello</title>"));
        assert!(out.contains("<h1>Hello</h1>"));
        assert!(out.contains("<div><p>World</p></div>"));
    }

    #[test]
    fn test_no_escaping() {
        let out = assemble("{{title}}", "<b>Tom & Jerry</b>", "");
        assert_eq!(out, "<b>Tom & Jerry</b>");
    }

    #[test]
    fn test_title_substituted_first() {
        let out = assemble("[{{title}}]", "A {{content}} B", "x");
        assert_eq!(out, "[A x B]");
    }

    #[test]
    fn test_template_without_placeholders() {
        assert_eq!(Template::new("static").render("t", "c"), "static");
    }

    #[test]
    fn test_load_missing_template() {
        let dir = tempfile::tempdir().unwrap();
        let err = Template::load(&dir.path().join("template.html")).unwrap_err();
        assert!(matches!(err, BuildError::TemplateNotFound(_)));
    }

    #[test]
    fn test_load_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.html");
        fs::write(&path, TEMPLATE).unwrap();
        let template = Template::load(&path).unwrap();
        assert_eq!(template.render("T", "C"), assemble(TEMPLATE, "T", "C"));
    }
}
