//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the optional configuration file in the site's base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Title substituted into the index page
    pub title: String,

    /// HTML fragment rendered above the post listing (author bio etc.)
    pub intro: String,

    // Directory
    pub content_dir: String,
    pub build_dir: String,
    pub template: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Let's Build".to_string(),
            intro: String::new(),

            content_dir: "content".to_string(),
            build_dir: "build".to_string(),
            template: "template.html".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load `_config.yml` from `base_dir`, falling back to defaults when absent
    pub fn discover<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let path = base_dir.as_ref().join(CONFIG_FILE);
        if path.exists() {
            tracing::debug!("Loading configuration from {:?}", path);
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Let's Build");
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.build_dir, "build");
        assert_eq!(config.template, "template.html");
        assert!(config.intro.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
intro: "<p>Hi! I write about compilers.</p>"
build_dir: public
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.intro, "<p>Hi! I write about compilers.</p>");
        assert_eq!(config.build_dir, "public");
        // Unset fields keep their defaults
        assert_eq!(config.content_dir, "content");
    }

    #[test]
    fn test_discover_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::discover(dir.path()).unwrap();
        assert_eq!(config.title, "Let's Build");
    }

    #[test]
    fn test_discover_with_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "title: Notes\n").unwrap();
        let config = SiteConfig::discover(dir.path()).unwrap();
        assert_eq!(config.title, "Notes");
    }
}
