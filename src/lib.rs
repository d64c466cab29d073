//! mdblog: turns a flat directory of markdown posts into a static HTML site
//!
//! Every markdown file becomes one page rendered through a template with
//! `{{title}}` and `{{content}}` placeholders, and an `index.html` lists the
//! dated posts newest first.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod templates;

pub use error::BuildError;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A site rooted at a base directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Markdown source directory
    pub content_dir: PathBuf,
    /// Output directory
    pub build_dir: PathBuf,
    /// Page template file
    pub template_path: PathBuf,
}

impl Site {
    /// Create a new site from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = config::SiteConfig::discover(&base_dir)?;
        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site with an explicit configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let build_dir = base_dir.join(&config.build_dir);
        let template_path = base_dir.join(&config.template);

        Self {
            config,
            base_dir,
            content_dir,
            build_dir,
            template_path,
        }
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the build directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new dated post
    pub fn new_post(&self, title: &str) -> Result<PathBuf> {
        commands::new::run(self, title)
    }
}
