//! Content loader - loads posts from the content directory

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{sort_posts, Metadata, Post};
use crate::error::BuildError;

/// A source document with its resolved post record
#[derive(Debug, Clone)]
pub struct Document {
    pub post: Post,
    /// Markdown body with front-matter removed
    pub body: String,
}

/// Loads markdown documents from a flat content directory
pub struct ContentLoader<'a> {
    content_dir: &'a Path,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(content_dir: &'a Path) -> Self {
        Self { content_dir }
    }

    /// List the markdown files directly inside the content directory
    ///
    /// Sub-directories are not descended into. Order follows the directory
    /// listing.
    pub fn markdown_files(&self) -> Result<Vec<PathBuf>, BuildError> {
        if !self.content_dir.exists() {
            return Err(BuildError::ContentDirNotFound(self.content_dir.to_path_buf()));
        }
        if !self.content_dir.is_dir() {
            return Err(BuildError::ContentNotADirectory(self.content_dir.to_path_buf()));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(self.content_dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| BuildError::ReadContentDir {
                path: self.content_dir.to_path_buf(),
                source: e,
            })?;

            let path = entry.path();
            if entry.file_type().is_dir() || !is_markdown_file(path) {
                tracing::debug!("Skipping {:?}", path);
                continue;
            }
            files.push(path.to_path_buf());
        }

        Ok(files)
    }

    /// Load a single document from a file
    pub fn load(&self, path: &Path) -> Result<Document, BuildError> {
        let bytes = fs::read(path).map_err(|e| BuildError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let raw = String::from_utf8_lossy(&bytes);

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let meta = Metadata::extract(&raw, &file_name);
        let post = Post::new(&file_name, &meta);

        Ok(Document {
            post,
            body: meta.body,
        })
    }

    /// Load every post, newest first
    ///
    /// Files that fail to load are logged and left out.
    pub fn load_posts(&self) -> Result<Vec<Post>, BuildError> {
        let mut posts = Vec::new();
        for path in self.markdown_files()? {
            match self.load(&path) {
                Ok(doc) => posts.push(doc.post),
                Err(e) => tracing::warn!("Failed to load post {:?}: {}", path, e),
            }
        }

        sort_posts(&mut posts);

        Ok(posts)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.ends_with(".md") || n.ends_with(".markdown"))
        .unwrap_or(false)
}
