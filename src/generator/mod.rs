//! Generator module - turns the content directory into HTML pages

mod index;

pub use crate::content::sort_posts;
pub use index::{IndexBuilder, INDEX_FILE};

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::content::loader::ContentLoader;
use crate::content::{MarkdownRenderer, Post};
use crate::error::BuildError;
use crate::templates::Template;

/// A rendered page ready to be written
struct RenderedPage {
    post: Post,
    html: String,
}

/// Static site generator
pub struct Generator<'a> {
    config: &'a SiteConfig,
    renderer: MarkdownRenderer,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            config,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Generate the entire site
    ///
    /// Only a missing template, a missing or unreadable content directory, or
    /// a build directory that cannot be created fail the build. Problems with
    /// individual files, and with the index page, are logged and skipped.
    pub fn build(
        &self,
        content_dir: &Path,
        build_dir: &Path,
        template_path: &Path,
    ) -> Result<(), BuildError> {
        // Ensure build directory exists
        fs::create_dir_all(build_dir).map_err(|e| BuildError::CreateBuildDir {
            path: build_dir.to_path_buf(),
            source: e,
        })?;

        let template = Template::load(template_path)?;

        let loader = ContentLoader::new(content_dir);
        let files = loader.markdown_files()?;
        tracing::info!("Found {} markdown files in {:?}", files.len(), content_dir);

        let mut posts = Vec::with_capacity(files.len());
        for path in &files {
            match self.write_page(&loader, &template, path, build_dir) {
                Ok((post, output_path)) => {
                    println!("Generated: {}", output_path.display());
                    posts.push(post);
                }
                Err(e) => tracing::error!("{}", e),
            }
        }

        if !posts.is_empty() {
            let index = IndexBuilder::new(&template, &self.config.title, &self.config.intro);
            match index.write(&mut posts, build_dir) {
                Ok(path) => println!("Generated index: {}", path.display()),
                Err(e) => tracing::error!("Error generating index: {}", e),
            }
        }

        Ok(())
    }

    /// Render one source file to HTML without touching the build directory
    fn render_page(
        &self,
        loader: &ContentLoader,
        template: &Template,
        path: &Path,
    ) -> Result<RenderedPage, BuildError> {
        let doc = loader.load(path)?;
        let content = self.renderer.render(&doc.body);
        let html = template.render(&doc.post.title, &content);
        Ok(RenderedPage {
            post: doc.post,
            html,
        })
    }

    /// Render one source file and write its page
    fn write_page(
        &self,
        loader: &ContentLoader,
        template: &Template,
        path: &Path,
        build_dir: &Path,
    ) -> Result<(Post, PathBuf), BuildError> {
        let page = self.render_page(loader, template, path)?;

        let output_path = build_dir.join(&page.post.output_name);
        fs::write(&output_path, page.html).map_err(|e| BuildError::WriteFile {
            path: output_path.clone(),
            source: e,
        })?;

        Ok((page.post, output_path))
    }
}

/// Build a site with the default configuration
pub fn build(content_dir: &Path, build_dir: &Path, template_path: &Path) -> Result<(), BuildError> {
    let config = SiteConfig::default();
    Generator::new(&config).build(content_dir, build_dir, template_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "<title>{{title}}</title><main>{{content}}</main>";

    struct Site {
        _dir: tempfile::TempDir,
        content: PathBuf,
        output: PathBuf,
        template: PathBuf,
    }

    impl Site {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let content = dir.path().join("content");
            let output = dir.path().join("build");
            let template = dir.path().join("template.html");
            fs::create_dir(&content).unwrap();
            fs::write(&template, TEMPLATE).unwrap();
            Self {
                _dir: dir,
                content,
                output,
                template,
            }
        }

        fn build(&self) -> Result<(), BuildError> {
            build(&self.content, &self.output, &self.template)
        }

        fn index(&self) -> String {
            fs::read_to_string(self.output.join(INDEX_FILE)).unwrap()
        }
    }

    #[test]
    fn test_build_creates_nested_build_dir() {
        let site = Site::new();
        let output = site.output.join("nested").join("out");
        fs::write(site.content.join("hello.md"), "Hello").unwrap();

        build(&site.content, &output, &site.template).unwrap();
        assert!(output.join("hello.html").is_file());
    }

    #[test]
    fn test_missing_template_is_fatal() {
        let site = Site::new();
        fs::remove_file(&site.template).unwrap();
        let err = site.build().unwrap_err();
        assert!(matches!(err, BuildError::TemplateNotFound(_)));
    }

    #[test]
    fn test_missing_content_dir_is_fatal() {
        let site = Site::new();
        fs::remove_dir(&site.content).unwrap();
        let err = site.build().unwrap_err();
        assert!(matches!(err, BuildError::ContentDirNotFound(_)));
    }

    #[test]
    fn test_content_file_is_fatal() {
        let site = Site::new();
        fs::remove_dir(&site.content).unwrap();
        fs::write(&site.content, "not a directory").unwrap();

        let err = site.build().unwrap_err();
        assert!(matches!(err, BuildError::ContentNotADirectory(_)));
        assert!(!site.output.join(INDEX_FILE).exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_is_skipped() {
        let site = Site::new();
        fs::write(site.content.join("2023-01-01-good.md"), "Good").unwrap();
        std::os::unix::fs::symlink(
            site.content.join("missing-target.md"),
            site.content.join("broken.md"),
        )
        .unwrap();

        site.build().unwrap();
        assert!(site.output.join("2023-01-01-good.html").is_file());
        assert!(!site.output.join("broken.html").exists());
        assert!(site.index().contains("2023-01-01-good.html"));
    }

    #[test]
    fn test_index_failure_is_not_fatal() {
        let site = Site::new();
        fs::write(site.content.join("2023-01-01-good.md"), "Good").unwrap();
        // A directory in place of index.html makes the index write fail
        fs::create_dir_all(site.output.join(INDEX_FILE)).unwrap();

        site.build().unwrap();
        assert!(site.output.join("2023-01-01-good.html").is_file());
        assert!(site.output.join(INDEX_FILE).is_dir());
    }

    #[test]
    fn test_no_posts_means_no_index() {
        let site = Site::new();
        fs::write(site.content.join("readme.txt"), "not markdown").unwrap();

        site.build().unwrap();
        assert!(!site.output.join(INDEX_FILE).exists());
        assert!(!site.output.join("readme.html").exists());
    }

    #[test]
    fn test_undated_only_still_writes_index() {
        let site = Site::new();
        fs::write(site.content.join("about.md"), "About me").unwrap();

        site.build().unwrap();
        let index = site.index();
        assert!(index.contains("<title>Let's Build</title>"));
        assert!(!index.contains("about.html"));
        assert!(site.output.join("about.html").is_file());
    }

    #[test]
    fn test_write_failure_skips_file() {
        let site = Site::new();
        fs::write(site.content.join("2023-01-01-good.md"), "Good").unwrap();
        fs::write(site.content.join("2023-01-02-blocked.md"), "Blocked").unwrap();
        // A directory where the output file should go makes the write fail
        fs::create_dir_all(site.output.join("2023-01-02-blocked.html")).unwrap();

        site.build().unwrap();
        let index = site.index();
        assert!(index.contains("2023-01-01-good.html"));
        assert!(!index.contains("2023-01-02-blocked.html"));
    }

    #[test]
    fn test_custom_title_and_intro() {
        let site = Site::new();
        fs::write(site.content.join("2023-05-01-post.md"), "Text").unwrap();

        let config = SiteConfig {
            title: "Field Notes".to_string(),
            intro: "<p>Written by a tester.</p>".to_string(),
            ..Default::default()
        };
        Generator::new(&config)
            .build(&site.content, &site.output, &site.template)
            .unwrap();

        let index = site.index();
        assert!(index.contains("<title>Field Notes</title>"));
        assert!(index.contains("<p>Written by a tester.</p><h2>Latest posts</h2>"));
    }
}
