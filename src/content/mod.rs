//! Content module - handles posts and metadata extraction

mod frontmatter;
pub mod loader;
mod markdown;
pub mod metadata;
mod post;

pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use metadata::Metadata;
pub use post::{output_name, sort_posts, Post};
