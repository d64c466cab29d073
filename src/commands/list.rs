//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::Site;

/// Print every post, newest first
pub fn run(site: &Site) -> Result<()> {
    let posts = ContentLoader::new(&site.content_dir).load_posts()?;

    println!("Posts ({}):", posts.len());
    for post in posts {
        let date = post
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "undated".to_string());
        println!("  {} - {} [{}]", date, post.title, post.source_name);
    }

    Ok(())
}
