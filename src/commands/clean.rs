//! Clean the build directory

use anyhow::Result;
use std::fs;

use crate::Site;

/// Remove the build directory and everything in it
pub fn run(site: &Site) -> Result<()> {
    if site.build_dir.exists() {
        fs::remove_dir_all(&site.build_dir)?;
        tracing::info!("Deleted: {:?}", site.build_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        fs::create_dir_all(&site.build_dir).unwrap();
        fs::write(site.build_dir.join("index.html"), "old").unwrap();

        run(&site).unwrap();
        assert!(!site.build_dir.exists());

        // Cleaning twice is fine
        run(&site).unwrap();
    }
}
