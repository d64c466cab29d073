//! Generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::Site;

/// Generate the static site
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    Generator::new(&site.config).build(&site.content_dir, &site.build_dir, &site.template_path)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_generate_from_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("content")).unwrap();
        fs::write(dir.path().join("template.html"), "{{title}}|{{content}}").unwrap();
        fs::write(
            dir.path().join("content").join("2024-06-01-summer.md"),
            "Warm days.",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        run(&site).unwrap();

        let page = fs::read_to_string(dir.path().join("build").join("2024-06-01-summer.html")).unwrap();
        assert_eq!(page, "summer|<p>Warm days.</p>\n");
        assert!(dir.path().join("build").join("index.html").is_file());
    }

    #[test]
    fn test_generate_fails_without_template() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("content")).unwrap();

        let site = Site::new(dir.path()).unwrap();
        let err = run(&site).unwrap_err();
        assert!(err.to_string().contains("template file not found"));
    }
}
