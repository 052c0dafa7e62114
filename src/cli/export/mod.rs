//! Artifact export command.
//!
//! Writes the resolved descriptor (`site.json`) and, when enabled, the
//! sitemap (`sitemap.xml`) into the output directory.

use anyhow::{Context, Result};
use std::fs;

use crate::cli::ExportArgs;
use crate::config::SiteConfig;
use crate::generator::{Descriptor, build_sitemap};
use crate::log;

/// Run the export command.
pub fn export_site(config: &SiteConfig, args: &ExportArgs) -> Result<()> {
    let output_dir = config.root_join(&args.output);

    fs::create_dir_all(&output_dir).with_context(|| {
        format!(
            "Failed to create output directory '{}'",
            output_dir.display()
        )
    })?;

    Descriptor::build(config).write(&output_dir)?;
    build_sitemap(config, &output_dir)?;

    log!("export"; "artifacts written to {}", output_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    fn export_args() -> ExportArgs {
        ExportArgs {
            output: "dist".into(),
        }
    }

    #[test]
    fn test_export_writes_descriptor() {
        let temp = TempDir::new().unwrap();
        let mut config = test_parse_config("[site]\ntitle = \"Test\"");
        config.root = temp.path().to_path_buf();

        export_site(&config, &export_args()).unwrap();

        let site_json = temp.path().join("dist/site.json");
        assert!(site_json.exists());
        let content = fs::read_to_string(site_json).unwrap();
        assert!(content.contains("\"title\": \"Test\""));

        // Sitemap disabled by default
        assert!(!temp.path().join("dist/sitemap.xml").exists());
    }

    #[test]
    fn test_export_writes_sitemap_when_enabled() {
        let temp = TempDir::new().unwrap();
        let mut config = test_parse_config(
            r#"
[site]
title = "Test"

[site.sitemap]
enable = true
hostname = "https://example.com"

[[nav]]
text = "Home"
link = "/"
"#,
        );
        config.root = temp.path().to_path_buf();

        export_site(&config, &export_args()).unwrap();

        let sitemap = temp.path().join("dist/sitemap.xml");
        assert!(sitemap.exists());
        let content = fs::read_to_string(sitemap).unwrap();
        assert!(content.contains("<loc>https://example.com/</loc>"));
    }
}
