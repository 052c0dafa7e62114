//! Descriptor file generation.
//!
//! Creates waypost.toml and ignore files for new sites.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::section::{
    ContentConfig, FooterConfig, LabelsConfig, MarkdownConfig, OutlineConfig, SearchConfig,
    SiteSectionConfig,
};

/// Default config filename
const CONFIG_FILE: &str = "waypost.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Example navigation tables; arrays of tables are not covered by the
/// section templates, so they are spelled out here.
const NAV_TEMPLATE: &str = "\
# Top navigation bar entries
[[nav]]
text = \"Home\"
link = \"/\"

# Sidebar tree: groups hold leaf links or nested groups
[[sidebar]]
text = \"Getting Started\"
collapsed = false

[[sidebar.items]]
text = \"Welcome\"
link = \"/\"
";

/// Generate waypost.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# Waypost site descriptor (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    // [site] section (includes [site.sitemap] and [site.edit_link])
    out.push_str(&SiteSectionConfig::template_with_header());
    out.push('\n');

    // [content] section
    out.push_str(&ContentConfig::template_with_header());
    out.push('\n');

    // Navigation tables
    out.push_str(NAV_TEMPLATE);
    out.push('\n');

    // [search] section (includes [search.algolia])
    out.push_str(&SearchConfig::template_with_header());
    out.push('\n');

    // [markdown] section (includes [markdown.theme])
    out.push_str(&MarkdownConfig::template_with_header());
    out.push('\n');

    // [theme] sub-sections
    out.push_str(&FooterConfig::template_with_header());
    out.push('\n');
    out.push_str(&OutlineConfig::template_with_header());
    out.push('\n');
    out.push_str(&LabelsConfig::template_with_header());

    out
}

/// Write default waypost.toml
pub fn write_config(root: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
pub fn write_ignore_files(root: &Path) -> Result<()> {
    let patterns = ["/dist/", ".DS_Store"];
    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path()).unwrap();

        let config_path = temp.path().join("waypost.toml");
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[site]"));
        assert!(content.contains("[site.sitemap]"));
        assert!(content.contains("[[nav]]"));
        assert!(content.contains("[theme.labels]"));
    }

    #[test]
    fn test_template_is_parseable() {
        // The generated template must round-trip through the parser.
        let template = generate_config_template();
        let parsed = crate::config::SiteConfig::from_str(&template);
        assert!(parsed.is_ok(), "{parsed:?}");
    }

    #[test]
    fn test_template_passes_validation() {
        // A freshly scaffolded site must validate cleanly, otherwise every
        // command after `init` fails at load time.
        let template = generate_config_template();
        let config = crate::config::SiteConfig::from_str(&template).unwrap();
        let diag = config.collect_diagnostics();
        assert!(!diag.has_errors(), "{diag}");
    }

    #[test]
    fn test_write_ignore_files() {
        let temp = TempDir::new().unwrap();
        write_ignore_files(temp.path()).unwrap();

        let gitignore = temp.path().join(".gitignore");
        assert!(gitignore.exists());

        let content = fs::read_to_string(&gitignore).unwrap();
        assert!(content.contains("/dist/"));
    }

    #[test]
    fn test_ignore_files_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let gitignore = temp.path().join(".gitignore");
        fs::write(&gitignore, "custom content").unwrap();

        write_ignore_files(temp.path()).unwrap();

        let content = fs::read_to_string(&gitignore).unwrap();
        assert_eq!(content, "custom content");
    }
}
