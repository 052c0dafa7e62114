//! Site directory structure creation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Starter page written into the content directory.
const STARTER_PAGE: &str = "# Welcome\n\nEdit this page and add routes to `waypost.toml`.\n";

/// Create the site directory layout at the given root.
///
/// The root directory is created if it doesn't exist. `content_dir` is
/// relative to the root (default `docs`).
pub fn create_structure(root: &Path, content_dir: &Path) -> Result<()> {
    if !root.exists() {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create root directory '{}'", root.display()))?;
    }

    for dir in [content_dir.to_path_buf(), content_dir.join("public")] {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    }

    Ok(())
}

/// Write the starter index page, unless one already exists.
pub fn write_starter_page(root: &Path, content_dir: &Path) -> Result<()> {
    let path = root.join(content_dir).join("index.md");
    if !path.exists() {
        fs::write(&path, STARTER_PAGE)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_structure() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("my_site");

        create_structure(&root, Path::new("docs")).unwrap();

        assert!(root.join("docs").is_dir());
        assert!(root.join("docs/public").is_dir());
    }

    #[test]
    fn test_starter_page() {
        let temp = TempDir::new().unwrap();
        create_structure(temp.path(), Path::new("docs")).unwrap();
        write_starter_page(temp.path(), Path::new("docs")).unwrap();

        let index = temp.path().join("docs/index.md");
        assert!(index.exists());

        // Existing pages are never overwritten
        fs::write(&index, "custom").unwrap();
        write_starter_page(temp.path(), Path::new("docs")).unwrap();
        assert_eq!(fs::read_to_string(&index).unwrap(), "custom");
    }
}
