//! Sitemap generation.
//!
//! Generates a sitemap.xml file listing every internal route for search
//! engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/guide/</loc>
//!   </url>
//! </urlset>
//! ```

use crate::{config::SiteConfig, log, nav::leaf_routes};
use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build sitemap.xml into the output directory, if enabled.
pub fn build_sitemap(config: &SiteConfig, output_dir: &Path) -> Result<()> {
    if config.site.sitemap.enable {
        let sitemap = Sitemap::build(config);
        sitemap.write(config, output_dir)?;
    }
    Ok(())
}

struct Sitemap {
    urls: Vec<String>,
}

impl Sitemap {
    /// Collect internal routes: nav entries first, then sidebar leaves in
    /// traversal order. Duplicates keep their first position.
    fn build(config: &SiteConfig) -> Self {
        let hostname = config
            .site
            .sitemap
            .hostname
            .as_deref()
            .unwrap_or_default()
            .trim_end_matches('/');

        let nav_routes = config
            .nav
            .iter()
            .filter(|item| !item.is_external())
            .map(|item| item.link.as_str());

        let mut seen = FxHashSet::default();
        let urls = nav_routes
            .chain(leaf_routes(&config.sidebar))
            .filter(|route| seen.insert(*route))
            .map(|route| format!("{hostname}{route}"))
            .collect();

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for loc in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&loc));
            xml.push_str("</loc>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig, output_dir: &Path) -> Result<()> {
        let sitemap_path = output_dir.join(&config.site.sitemap.path);
        let xml = self.into_xml();

        fs::write(&sitemap_path, xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("export"; "{}", config.site.sitemap.path);
        Ok(())
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
