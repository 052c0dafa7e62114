//! `[site]` section configuration.
//!
//! Site metadata plus head tags, sitemap, social links, and edit link.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Programming Bootcamp"
//! description = "Learn to build web apps from zero to deployment"
//! language = "en-US"
//! base = "/programming-bootcamp/"
//! logo = "/logo.svg"
//! last_updated = true
//!
//! [[site.head]]
//! tag = "meta"
//! attrs = { name = "theme-color", content = "#3eaf7c" }
//!
//! [site.sitemap]
//! enable = true
//! hostname = "https://example.github.io/programming-bootcamp/"
//!
//! [[site.social]]
//! icon = "github"
//! link = "https://github.com/example/programming-bootcamp"
//!
//! [site.edit_link]
//! pattern = "https://github.com/example/site/edit/main/docs/:path"
//! ```

mod edit_link;
mod head;
mod sitemap;
mod social;

pub use edit_link::EditLinkConfig;
pub use head::HeadTag;
pub use sitemap::SitemapConfig;
pub use social::SocialLink;

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ConfigDiagnostics;

/// Site metadata and site-level features.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Site title displayed in the browser tab and navbar.
    #[config(default = "My Documentation", inline_doc)]
    pub title: String,

    /// Site description for meta tags.
    #[config(inline_doc)]
    pub description: String,

    /// Language code (BCP 47, e.g. "en", "en-US").
    #[config(default = "en", inline_doc)]
    pub language: String,

    /// URL path prefix for deployed assets (e.g. "/my-project/").
    #[config(default = "/", inline_doc)]
    pub base: String,

    /// Navbar logo path (site-root-relative).
    #[config(inline_doc)]
    pub logo: Option<PathBuf>,

    /// Show last-updated timestamps (renderer feature toggle).
    #[config(inline_doc)]
    pub last_updated: bool,

    /// Head tag descriptors injected into generated page headers.
    #[config(skip)]
    pub head: Vec<HeadTag>,

    /// Sitemap generation settings.
    #[config(sub)]
    pub sitemap: SitemapConfig,

    /// Social icon links.
    #[config(skip)]
    pub social: Vec<SocialLink>,

    /// Edit-this-page link settings.
    #[config(sub)]
    pub edit_link: EditLinkConfig,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            language: "en".into(),
            base: "/".into(),
            logo: None,
            last_updated: false,
            head: Vec::new(),
            sitemap: SitemapConfig::default(),
            social: Vec::new(),
            edit_link: EditLinkConfig::default(),
        }
    }
}

impl SiteSectionConfig {
    /// Validate site metadata and all subsections.
    ///
    /// # Checks
    /// - `title` must be set
    /// - `base` must start and end with `/`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "site title is required",
                "set title, e.g.: \"My Documentation\"",
            );
        }

        if !self.base.starts_with('/') || !self.base.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("base '{}' must start and end with '/'", self.base),
                "use format like \"/\" or \"/my-project/\"",
            );
        }

        head::validate_head(&self.head, crate::config::FieldPath::new("site.head"), diag);
        social::validate_social(&self.social, crate::config::FieldPath::new("site.social"), diag);
        self.sitemap.validate(&self.base, diag);
        self.edit_link.validate(diag);
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.language, "en");
        assert_eq!(config.site.base, "/");
        assert!(config.site.logo.is_none());
        assert!(!config.site.last_updated);
        assert!(config.site.head.is_empty());
        assert!(config.site.social.is_empty());
    }

    #[test]
    fn test_site_metadata() {
        let config = test_parse_config(
            "[site]\nlanguage = \"en-US\"\nbase = \"/bootcamp/\"\nlogo = \"/logo.svg\"\nlast_updated = true",
        );
        assert_eq!(config.site.language, "en-US");
        assert_eq!(config.site.base, "/bootcamp/");
        assert_eq!(config.site.logo, Some(PathBuf::from("/logo.svg")));
        assert!(config.site.last_updated);
    }

    #[test]
    fn test_base_validation() {
        let config = test_parse_config("[site]\nbase = \"/bootcamp\"");
        let mut diag = crate::config::ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "site.base")
        );
    }
}
