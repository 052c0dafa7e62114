//! Resolved descriptor generation.
//!
//! Produces `site.json`: the descriptor with every internal navigation
//! link rewritten to its deployed href (base-prefixed). Renderers consume
//! this file instead of re-implementing base resolution.

use crate::config::{
    HeadTag, MarkdownConfig, SearchConfig, SiteConfig, SiteSectionConfig, ThemeSectionConfig,
};
use crate::log;
use crate::nav::{NavItem, NavNode, SidebarGroup};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Resolve a link against the site base.
///
/// External URLs pass through unchanged; internal routes are prefixed
/// with `base`. The route keeps its own leading slash, so the base's
/// trailing slash is dropped before joining.
pub fn resolve_href(base: &str, link: &str) -> String {
    if crate::utils::route::is_external_link(link) {
        return link.to_string();
    }
    format!("{}{}", base.trim_end_matches('/'), link)
}

/// The resolved site descriptor written to `site.json`.
#[derive(Debug, Serialize)]
pub struct Descriptor {
    pub site: SiteSectionConfig,
    pub head: Vec<HeadTag>,
    pub nav: Vec<NavItem>,
    pub sidebar: Vec<SidebarGroup>,
    pub search: SearchConfig,
    pub markdown: MarkdownConfig,
    pub theme: ThemeSectionConfig,
}

impl Descriptor {
    /// Build the resolved descriptor from a validated config.
    pub fn build(config: &SiteConfig) -> Self {
        let base = &config.site.base;

        let mut site = config.site.clone();
        // head and social are surfaced as top-level resolved lists
        let head = std::mem::take(&mut site.head);
        if let Some(logo) = site.logo.take() {
            let logo = logo.to_string_lossy();
            site.logo = Some(resolve_href(base, &logo).into());
        }

        Self {
            site,
            head,
            nav: config
                .nav
                .iter()
                .map(|item| resolve_item(base, item))
                .collect(),
            sidebar: config
                .sidebar
                .iter()
                .map(|group| resolve_group(base, group))
                .collect(),
            search: config.search.clone(),
            markdown: config.markdown.clone(),
            theme: config.theme.clone(),
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize descriptor")
    }

    /// Write `site.json` into the output directory.
    pub fn write(&self, output_dir: &Path) -> Result<()> {
        let path = output_dir.join("site.json");
        fs::write(&path, self.to_json()?)
            .with_context(|| format!("Failed to write descriptor to {}", path.display()))?;

        log!("export"; "site.json");
        Ok(())
    }
}

fn resolve_item(base: &str, item: &NavItem) -> NavItem {
    NavItem {
        text: item.text.clone(),
        link: resolve_href(base, &item.link),
    }
}

fn resolve_group(base: &str, group: &SidebarGroup) -> SidebarGroup {
    SidebarGroup {
        text: group.text.clone(),
        collapsed: group.collapsed,
        items: group
            .items
            .iter()
            .map(|node| match node {
                NavNode::Link(item) => NavNode::Link(resolve_item(base, item)),
                NavNode::Group(nested) => NavNode::Group(resolve_group(base, nested)),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_resolve_href() {
        assert_eq!(resolve_href("/", "/guide"), "/guide");
        assert_eq!(resolve_href("/bootcamp/", "/guide"), "/bootcamp/guide");
        assert_eq!(resolve_href("/bootcamp/", "/"), "/bootcamp/");
        assert_eq!(
            resolve_href("/bootcamp/", "https://github.com/example"),
            "https://github.com/example"
        );
    }

    #[test]
    fn test_nested_links_are_resolved() {
        let config = test_parse_config(
            r#"
[site]
title = "Test"
base = "/bootcamp/"

[[nav]]
text = "Home"
link = "/"

[[sidebar]]
text = "Phase 1"
items = [
    { text = "Overview", link = "/phase-1/" },
    { text = "Steps", items = [{ text = "Install", link = "/phase-1/install" }] },
]
"#,
        );
        let descriptor = Descriptor::build(&config);

        assert_eq!(descriptor.nav[0].link, "/bootcamp/");
        let NavNode::Link(overview) = &descriptor.sidebar[0].items[0] else {
            panic!("expected leaf");
        };
        assert_eq!(overview.link, "/bootcamp/phase-1/");
        let NavNode::Group(steps) = &descriptor.sidebar[0].items[1] else {
            panic!("expected group");
        };
        let NavNode::Link(install) = &steps.items[0] else {
            panic!("expected leaf");
        };
        assert_eq!(install.link, "/bootcamp/phase-1/install");
    }

    #[test]
    fn test_head_is_lifted_and_logo_resolved() {
        let config = test_parse_config(
            r##"
[site]
title = "Test"
base = "/bootcamp/"
logo = "/logo.svg"

[[site.head]]
tag = "meta"
attrs = { name = "theme-color", content = "#3eaf7c" }
"##,
        );
        let descriptor = Descriptor::build(&config);

        assert_eq!(descriptor.head.len(), 1);
        assert!(descriptor.site.head.is_empty());
        assert_eq!(
            descriptor.site.logo,
            Some(std::path::PathBuf::from("/bootcamp/logo.svg"))
        );
    }

    #[test]
    fn test_json_output_shape() {
        let config = test_parse_config("[site]\ntitle = \"Test\"");
        let json = Descriptor::build(&config).to_json().unwrap();

        assert!(json.contains("\"title\": \"Test\""));
        assert!(json.contains("\"provider\": \"local\""));
    }
}
