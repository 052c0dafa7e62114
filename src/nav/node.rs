//! Navigation node types and traversal.

use serde::{Deserialize, Serialize};

use crate::utils::route::is_external_link;

/// A labeled link: a top navigation entry or a sidebar leaf.
///
/// `link` is either a site-root-relative route (`/guide/setup`) or an
/// external URL (`https://...`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display label.
    pub text: String,
    /// Target route or external URL.
    pub link: String,
}

impl NavItem {
    /// Whether this item points outside the site.
    #[inline]
    pub fn is_external(&self) -> bool {
        is_external_link(&self.link)
    }
}

/// A sidebar tree node: either a leaf link or a nested group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavNode {
    /// Leaf node with exactly one target path.
    Link(NavItem),
    /// Non-leaf node: label plus ordered children, no target path.
    Group(SidebarGroup),
}

impl NavNode {
    /// Leaf link, if this node is a leaf.
    pub fn link(&self) -> Option<&NavItem> {
        match self {
            Self::Link(item) => Some(item),
            Self::Group(_) => None,
        }
    }

    /// Display label of this node.
    pub fn text(&self) -> &str {
        match self {
            Self::Link(item) => &item.text,
            Self::Group(group) => &group.text,
        }
    }
}

/// A collapsible named section of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group label.
    pub text: String,
    /// Collapsed by default in the rendered sidebar.
    #[serde(default)]
    pub collapsed: bool,
    /// Ordered child nodes.
    #[serde(default)]
    pub items: Vec<NavNode>,
}

impl SidebarGroup {
    /// Depth-first pre-order traversal of this group's subtree.
    ///
    /// Nodes are yielded in declaration order, so a renderer walking the
    /// result produces list entries in exactly the authored order.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: self.items.iter().rev().collect(),
        }
    }
}

/// Depth-first iterator over sidebar nodes. See [`SidebarGroup::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a NavNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a NavNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let NavNode::Group(group) = node {
            self.stack.extend(group.items.iter().rev());
        }
        Some(node)
    }
}

/// Collect all internal leaf routes of the sidebar, in traversal order.
///
/// External leaves are skipped; duplicates across groups are kept (the
/// caller decides whether to deduplicate).
pub fn leaf_routes(groups: &[SidebarGroup]) -> Vec<&str> {
    let mut routes = Vec::new();
    for group in groups {
        for node in group.walk() {
            if let Some(item) = node.link()
                && !item.is_external()
            {
                routes.push(item.link.as_str());
            }
        }
    }
    routes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(text: &str, link: &str) -> NavNode {
        NavNode::Link(NavItem {
            text: text.into(),
            link: link.into(),
        })
    }

    fn group(text: &str, collapsed: bool, items: Vec<NavNode>) -> SidebarGroup {
        SidebarGroup {
            text: text.into(),
            collapsed,
            items,
        }
    }

    #[test]
    fn test_walk_order_is_declaration_order() {
        let g = group(
            "Phase 1: Setup",
            false,
            vec![
                leaf("Overview", "/phase-1/"),
                NavNode::Group(group(
                    "Steps",
                    true,
                    vec![leaf("Install", "/phase-1/install"), leaf("Verify", "/phase-1/verify")],
                )),
                leaf("Wrap Up", "/phase-1/wrap-up"),
            ],
        );

        let texts: Vec<&str> = g.walk().map(NavNode::text).collect();
        assert_eq!(
            texts,
            vec!["Overview", "Steps", "Install", "Verify", "Wrap Up"]
        );
    }

    #[test]
    fn test_leaf_routes_skips_external() {
        let groups = vec![group(
            "Reference",
            true,
            vec![
                leaf("Git", "/reference/git"),
                leaf("Upstream", "https://git-scm.com/docs"),
            ],
        )];

        assert_eq!(leaf_routes(&groups), vec!["/reference/git"]);
    }

    #[test]
    fn test_untagged_deserialization() {
        let toml = r#"
text = "Phase 7"
collapsed = true

[[items]]
text = "Overview"
link = "/phase-7/"

[[items]]
text = "Slice 1"
collapsed = true
items = [{ text = "Goals", link = "/phase-7/slice-1/goals" }]
"#;
        let g: SidebarGroup = toml::from_str(toml).unwrap();
        assert!(g.collapsed);
        assert_eq!(g.items.len(), 2);
        assert!(matches!(g.items[0], NavNode::Link(_)));
        assert!(matches!(g.items[1], NavNode::Group(_)));
    }
}
