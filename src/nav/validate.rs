//! Structural validation of the navigation tree.
//!
//! The TOML input cannot structurally enforce the tree invariants, so they
//! are checked here after deserialization:
//!
//! - every group has a label and at least one item
//! - every internal leaf route is syntactically valid
//! - no two sibling leaves in the same group share a target path

use rustc_hash::FxHashSet;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::nav::{NavItem, NavNode, SidebarGroup};
use crate::utils::route::route_syntax_error;

/// Validate top navigation bar items.
///
/// Nav entries may be internal routes or external URLs.
pub fn validate_nav(nav: &[NavItem], diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashSet::default();

    for (i, item) in nav.iter().enumerate() {
        if item.text.is_empty() {
            diag.error(FieldPath::indexed("nav", i, "text"), "label is empty");
        }
        validate_link(item, FieldPath::indexed("nav", i, "link"), diag);

        if !item.link.is_empty() && !seen.insert(item.link.as_str()) {
            diag.error(
                FieldPath::indexed("nav", i, "link"),
                format!("duplicate nav link '{}'", item.link),
            );
        }
    }
}

/// Validate the sidebar tree.
pub fn validate_sidebar(groups: &[SidebarGroup], diag: &mut ConfigDiagnostics) {
    for (i, group) in groups.iter().enumerate() {
        validate_group(group, &format!("sidebar[{i}]"), diag);
    }
}

/// Validate one group and recurse into nested groups.
fn validate_group(group: &SidebarGroup, path: &str, diag: &mut ConfigDiagnostics) {
    if group.text.is_empty() {
        diag.error(leaked(format!("{path}.text")), "group label is empty");
    }

    if group.items.is_empty() {
        diag.error_with_hint(
            leaked(format!("{path}.items")),
            "group has no items",
            "add at least one item or remove the group",
        );
    }

    // Sibling duplicate detection: only leaves at this level compete
    let mut sibling_links = FxHashSet::default();

    for (i, node) in group.items.iter().enumerate() {
        match node {
            NavNode::Link(item) => {
                let field = leaked(format!("{path}.items[{i}].link"));
                if item.text.is_empty() {
                    diag.error(leaked(format!("{path}.items[{i}].text")), "label is empty");
                }
                if item.is_external() {
                    diag.error_with_hint(
                        field,
                        format!("external link '{}' not allowed in sidebar", item.link),
                        "sidebar leaves must be site routes; put external links in [[nav]] or [[site.social]]",
                    );
                    continue;
                }
                if let Some(problem) = route_syntax_error(&item.link) {
                    diag.error(field, problem);
                } else if !sibling_links.insert(item.link.as_str()) {
                    diag.error(
                        field,
                        format!("duplicate sibling link '{}'", item.link),
                    );
                }
            }
            NavNode::Group(nested) => {
                validate_group(nested, &format!("{path}.items[{i}]"), diag);
            }
        }
    }
}

/// Validate a nav item link (internal route or external URL).
fn validate_link(item: &NavItem, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if item.is_external() {
        if url::Url::parse(&item.link).is_err() {
            diag.error(field, format!("invalid external URL '{}'", item.link));
        }
        return;
    }
    if let Some(problem) = route_syntax_error(&item.link) {
        diag.error(field, problem);
    }
}

/// Leak a dynamic field path (diagnostics only exist on the error path).
fn leaked(path: String) -> FieldPath {
    FieldPath::new(Box::leak(path.into_boxed_str()))
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

    fn group(text: &str, items: Vec<NavNode>) -> SidebarGroup {
        SidebarGroup {
            text: text.into(),
            collapsed: false,
            items,
        }
    }

    #[test]
    fn test_valid_sidebar_passes() {
        let groups = vec![group(
            "Getting Started",
            vec![leaf("Welcome", "/"), leaf("Overview", "/overview")],
        )];
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&groups, &mut diag);
        assert!(diag.is_empty(), "{diag}");
    }

    #[test]
    fn test_empty_group_rejected() {
        let groups = vec![group("Empty", vec![])];
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&groups, &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].field.as_str().contains("items"));
    }

    #[test]
    fn test_duplicate_sibling_links_rejected() {
        let groups = vec![group(
            "Reference",
            vec![leaf("Git", "/reference/git"), leaf("Git Again", "/reference/git")],
        )];
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&groups, &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("duplicate sibling link"));
    }

    #[test]
    fn test_same_link_in_different_groups_allowed() {
        let groups = vec![
            group("A", vec![leaf("Overview", "/overview")]),
            group("B", vec![leaf("Overview", "/overview")]),
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&groups, &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_nested_duplicates_are_not_siblings() {
        let groups = vec![group(
            "Phase 7",
            vec![
                leaf("Overview", "/phase-7/"),
                NavNode::Group(group("Slice 1", vec![leaf("Overview", "/phase-7/")])),
            ],
        )];
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&groups, &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_external_sidebar_leaf_rejected() {
        let groups = vec![group("Links", vec![leaf("GitHub", "https://github.com")])];
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&groups, &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("external link"));
    }

    #[test]
    fn test_bad_route_syntax_rejected() {
        let groups = vec![group("Broken", vec![leaf("No Slash", "overview")])];
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&groups, &mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_nav_allows_external_links() {
        let nav = vec![
            NavItem {
                text: "Home".into(),
                link: "/".into(),
            },
            NavItem {
                text: "GitHub".into(),
                link: "https://github.com/example/site".into(),
            },
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_nav(&nav, &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_nav_duplicate_links_rejected() {
        let nav = vec![
            NavItem {
                text: "Home".into(),
                link: "/".into(),
            },
            NavItem {
                text: "Start".into(),
                link: "/".into(),
            },
        ];
        let mut diag = ConfigDiagnostics::new();
        validate_nav(&nav, &mut diag);
        assert_eq!(diag.len(), 1);
    }
}
