//! Descriptor validation command.

mod report;
mod resolve;

use anyhow::Result;
use rustc_hash::FxHashSet;

use crate::cli::ValidateArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::nav::{NavNode, SidebarGroup};
use crate::utils::{plural_count, plural_s};

use report::ValidationReport;
pub use resolve::{resolve_route, route_candidates};

/// Validate the descriptor, and optionally every sidebar route.
pub fn validate_site(config: &SiteConfig, args: &ValidateArgs) -> Result<()> {
    let mut report = ValidationReport::default();

    // Descriptor checks (same pass the other commands run at load time)
    let diag = config.collect_diagnostics();
    diag.print_hints_and_warnings();
    for err in diag.errors() {
        report.add_descriptor(
            err.field.as_str().to_string(),
            err.message.clone(),
            err.hint.clone().unwrap_or_default(),
        );
    }

    if args.routes {
        check_routes(config, &mut report);
    }

    if report.is_empty() {
        log!("validate"; "{}", report);
        return Ok(());
    }

    report.print();
    eprintln!();

    if args.warn_only {
        log!("warning"; "{}", report);
        return Ok(());
    }

    anyhow::bail!(
        "found {} validation error{}",
        report.error_count(),
        plural_s(report.error_count())
    );
}

/// Check that every internal route resolves to a content source file.
///
/// Broken routes are reported under the nav entry or sidebar group path
/// that references them (e.g. `sidebar[0].items[2]`).
fn check_routes(config: &SiteConfig, report: &mut ValidationReport) {
    let content_dir = config.content_dir();

    let mut targets: Vec<(String, String)> = Vec::new();
    for (i, item) in config.nav.iter().enumerate() {
        if !item.is_external() {
            targets.push((format!("nav[{i}]"), item.link.clone()));
        }
    }
    for (i, group) in config.sidebar.iter().enumerate() {
        collect_group_routes(&format!("sidebar[{i}]"), group, &mut targets);
    }

    // Shared routes are checked once, under their first origin
    let mut seen = FxHashSet::default();
    targets.retain(|(_, route)| seen.insert(route.clone()));

    log!("validate"; "checking {}", plural_count(targets.len(), "route"));

    for (origin, route) in targets {
        if resolve_route(&content_dir, &route).is_none() {
            let tried = route_candidates(&route)
                .iter()
                .map(|c| c.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            report.add_route(origin, route, format!("(tried: {tried})"));
        }
    }
}

/// Collect internal leaf routes together with the item path referencing them.
fn collect_group_routes(path: &str, group: &SidebarGroup, out: &mut Vec<(String, String)>) {
    for (i, node) in group.items.iter().enumerate() {
        match node {
            NavNode::Link(item) if !item.is_external() => {
                out.push((format!("{path}.items[{i}]"), item.link.clone()));
            }
            NavNode::Link(_) => {}
            NavNode::Group(nested) => {
                collect_group_routes(&format!("{path}.items[{i}]"), nested, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_check_routes_reports_missing() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("docs/index.md"), "# home").unwrap();

        let mut config = test_parse_config(
            r#"
[[nav]]
text = "Home"
link = "/"

[[sidebar]]
text = "Guide"
items = [{ text = "Missing", link = "/guide/missing" }]
"#,
        );
        config.root = temp.path().to_path_buf();

        let mut report = ValidationReport::default();
        check_routes(&config, &mut report);

        assert_eq!(report.route_error_count(), 1);
        let errs = &report.routes["sidebar[0].items[0]"];
        assert_eq!(errs[0].target, "/guide/missing");
    }

    #[test]
    fn test_broken_route_reports_nested_origin() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("docs/index.md"), "# home").unwrap();

        let mut config = test_parse_config(
            r#"
[[sidebar]]
text = "Guide"
items = [
    { text = "Home", link = "/" },
    { text = "Advanced", items = [{ text = "Gone", link = "/advanced/gone" }] },
]
"#,
        );
        config.root = temp.path().to_path_buf();

        let mut report = ValidationReport::default();
        check_routes(&config, &mut report);

        assert_eq!(report.route_error_count(), 1);
        let errs = &report.routes["sidebar[0].items[1].items[0]"];
        assert_eq!(errs[0].target, "/advanced/gone");
    }

    #[test]
    fn test_check_routes_all_resolved() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("docs/guide")).unwrap();
        fs::write(temp.path().join("docs/index.md"), "# home").unwrap();
        fs::write(temp.path().join("docs/guide/setup.md"), "# setup").unwrap();

        let mut config = test_parse_config(
            r#"
[[sidebar]]
text = "Guide"
items = [{ text = "Setup", link = "/guide/setup" }, { text = "Home", link = "/" }]
"#,
        );
        config.root = temp.path().to_path_buf();

        let mut report = ValidationReport::default();
        check_routes(&config, &mut report);

        assert!(report.is_empty());
    }
}
