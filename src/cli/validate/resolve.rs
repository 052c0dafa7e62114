//! Route to source file resolution.
//!
//! Maps a site-root-relative route to the Markdown source file a
//! renderer would read for it:
//!
//! - `/`           -> `index.md`
//! - `/guide/`     -> `guide/index.md`
//! - `/guide/git`  -> `guide/git.md` | `guide/git/index.md` | `guide/git.html`

use std::path::{Path, PathBuf};

use crate::utils::route::{split_path_fragment, strip_leading_slash};

/// Candidate source paths for a route, relative to the content dir,
/// in lookup order.
pub fn route_candidates(route: &str) -> Vec<PathBuf> {
    let (path, _fragment) = split_path_fragment(route);
    let rel = strip_leading_slash(path);

    if rel.is_empty() {
        return vec![PathBuf::from("index.md")];
    }

    if let Some(dir) = rel.strip_suffix('/') {
        return vec![Path::new(dir).join("index.md")];
    }

    vec![
        PathBuf::from(format!("{rel}.md")),
        Path::new(rel).join("index.md"),
        PathBuf::from(format!("{rel}.html")),
    ]
}

/// Resolve a route against the content directory.
///
/// Returns the first existing candidate.
pub fn resolve_route(content_dir: &Path, route: &str) -> Option<PathBuf> {
    route_candidates(route)
        .into_iter()
        .map(|candidate| content_dir.join(candidate))
        .find(|path| path.is_file())
}
