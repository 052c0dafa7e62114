//! Route string utilities.
//!
//! Routes are site-root-relative paths (`/phase-1/overview`), distinct from
//! deployed hrefs which carry the `site.base` prefix. External links (any
//! string with a URL scheme) pass through the descriptor untouched.

use percent_encoding::percent_decode_str;

/// Strip leading slash from a route
///
/// # Examples
/// ```
/// use waypost::utils::route::strip_leading_slash;
/// assert_eq!(strip_leading_slash("/guide/setup"), "guide/setup");
/// assert_eq!(strip_leading_slash("/"), "");
/// ```
#[inline]
pub fn strip_leading_slash(route: &str) -> &str {
    route.trim_start_matches('/')
}

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
///
/// # Examples
/// ```
/// use waypost::utils::route::is_external_link;
/// assert!(is_external_link("https://example.com"));
/// assert!(is_external_link("mailto:user@example.com"));
/// assert!(!is_external_link("/about"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Split a route into path and fragment parts
///
/// # Examples
/// ```
/// use waypost::utils::route::split_path_fragment;
/// assert_eq!(split_path_fragment("/about#team"), ("/about", "team"));
/// assert_eq!(split_path_fragment("/about"), ("/about", ""));
/// ```
#[inline]
pub fn split_path_fragment(route: &str) -> (&str, &str) {
    route.split_once('#').unwrap_or((route, ""))
}

/// Check a route for syntax problems.
///
/// Returns a human-readable description of the first problem found, or
/// `None` if the route is a well-formed site-root-relative path.
pub fn route_syntax_error(route: &str) -> Option<String> {
    if route.is_empty() {
        return Some("route is empty".into());
    }
    if is_external_link(route) {
        return Some("route has a URL scheme, expected a site-root-relative path".into());
    }
    if !route.starts_with('/') {
        return Some("route must start with '/'".into());
    }
    let (path, _fragment) = split_path_fragment(route);
    if path.contains("//") {
        return Some("route contains empty path segment '//'".into());
    }
    if path.contains('\\') {
        return Some("route contains '\\', use '/' separators".into());
    }
    if path.chars().any(|c| c.is_whitespace()) {
        return Some("route contains whitespace".into());
    }
    if path.split('/').any(|seg| seg == "." || seg == "..") {
        return Some("route contains relative segment '.' or '..'".into());
    }
    if percent_decode_str(path).decode_utf8().is_err() {
        return Some("route is not valid percent-encoded UTF-8".into());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("http://example.com"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(is_external_link("tel:+1234567890"));
        assert!(!is_external_link("/about"));
        assert!(!is_external_link("./file.txt"));
        assert!(!is_external_link("#section"));
    }

    #[test]
    fn test_split_path_fragment() {
        assert_eq!(split_path_fragment("/about#team"), ("/about", "team"));
        assert_eq!(split_path_fragment("/about"), ("/about", ""));
        assert_eq!(split_path_fragment("#section"), ("", "section"));
    }

    #[test]
    fn test_route_syntax_ok() {
        assert_eq!(route_syntax_error("/"), None);
        assert_eq!(route_syntax_error("/guide/setup"), None);
        assert_eq!(route_syntax_error("/phase-1-foundations/"), None);
        assert_eq!(route_syntax_error("/reference/git#basics"), None);
        assert_eq!(route_syntax_error("/caf%C3%A9"), None);
    }

    #[test]
    fn test_route_syntax_errors() {
        assert!(route_syntax_error("").is_some());
        assert!(route_syntax_error("guide/setup").is_some());
        assert!(route_syntax_error("https://example.com").is_some());
        assert!(route_syntax_error("/a//b").is_some());
        assert!(route_syntax_error("/a b").is_some());
        assert!(route_syntax_error("/a/../b").is_some());
        assert!(route_syntax_error("/a\\b").is_some());
    }

    #[test]
    fn test_strip_leading_slash() {
        assert_eq!(strip_leading_slash("/blog/post"), "blog/post");
        assert_eq!(strip_leading_slash("blog/post"), "blog/post");
        assert_eq!(strip_leading_slash("/"), "");
        assert_eq!(strip_leading_slash(""), "");
    }
}
