//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Used with `#[derive(Config)]` to generate compile-time checked
/// field path accessors.
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "site")]
/// pub struct SiteSectionConfig {
///     pub base: String,
/// }
///
/// // Generated:
/// impl SiteSectionConfig {
///     pub const FIELDS: SiteSectionConfigFields = ...;
/// }
///
/// // Usage:
/// diag.error(SiteSectionConfig::FIELDS.base, "must start with '/'");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Build a field path for an indexed entry, e.g. `sidebar[3].items`.
    ///
    /// The path is leaked; diagnostics are terminal output on the error
    /// path, so the allocation count stays trivially bounded.
    pub fn indexed(base: &str, index: usize, rest: &str) -> Self {
        let path = if rest.is_empty() {
            format!("{base}[{index}]")
        } else {
            format!("{base}[{index}].{rest}")
        };
        Self(Box::leak(path.into_boxed_str()))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_paths() {
        assert_eq!(FieldPath::indexed("sidebar", 2, "items").as_str(), "sidebar[2].items");
        assert_eq!(FieldPath::indexed("nav", 0, "").as_str(), "nav[0]");
    }
}
