//! `[[site.head]]` head tag descriptors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Tags that make sense inside a document `<head>`.
const ALLOWED_TAGS: &[&str] = &["meta", "link", "script", "style", "base"];

/// One tag to inject into every generated page's `<head>`.
///
/// ```toml
/// [[site.head]]
/// tag = "link"
/// attrs = { rel = "icon", href = "/favicon.ico" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadTag {
    /// Tag name (`meta`, `link`, `script`, `style` or `base`).
    pub tag: String,
    /// Attribute name/value pairs, emitted in sorted order.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

/// Validate head tag entries.
pub fn validate_head(head: &[HeadTag], field: FieldPath, diag: &mut ConfigDiagnostics) {
    for (i, entry) in head.iter().enumerate() {
        if !ALLOWED_TAGS.contains(&entry.tag.as_str()) {
            diag.error_with_hint(
                FieldPath::indexed(field.as_str(), i, "tag"),
                format!("'{}' is not a head tag", entry.tag),
                format!("allowed tags: {}", ALLOWED_TAGS.join(", ")),
            );
        }
        if entry.attrs.is_empty() {
            diag.error(
                FieldPath::indexed(field.as_str(), i, "attrs"),
                "head tag has no attributes",
            );
        } else if entry.attrs.keys().any(|k| k.is_empty()) {
            diag.error(
                FieldPath::indexed(field.as_str(), i, "attrs"),
                "attribute name is empty",
            );
        }
    }
}
