//! `[site.edit_link]` edit-this-page link settings.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Edit-this-page link settings.
///
/// `pattern` is a URL template; the literal `:path` placeholder is
/// replaced with the page's source path relative to the content dir.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.edit_link")]
pub struct EditLinkConfig {
    /// URL template containing a ":path" placeholder.
    #[config(inline_doc)]
    pub pattern: Option<String>,

    /// Link label.
    #[config(default = "Edit this page", inline_doc)]
    pub text: String,
}

impl Default for EditLinkConfig {
    fn default() -> Self {
        Self {
            pattern: None,
            text: "Edit this page".into(),
        }
    }
}

impl EditLinkConfig {
    /// Whether an edit link is configured at all.
    pub fn is_enabled(&self) -> bool {
        self.pattern.is_some()
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(pattern) = &self.pattern else {
            return;
        };

        if !pattern.contains(":path") {
            diag.error_with_hint(
                Self::FIELDS.pattern,
                "pattern has no ':path' placeholder",
                "e.g.: \"https://github.com/you/site/edit/main/docs/:path\"",
            );
        }

        match url::Url::parse(pattern) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            _ => diag.error(
                Self::FIELDS.pattern,
                format!("'{pattern}' is not an absolute http(s) URL"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_pattern_passes() {
        let mut diag = ConfigDiagnostics::new();
        EditLinkConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_missing_placeholder_rejected() {
        let config = EditLinkConfig {
            pattern: Some("https://github.com/example/site/edit/main/docs/".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains(":path"));
    }

    #[test]
    fn test_valid_pattern_passes() {
        let config = EditLinkConfig {
            pattern: Some("https://github.com/example/site/edit/main/docs/:path".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(diag.is_empty(), "{diag}");
    }
}
