//! `[[site.social]]` social icon links.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// One social icon link shown in the navbar.
///
/// ```toml
/// [[site.social]]
/// icon = "github"
/// link = "https://github.com/example/programming-bootcamp"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name (e.g. "github", "discord", "x").
    pub icon: String,
    /// Absolute URL the icon points to.
    pub link: String,
}

/// Validate social links: icon set, link an absolute URL.
pub fn validate_social(social: &[SocialLink], field: FieldPath, diag: &mut ConfigDiagnostics) {
    for (i, entry) in social.iter().enumerate() {
        if entry.icon.is_empty() {
            diag.error(FieldPath::indexed(field.as_str(), i, "icon"), "icon is empty");
        }
        match url::Url::parse(&entry.link) {
            Ok(url) if url.has_host() => {}
            _ => diag.error_with_hint(
                FieldPath::indexed(field.as_str(), i, "link"),
                format!("'{}' is not an absolute URL", entry.link),
                "social links must include a scheme and host, e.g.: \"https://github.com/you\"",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_link_passes() {
        let social = vec![SocialLink {
            icon: "github".into(),
            link: "https://github.com/example/site".into(),
        }];
        let mut diag = ConfigDiagnostics::new();
        validate_social(&social, FieldPath::new("site.social"), &mut diag);
        assert!(diag.is_empty(), "{diag}");
    }

    #[test]
    fn test_relative_link_rejected() {
        let social = vec![SocialLink {
            icon: "github".into(),
            link: "/about".into(),
        }];
        let mut diag = ConfigDiagnostics::new();
        validate_social(&social, FieldPath::new("site.social"), &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.social[0].link");
    }
}
