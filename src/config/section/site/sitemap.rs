//! `[site.sitemap]` sitemap settings.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::util::extract_url_path;

/// Sitemap generation settings.
///
/// The sitemap lists every internal sidebar route as an absolute URL, so
/// `hostname` is required whenever generation is enabled.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.sitemap")]
pub struct SitemapConfig {
    /// Generate sitemap.xml on export.
    #[config(inline_doc)]
    pub enable: bool,

    /// Absolute site origin, e.g. "https://example.github.io/my-project/".
    #[config(inline_doc)]
    pub hostname: Option<String>,

    /// Output filename relative to the export directory.
    #[config(default = "sitemap.xml", inline_doc)]
    pub path: String,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: false,
            hostname: None,
            path: "sitemap.xml".into(),
        }
    }
}

impl SitemapConfig {
    /// Validate sitemap settings against the configured base path.
    pub fn validate(&self, base: &str, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }

        let Some(hostname) = &self.hostname else {
            diag.error_with_hint(
                Self::FIELDS.hostname,
                "hostname is required when sitemap is enabled",
                "set hostname, e.g.: \"https://example.com\"",
            );
            return;
        };

        match url::Url::parse(hostname) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
                if url.host_str().is_none() {
                    diag.error(Self::FIELDS.hostname, format!("'{hostname}' has no host"));
                } else if let Some(url_path) = extract_url_path(hostname)
                    && url_path != base
                {
                    diag.error_with_hint(
                        Self::FIELDS.hostname,
                        format!("hostname path '{url_path}' does not match base '{base}'"),
                        "sitemap URLs are built from hostname alone; align its path with site.base or drop it",
                    );
                }
            }
            Ok(url) => {
                diag.error(
                    Self::FIELDS.hostname,
                    format!("unsupported scheme '{}', expected http or https", url.scheme()),
                );
            }
            Err(_) => {
                diag.error_with_hint(
                    Self::FIELDS.hostname,
                    format!("'{hostname}' is not a valid URL"),
                    "use an absolute URL, e.g.: \"https://example.com\"",
                );
            }
        }

        if self.path.starts_with('/') || self.path.is_empty() {
            diag.error(
                Self::FIELDS.path,
                "path must be a relative filename like \"sitemap.xml\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled(hostname: Option<&str>) -> SitemapConfig {
        SitemapConfig {
            enable: true,
            hostname: hostname.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_disabled_skips_checks() {
        let mut diag = ConfigDiagnostics::new();
        SitemapConfig::default().validate("/", &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_hostname_required_when_enabled() {
        let mut diag = ConfigDiagnostics::new();
        enabled(None).validate("/", &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.sitemap.hostname");
    }

    #[test]
    fn test_valid_hostname_passes() {
        let mut diag = ConfigDiagnostics::new();
        enabled(Some("https://example.github.io/bootcamp/")).validate("/bootcamp/", &mut diag);
        assert!(diag.is_empty(), "{diag}");
    }

    #[test]
    fn test_hostname_base_mismatch() {
        let mut diag = ConfigDiagnostics::new();
        enabled(Some("https://example.github.io/other/")).validate("/bootcamp/", &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("does not match base"));
    }

    #[test]
    fn test_ftp_scheme_rejected() {
        let mut diag = ConfigDiagnostics::new();
        enabled(Some("ftp://example.com/")).validate("/", &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("unsupported scheme"));
    }
}
