//! `[search]` section configuration.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Which search backend the rendered site wires up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// No search UI.
    None,
    /// Client-side index built at export time.
    #[default]
    Local,
    /// Hosted Algolia DocSearch index.
    Algolia,
}

/// Search settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "search")]
pub struct SearchConfig {
    /// Search backend: "none", "local" or "algolia".
    #[config(inline_doc)]
    pub provider: SearchProvider,

    /// Algolia credentials, only read when provider = "algolia".
    #[config(sub)]
    pub algolia: AlgoliaConfig,
}

/// Algolia DocSearch credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "search.algolia", status = experimental)]
pub struct AlgoliaConfig {
    /// Algolia application ID.
    #[config(inline_doc)]
    pub app_id: String,

    /// Search-only API key (safe to publish).
    #[config(inline_doc)]
    pub api_key: String,

    /// Index name.
    #[config(inline_doc)]
    pub index: String,
}

impl SearchConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.provider != SearchProvider::Algolia {
            return;
        }

        for (value, field) in [
            (&self.algolia.app_id, AlgoliaConfig::FIELDS.app_id),
            (&self.algolia.api_key, AlgoliaConfig::FIELDS.api_key),
            (&self.algolia.index, AlgoliaConfig::FIELDS.index),
        ] {
            if value.is_empty() {
                diag.error_with_hint(
                    field,
                    "required when search provider is \"algolia\"",
                    "fill in [search.algolia] or switch provider to \"local\"",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_provider_is_local() {
        let config = test_parse_config("");
        assert_eq!(config.search.provider, SearchProvider::Local);
    }

    #[test]
    fn test_provider_parses_lowercase() {
        let config = test_parse_config("[search]\nprovider = \"none\"");
        assert_eq!(config.search.provider, SearchProvider::None);
    }

    #[test]
    fn test_algolia_requires_credentials() {
        let config = test_parse_config("[search]\nprovider = \"algolia\"");
        let mut diag = ConfigDiagnostics::new();
        config.search.validate(&mut diag);
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_algolia_with_credentials_passes() {
        let config = test_parse_config(
            "[search]\nprovider = \"algolia\"\n\n[search.algolia]\napp_id = \"ABC\"\napi_key = \"k\"\nindex = \"docs\"",
        );
        let mut diag = ConfigDiagnostics::new();
        config.search.validate(&mut diag);
        assert!(diag.is_empty(), "{diag}");
    }
}
