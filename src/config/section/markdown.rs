//! `[markdown]` section configuration.

use macros::Config;
use serde::{Deserialize, Serialize};

/// Markdown rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "markdown")]
pub struct MarkdownConfig {
    /// Show line numbers in fenced code blocks.
    #[config(inline_doc)]
    pub line_numbers: bool,

    /// Syntax highlighting themes.
    #[config(sub)]
    pub theme: HighlightThemeConfig,
}

/// Highlighting theme pair for the light/dark color schemes.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "markdown.theme")]
pub struct HighlightThemeConfig {
    /// Theme used with the light color scheme.
    #[config(default = "github-light", inline_doc)]
    pub light: String,

    /// Theme used with the dark color scheme.
    #[config(default = "github-dark", inline_doc)]
    pub dark: String,
}

impl Default for HighlightThemeConfig {
    fn default() -> Self {
        Self {
            light: "github-light".into(),
            dark: "github-dark".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(!config.markdown.line_numbers);
        assert_eq!(config.markdown.theme.light, "github-light");
        assert_eq!(config.markdown.theme.dark, "github-dark");
    }

    #[test]
    fn test_overrides() {
        let config = test_parse_config(
            "[markdown]\nline_numbers = true\n\n[markdown.theme]\nlight = \"solarized-light\"",
        );
        assert!(config.markdown.line_numbers);
        assert_eq!(config.markdown.theme.light, "solarized-light");
        assert_eq!(config.markdown.theme.dark, "github-dark");
    }
}
