//! `[theme]` section configuration.
//!
//! Presentation knobs passed through to the rendered site: footer text,
//! outline depth and UI label overrides.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Theme and presentation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeSectionConfig {
    /// Footer text.
    #[config(sub)]
    pub footer: FooterConfig,

    /// On-page outline settings.
    #[config(sub)]
    pub outline: OutlineConfig,

    /// UI label overrides.
    #[config(sub)]
    pub labels: LabelsConfig,
}

impl ThemeSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.outline.validate(diag);
    }
}

/// Footer shown below the page content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.footer")]
pub struct FooterConfig {
    /// Footer message line.
    #[config(inline_doc)]
    pub message: Option<String>,

    /// Copyright line, shown below the message.
    #[config(inline_doc)]
    pub copyright: Option<String>,
}

/// Heading levels collected into the on-page outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.outline")]
pub struct OutlineConfig {
    /// Inclusive [min, max] heading level range.
    #[config(inline_doc)]
    pub levels: [u8; 2],
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self { levels: [2, 3] }
    }
}

impl OutlineConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let [min, max] = self.levels;
        if min < 1 || max > 6 || min > max {
            diag.error_with_hint(
                Self::FIELDS.levels,
                format!("[{min}, {max}] is not a valid heading range"),
                "use [min, max] with 1 <= min <= max <= 6, e.g.: [2, 3]",
            );
        }
    }
}

/// Overridable UI strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.labels")]
pub struct LabelsConfig {
    /// Back-to-top button label.
    #[config(default = "Return to top", inline_doc)]
    pub return_to_top: String,

    /// Mobile sidebar toggle label.
    #[config(default = "Menu", inline_doc)]
    pub sidebar_menu: String,

    /// Color scheme switch label.
    #[config(default = "Appearance", inline_doc)]
    pub dark_mode_switch: String,

    /// Tooltip on the switch when the dark scheme is active.
    #[config(default = "Switch to light mode", inline_doc)]
    pub light_mode_switch_title: String,

    /// Tooltip on the switch when the light scheme is active.
    #[config(default = "Switch to dark mode", inline_doc)]
    pub dark_mode_switch_title: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            return_to_top: "Return to top".into(),
            sidebar_menu: "Menu".into(),
            dark_mode_switch: "Appearance".into(),
            light_mode_switch_title: "Switch to light mode".into(),
            dark_mode_switch_title: "Switch to dark mode".into(),
        }
    }
}
