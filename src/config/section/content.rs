//! `[content]` section configuration.

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ConfigDiagnostics;

/// Content source settings.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "content")]
pub struct ContentConfig {
    /// Markdown source directory, relative to the config file.
    #[config(default = "docs", inline_doc)]
    pub dir: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("docs"),
        }
    }
}

impl ContentConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.dir.as_os_str().is_empty() {
            diag.error(Self::FIELDS.dir, "content dir is empty");
        } else if self.dir.is_absolute() {
            diag.error_with_hint(
                Self::FIELDS.dir,
                format!("'{}' is absolute", self.dir.display()),
                "use a path relative to the config file, e.g.: \"docs\"",
            );
        }
    }
}
