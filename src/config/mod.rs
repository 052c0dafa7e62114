//! Site descriptor management for `waypost.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Descriptor section definitions
//! │   ├── site/      # [site] and sub-sections
//! │   ├── content    # [content]
//! │   ├── search     # [search]
//! │   ├── markdown   # [markdown]
//! │   └── theme      # [theme] and sub-sections
//! ├── types/         # Utility types (errors, field paths, status)
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The navigation tables (`[[nav]]`, `[[sidebar]]`) live at the top level
//! of the descriptor and deserialize into [`crate::nav`] types.

pub mod section;
pub mod types;
pub mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    AlgoliaConfig, ContentConfig, EditLinkConfig, FooterConfig, HeadTag, HighlightThemeConfig,
    LabelsConfig, MarkdownConfig, OutlineConfig, SearchConfig, SearchProvider, SitemapConfig,
    SiteSectionConfig, SocialLink, ThemeSectionConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::cli::{Cli, Commands};
use crate::log;
use crate::nav::{NavItem, SidebarGroup};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root descriptor structure representing waypost.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata (title, base, head, sitemap, social, edit link)
    pub site: SiteSectionConfig,

    /// Content source settings
    pub content: ContentConfig,

    /// Top navigation bar entries
    pub nav: Vec<NavItem>,

    /// Sidebar tree
    pub sidebar: Vec<SidebarGroup>,

    /// Search settings
    pub search: SearchConfig,

    /// Markdown rendering settings
    pub markdown: MarkdownConfig,

    /// Theme and presentation settings
    pub theme: ThemeSectionConfig,
}

impl SiteConfig {
    /// Load the descriptor based on CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find the config
    /// file. The project root is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        // Validate config existence (skip for init)
        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'waypost init' to create a new project.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        // Validate raw paths before normalization
        if !cli.is_init() {
            config.validate_paths()?;
        }

        config.config_path = config_path;
        config.finalize(cli);

        // Full validation (skip for init: no config file yet; the validate
        // command runs its own pass so --warn-only can downgrade failures)
        if !cli.is_init() && !cli.is_validate() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None, .. } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => {
                // Search upward from cwd
                match find_config_file(&cli.config) {
                    Some(path) => Ok((path, true)),
                    None => Ok((cwd.join(&cli.config), false)),
                }
            }
        }
    }

    /// Finalize the descriptor after loading.
    fn finalize(&mut self, cli: &Cli) {
        let root = match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                std::env::current_dir().unwrap_or_default().join(name)
            }
            Commands::Init { name: None, .. } => std::env::current_dir().unwrap_or_default(),
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        let root = crate::utils::path::normalize_path(&root);
        self.config_path = crate::utils::path::normalize_path(&self.config_path);
        self.root = root;
    }

    /// Parse the descriptor from a TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load the descriptor from a file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        crate::debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (waypost.toml) since it's always at site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Absolute path of the Markdown source directory.
    pub fn content_dir(&self) -> PathBuf {
        self.root.join(&self.content.dir)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Pre-validate paths before normalization.
    ///
    /// Must run before `finalize()`: normalization makes every path
    /// absolute, so an absolute path in the descriptor would no longer be
    /// detectable afterwards.
    fn validate_paths(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.content.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Validate the whole descriptor.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.exists() {
            bail!(ConfigError::Validation("config file not found".into()));
        }

        let diag = self.collect_diagnostics();

        // Print collected hints and warnings (grouped display)
        diag.print_hints_and_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every descriptor check and return the collected diagnostics.
    pub fn collect_diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        // Field status (experimental, deprecated)
        self.site.validate_field_status(&mut diag);
        self.search.validate_field_status(&mut diag);
        self.markdown.validate_field_status(&mut diag);
        self.theme.validate_field_status(&mut diag);

        // Per-section checks
        self.site.validate(&mut diag);
        self.search.validate(&mut diag);
        self.theme.validate(&mut diag);

        // Navigation tree invariants
        crate::nav::validate::validate_nav(&self.nav, &mut diag);
        crate::nav::validate::validate_sidebar(&self.sidebar, &mut diag);

        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a descriptor from TOML.
/// Panics if there are unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
