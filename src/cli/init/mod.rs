//! Site initialization module.
//!
//! Creates a new descriptor plus a minimal content skeleton.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Directory structure creation
//! - [`config`]: Descriptor file generation

mod config;
mod structure;
mod validate;

use crate::{config::SiteConfig, log};
use anyhow::Result;

pub use validate::InitMode;

/// Create a new site descriptor and content skeleton
///
/// # Steps
/// 1. Validate target directory
/// 2. Create directory structure
/// 3. Write waypost.toml and ignore files
/// 4. Write a starter page
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let root = site_config.get_root();
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };

    if let Err(e) = validate::validate_target(root, mode) {
        log!("error"; "{}", e);
        std::process::exit(1);
    }

    structure::create_structure(root, &site_config.content.dir)?;

    config::write_config(root)?;
    config::write_ignore_files(root)?;
    structure::write_starter_page(root, &site_config.content.dir)?;

    log!("init"; "Site initialized successfully");
    Ok(())
}
