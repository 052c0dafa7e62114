//! Waypost - a site descriptor tool for Markdown documentation sites.

#![allow(dead_code)]

mod cli;
mod config;
mod generator;
mod logger;
mod nav;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(&config, name.is_some(), *dry),
        Commands::Validate { args } => cli::validate::validate_site(&config, args),
        Commands::Query { args } => cli::query::run_query(&config, args),
        Commands::Export { args } => cli::export::export_site(&config, args),
    }
}
