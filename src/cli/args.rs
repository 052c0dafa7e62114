//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Waypost site descriptor CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: waypost.toml)
    #[arg(short = 'C', long, default_value = "waypost.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new site descriptor and content skeleton
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template to stdout instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Validate the descriptor and navigation tree
    #[command(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },

    /// Query the resolved descriptor as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },

    /// Export resolved artifacts (site.json, sitemap.xml)
    #[command(visible_alias = "e")]
    Export {
        #[command(flatten)]
        args: ExportArgs,
    },
}

/// Validate command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ValidateArgs {
    /// Check that every sidebar route resolves to a content source file
    #[arg(short, long)]
    pub routes: bool,

    /// Treat validation failures as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Filter out null/empty values from output
    #[arg(short = 'E', long)]
    pub filter_empty: bool,

    /// Filter output to specific top-level fields (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub fields: Option<Vec<String>>,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Export command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output directory (relative to project root)
    #[arg(short, long, default_value = "dist", value_hint = clap::ValueHint::DirPath)]
    pub output: PathBuf,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_validate(&self) -> bool {
        matches!(self.command, Commands::Validate { .. })
    }
    pub const fn is_query(&self) -> bool {
        matches!(self.command, Commands::Query { .. })
    }
    pub const fn is_export(&self) -> bool {
        matches!(self.command, Commands::Export { .. })
    }
}
