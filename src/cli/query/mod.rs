//! Descriptor query command.
//!
//! Prints the resolved descriptor (the exact `site.json` content) as
//! JSON, with optional field selection and empty-value filtering. Useful
//! for shell pipelines (`waypost q -f nav,sidebar | jq ...`).

mod output;

use anyhow::{Context, Result};

use crate::cli::QueryArgs;
use crate::config::SiteConfig;
use crate::generator::Descriptor;

/// Run the query command.
pub fn run_query(config: &SiteConfig, args: &QueryArgs) -> Result<()> {
    let descriptor = Descriptor::build(config);
    let value = serde_json::to_value(&descriptor).context("Failed to serialize descriptor")?;
    output::output_descriptor(value, args)
}
