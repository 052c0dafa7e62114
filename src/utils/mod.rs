//! Shared utilities.
//!
//! - [`path`]: filesystem path normalization
//! - [`route`]: site-root-relative route helpers
//! - pluralization helpers for log messages

pub mod path;
mod plural;
pub mod route;

pub use plural::{plural_count, plural_s};
