//! Navigation tree model.
//!
//! The descriptor's only structured entity: an ordered tree of labeled
//! links. Top navigation is a flat list of [`NavItem`]s; the sidebar is a
//! list of [`SidebarGroup`]s whose items are either leaf links or nested
//! groups. The tree is built once when `waypost.toml` is loaded and never
//! mutated afterwards.
//!
//! Cycles are impossible by construction: nodes own their children and are
//! produced by nested literal deserialization, not references.

mod node;
pub mod validate;

pub use node::{NavItem, NavNode, SidebarGroup, leaf_routes};
