//! Descriptor section types.
//!
//! | Section      | TOML tables                                  |
//! |--------------|----------------------------------------------|
//! | `site`       | `[site]` and its subsections                 |
//! | `content`    | `[content]`                                  |
//! | `search`     | `[search]`, `[search.algolia]`               |
//! | `markdown`   | `[markdown]`, `[markdown.theme]`             |
//! | `theme`      | `[theme]` and its subsections                |

mod content;
mod markdown;
mod search;
pub mod site;
mod theme;

pub use content::ContentConfig;
pub use markdown::{HighlightThemeConfig, MarkdownConfig};
pub use search::{AlgoliaConfig, SearchConfig, SearchProvider};
pub use site::{EditLinkConfig, HeadTag, SitemapConfig, SiteSectionConfig, SocialLink};
pub use theme::{FooterConfig, LabelsConfig, OutlineConfig, ThemeSectionConfig};
