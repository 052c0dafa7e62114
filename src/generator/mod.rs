//! Export artifact generation.
//!
//! | Module       | Artifact                                  |
//! |--------------|-------------------------------------------|
//! | `descriptor` | `site.json` - resolved site descriptor    |
//! | `sitemap`    | `sitemap.xml` - search engine index       |

pub mod descriptor;
pub mod sitemap;

pub use descriptor::Descriptor;
pub use sitemap::build_sitemap;
