//! Sitemap parsing and entry validation.
//!
//! - `parse_sitemap`: reads `<loc>` entries from a URL-set or sitemap-index document
//! - `validate_sitemap_urls`: concurrent HEAD checks against the first entries

mod parse;
mod validate;

pub use parse::{parse_sitemap, SitemapKind};
pub use validate::validate_sitemap_urls;
