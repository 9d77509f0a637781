//! HTML parsing and signal extraction.
//!
//! This module turns a fetched body into a read-only `Document` and extracts:
//! - Title, meta description, headings, images and link tallies
//! - Open Graph / Twitter Card tags
//! - Structured data (JSON-LD presence and schema types)
//! - Technical page signals (canonical, viewport, icons, hreflang, mixed content, AMP)
//!
//! All parsing is done using CSS selectors via the `scraper` crate.

mod document;
mod html;
mod social;
mod structured;
mod technical;

// Re-export public API
pub use document::{Document, Node};
pub use html::{
    classify_links, count_paragraphs, extract_headings, extract_images, extract_meta_description,
    extract_title,
};
pub use social::extract_social_tags;
pub use structured::{extract_schema_types, has_json_ld};
pub use technical::{extract_page_signals, PageSignals};
