//! seo_audit library: single-page SEO audit pipeline
//!
//! This library fetches a URL together with its robots.txt and sitemap, extracts
//! on-page, technical and content signals from the HTML, scores each category on
//! a 0-100 scale and derives remediation messages. Every result serializes to
//! camelCase JSON for downstream renderers.
//!
//! # Example
//!
//! ```no_run
//! use seo_audit::{Auditor, Config};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let auditor = Auditor::new(Config {
//!     deadline: Some(Duration::from_secs(30)),
//!     ..Default::default()
//! })?;
//!
//! let report = auditor.run_audit("https://example.com/").await?;
//! for score in &report.category_scores {
//!     println!("{}: {}", score.category, score.score);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod analysis;
mod app;
mod audit;
pub mod config;
pub mod diagnostics;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;
pub mod parse;
pub mod recommendations;
pub mod robots;
pub mod sitemap;
mod utils;

// Re-export public API
pub use app::{cancel_on_ctrl_c, normalize_audit_url, print_diagnostic_statistics};
pub use audit::Auditor;
pub use config::{AuditCategory, Config, LogFormat, LogLevel, Opt};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, LogSink, StatsSink};
pub use error_handling::{
    AuditError, DiagnosticKind, FetchError, InitializationError, ProcessingStats, SitemapError,
};
pub use fetch::{FetchResult, Fetcher};
pub use models::*;
