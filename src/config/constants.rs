//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the audit,
//! including per-resource fetch timeouts, size limits and scoring thresholds.

use std::time::Duration;

// Network operation timeouts
/// Page body fetch timeout for the on-page and content analyzers.
pub const PAGE_FETCH_TIMEOUT: Duration = Duration::from_millis(15_000);
/// Page body fetch timeout for the technical analyzer.
pub const TECHNICAL_PAGE_FETCH_TIMEOUT: Duration = Duration::from_millis(10_000);
/// robots.txt fetch timeout.
pub const ROBOTS_FETCH_TIMEOUT: Duration = Duration::from_millis(5_000);
/// Sitemap document fetch timeout.
pub const SITEMAP_FETCH_TIMEOUT: Duration = Duration::from_millis(10_000);
/// Existence check timeout for each sitemap entry.
pub const SITEMAP_CHECK_TIMEOUT: Duration = Duration::from_millis(3_000);
/// `/favicon.ico` probe timeout, used when the page declares no icon link.
pub const FAVICON_PROBE_TIMEOUT: Duration = Duration::from_millis(5_000);
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36 seo_audit/0.1";

// Response and body size limits
/// Maximum response body size in bytes (5MB)
/// Bodies larger than this fail with `FetchError::BodyTooLarge`
pub const MAX_RESPONSE_BODY_SIZE: usize = 5 * 1024 * 1024;
/// Maximum sitemap body size in bytes (50MB, the sitemaps.org per-file limit)
pub const MAX_SITEMAP_BODY_SIZE: usize = 50 * 1024 * 1024;

/// Maximum URL length accepted by the CLI normalizer.
pub const MAX_URL_LENGTH: usize = 2048;

// Sitemap validation
/// Only the first N sitemap entries (document order) are checked.
pub const MAX_SITEMAP_CHECKS: usize = 20;

// On-page thresholds
/// Longest title that still passes.
pub const MAX_TITLE_LENGTH: usize = 60;
/// Longest meta description that still passes.
pub const MAX_META_DESCRIPTION_LENGTH: usize = 160;
/// Visible body text must be strictly longer than this (characters, whitespace collapsed).
pub const MIN_BODY_TEXT_LENGTH: usize = 500;

// On-page point table. Sums to 85 on a 100 point scale; the values are kept as-is
// so historical scores stay comparable.
pub const POINTS_TITLE: u32 = 10;
pub const POINTS_META_DESCRIPTION: u32 = 10;
pub const POINTS_H1: u32 = 10;
pub const POINTS_H2: u32 = 5;
pub const POINTS_H3: u32 = 5;
pub const POINTS_IMAGES: u32 = 10;
pub const POINTS_LINKS: u32 = 10;
pub const POINTS_BODY: u32 = 10;
pub const POINTS_SOCIAL: u32 = 10;
pub const POINTS_STRUCTURED_DATA: u32 = 5;

/// Declared maximum of every category score.
pub const MAX_SCORE: u32 = 100;

// Technical thresholds
/// Pages must be strictly smaller than this (KB) to pass.
pub const MAX_PAGE_SIZE_KB: u64 = 2048;
/// Pages must reference strictly fewer sub-resources than this to pass.
pub const MAX_REQUEST_COUNT: usize = 100;
/// Number of boolean signals in the technical overview score.
pub const TECHNICAL_SIGNAL_COUNT: usize = 13;

// Content thresholds
pub const MIN_WORD_COUNT: usize = 300;
pub const MIN_PARAGRAPH_COUNT: usize = 3;
pub const MAX_AVERAGE_SENTENCE_LENGTH: f64 = 20.0;
pub const MIN_TEXT_TO_HTML_RATIO: f64 = 10.0;
/// Number of content signals in the content score.
pub const CONTENT_SIGNAL_COUNT: usize = 4;
/// Keywords reported by the content analyzer.
pub const TOP_KEYWORD_COUNT: usize = 5;
/// Shortest word considered a keyword candidate.
pub const MIN_KEYWORD_LENGTH: usize = 4;
