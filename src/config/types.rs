//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and library configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_USER_AGENT, FAVICON_PROBE_TIMEOUT, MAX_RESPONSE_BODY_SIZE, MAX_SITEMAP_BODY_SIZE,
    MAX_SITEMAP_CHECKS,
    PAGE_FETCH_TIMEOUT, ROBOTS_FETCH_TIMEOUT, SITEMAP_CHECK_TIMEOUT, SITEMAP_FETCH_TIMEOUT,
    TECHNICAL_PAGE_FETCH_TIMEOUT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which analyzer(s) the CLI runs.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AuditCategory {
    /// On-page, technical and content analyzers together, plus recommendations
    All,
    /// On-page analyzer only
    OnPage,
    /// Technical analyzer only
    Technical,
    /// Content analyzer only
    Content,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use seo_audit::Config;
/// use std::time::Duration;
///
/// let config = Config {
///     deadline: Some(Duration::from_secs(30)),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Page fetch timeout for the on-page and content analyzers
    pub page_timeout: Duration,

    /// Page fetch timeout for the technical analyzer
    pub technical_page_timeout: Duration,

    /// robots.txt fetch timeout
    pub robots_timeout: Duration,

    /// Sitemap document fetch timeout
    pub sitemap_timeout: Duration,

    /// Per-entry sitemap existence check timeout
    pub sitemap_check_timeout: Duration,

    /// `/favicon.ico` probe timeout
    pub favicon_timeout: Duration,

    /// Maximum number of sitemap entries checked
    pub sitemap_check_limit: usize,

    /// Overall deadline for `Auditor::run_audit` (None = no deadline)
    pub deadline: Option<Duration>,

    /// Maximum accepted response body size in bytes
    pub max_body_size: usize,

    /// Maximum accepted sitemap body size in bytes
    pub max_sitemap_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_timeout: PAGE_FETCH_TIMEOUT,
            technical_page_timeout: TECHNICAL_PAGE_FETCH_TIMEOUT,
            robots_timeout: ROBOTS_FETCH_TIMEOUT,
            sitemap_timeout: SITEMAP_FETCH_TIMEOUT,
            sitemap_check_timeout: SITEMAP_CHECK_TIMEOUT,
            favicon_timeout: FAVICON_PROBE_TIMEOUT,
            sitemap_check_limit: MAX_SITEMAP_CHECKS,
            deadline: None,
            max_body_size: MAX_RESPONSE_BODY_SIZE,
            max_sitemap_size: MAX_SITEMAP_BODY_SIZE,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Full audit
/// seo_audit https://example.com
///
/// # Technical checks only, pretty-printed, with a 20s overall deadline
/// seo_audit example.com --category technical --pretty --deadline-seconds 20
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "seo_audit",
    about = "Audits a web page's on-page, technical and content SEO signals."
)]
pub struct Opt {
    /// URL to audit (https:// is assumed when no scheme is given)
    #[arg(value_parser)]
    pub url: String,

    /// Which analyzer to run: all|on-page|technical|content
    #[arg(long, value_enum, default_value_t = AuditCategory::All)]
    pub category: AuditCategory,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Overall audit deadline in seconds; in-flight fetches are cancelled when it expires
    #[arg(long)]
    pub deadline_seconds: Option<u64>,

    /// Maximum number of sitemap entries to check
    #[arg(long, default_value_t = MAX_SITEMAP_CHECKS)]
    pub sitemap_check_limit: usize,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Opt {
    /// Builds the library configuration from the parsed CLI options.
    pub fn to_config(&self) -> Config {
        Config {
            user_agent: self.user_agent.clone(),
            sitemap_check_limit: self.sitemap_check_limit,
            deadline: self.deadline_seconds.map(Duration::from_secs),
            ..Default::default()
        }
    }
}
