//! Error type definitions.
//!
//! This module defines the error enums used throughout the audit and the
//! diagnostic kinds reported for failures that are absorbed rather than raised.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Transport-level failure of a single fetch.
///
/// Fetches never panic or raise past the fetcher; every failure mode maps to one
/// of these variants and the caller decides whether to degrade or surface it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The URL could not be parsed or uses a non-http(s) scheme.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete inside its timeout.
    #[error("request timed out")]
    Timeout,

    /// DNS resolution or TCP/TLS connection failed.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The redirect chain was too long or looped.
    #[error("redirect error: {0}")]
    Redirect(String),

    /// Reading or decoding the body failed.
    #[error("body error: {0}")]
    Body(String),

    /// The body exceeded the configured size limit.
    #[error("response body exceeds {0} bytes")]
    BodyTooLarge(usize),

    /// The surrounding audit was cancelled (deadline or caller).
    #[error("fetch cancelled")]
    Cancelled,

    /// Any other request failure.
    #[error("request failed: {0}")]
    Request(String),
}

/// Errors surfaced by the `Auditor` entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuditError {
    /// Contract error: the caller passed a non-absolute or non-http(s) URL.
    #[error("invalid audit URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The page fetch of an analyzer that surfaces transport failures failed.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// The audit was cancelled before the analyzer produced a result.
    #[error("audit cancelled")]
    Cancelled,
}

/// Sitemap document could not be turned into a list of locations.
#[derive(Error, Debug)]
pub enum SitemapError {
    /// The XML was well-formed enough to start but did not deserialize.
    #[error("sitemap XML could not be deserialized: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// The XML reader rejected the document.
    #[error("sitemap XML is malformed: {0}")]
    Reader(#[from] quick_xml::Error),

    /// The root element is neither `urlset` nor `sitemapindex`.
    #[error("unrecognized sitemap root element <{0}>")]
    UnrecognizedRoot(String),

    /// No root element at all.
    #[error("sitemap document is empty")]
    Empty,
}

/// Kinds of absorbed failures reported to the diagnostic sink.
///
/// Each kind corresponds to one sub-fetch or parse that degrades to a default
/// value instead of aborting its analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum DiagnosticKind {
    RobotsFetchFailed,
    PageFetchFailed,
    FaviconProbeFailed,
    SitemapFetchFailed,
    SitemapParseFailed,
    SitemapCheckFailed,
    OnPageFetchFailed,
    ContentFetchFailed,
    DeadlineExceeded,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::RobotsFetchFailed => "robots.txt fetch failed",
            DiagnosticKind::PageFetchFailed => "page fetch failed",
            DiagnosticKind::FaviconProbeFailed => "favicon probe failed",
            DiagnosticKind::SitemapFetchFailed => "sitemap fetch failed",
            DiagnosticKind::SitemapParseFailed => "sitemap parse failed",
            DiagnosticKind::SitemapCheckFailed => "sitemap entry check failed",
            DiagnosticKind::OnPageFetchFailed => "on-page fetch failed",
            DiagnosticKind::ContentFetchFailed => "content fetch failed",
            DiagnosticKind::DeadlineExceeded => "audit deadline exceeded",
        }
    }

    /// Log level the default sink uses for this kind.
    pub fn level(&self) -> log::Level {
        match self {
            DiagnosticKind::OnPageFetchFailed
            | DiagnosticKind::ContentFetchFailed
            | DiagnosticKind::PageFetchFailed
            | DiagnosticKind::DeadlineExceeded => log::Level::Warn,
            DiagnosticKind::RobotsFetchFailed
            | DiagnosticKind::SitemapFetchFailed
            | DiagnosticKind::SitemapParseFailed => log::Level::Info,
            DiagnosticKind::FaviconProbeFailed | DiagnosticKind::SitemapCheckFailed => {
                log::Level::Debug
            }
        }
    }
}
