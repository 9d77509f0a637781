//! Audit entry points.
//!
//! `Auditor` owns the shared HTTP client, the configuration, the diagnostic sink
//! and a cancellation token. Each entry point validates its URL, fetches what it
//! needs, then hands parsed documents to the pure builders in `analysis`.
//!
//! Failure contracts differ per entry point:
//! - `analyze_on_page` and `analyze_content` surface a failed page fetch as
//!   `AuditError::Fetch`
//! - `analyze_technical_seo` absorbs every fetch failure into default fields and
//!   only errors on an invalid URL
//! - `run_audit` absorbs everything and records failed categories in the report

mod run;
mod technical;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use url::Url;

use crate::analysis::{build_content_result, build_on_page_result};
use crate::config::{Config, MAX_URL_LENGTH};
use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::error_handling::{AuditError, FetchError, InitializationError};
use crate::fetch::Fetcher;
use crate::initialization::init_client;
use crate::models::{
    ContentReport, ContentResult, OnPageReport, OnPageResult, TechnicalReport,
};
use crate::parse::Document;
use crate::utils::char_len;

/// Runs SEO audits against single URLs.
///
/// Cheap to share by reference; all entry points take `&self` and may run
/// concurrently.
pub struct Auditor {
    fetcher: Fetcher,
    config: Arc<Config>,
    sink: Arc<dyn DiagnosticSink>,
    cancel: CancellationToken,
}

impl Auditor {
    /// Creates an auditor with a fresh HTTP client and a `LogSink`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn new(config: Config) -> Result<Self, InitializationError> {
        let client = init_client(&config)?;
        Ok(Self {
            fetcher: Fetcher::new(client, config.max_body_size),
            config: Arc::new(config),
            sink: Arc::new(LogSink),
            cancel: CancellationToken::new(),
        })
    }

    /// Replaces the diagnostic sink.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Uses `cancel` as the parent token for every fetch.
    ///
    /// Cancelling it stops in-flight fetches of every running entry point.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// On-page analysis of `url`.
    ///
    /// # Errors
    ///
    /// - `AuditError::InvalidUrl` if `url` is not an absolute http(s) URL
    /// - `AuditError::Fetch` if the page cannot be fetched
    /// - `AuditError::Cancelled` if the auditor's token was cancelled
    pub async fn analyze_on_page(&self, url: &str) -> Result<OnPageReport, AuditError> {
        let page = parse_audit_url(url)?;
        self.on_page_result(&page, &self.cancel)
            .await
            .map(OnPageReport::from)
    }

    /// Technical analysis of `url`, including robots.txt and sitemap checks.
    ///
    /// Fetch failures degrade the affected fields and are reported to the
    /// diagnostic sink; they never produce an `Err`.
    ///
    /// # Errors
    ///
    /// `AuditError::InvalidUrl` if `url` is not an absolute http(s) URL.
    pub async fn analyze_technical_seo(&self, url: &str) -> Result<TechnicalReport, AuditError> {
        let page = parse_audit_url(url)?;
        Ok(self.technical_result(&page, &self.cancel).await.into())
    }

    /// Content analysis of `url`.
    ///
    /// # Errors
    ///
    /// Same as `analyze_on_page`.
    pub async fn analyze_content(&self, url: &str) -> Result<ContentReport, AuditError> {
        let page = parse_audit_url(url)?;
        self.content_result(&page, &self.cancel)
            .await
            .map(ContentReport::from)
    }

    async fn on_page_result(
        &self,
        page: &Url,
        cancel: &CancellationToken,
    ) -> Result<OnPageResult, AuditError> {
        let fetched = self
            .fetcher
            .fetch(page.as_str(), self.config.page_timeout, cancel)
            .await
            .map_err(|source| fetch_failure(page, source))?;

        let document = Document::parse(&fetched.body);
        let result = build_on_page_result(&document, page);
        log::info!("On-page score for {}: {}", page, result.score);
        Ok(result)
    }

    async fn content_result(
        &self,
        page: &Url,
        cancel: &CancellationToken,
    ) -> Result<ContentResult, AuditError> {
        let fetched = self
            .fetcher
            .fetch(page.as_str(), self.config.page_timeout, cancel)
            .await
            .map_err(|source| fetch_failure(page, source))?;

        let document = Document::parse(&fetched.body);
        let result = build_content_result(&document, char_len(&fetched.body));
        log::info!("Content score for {}: {}", page, result.score);
        Ok(result)
    }
}

fn fetch_failure(page: &Url, source: FetchError) -> AuditError {
    match source {
        FetchError::Cancelled => AuditError::Cancelled,
        source => AuditError::Fetch {
            url: page.to_string(),
            source,
        },
    }
}

/// Validates an audit URL: absolute, http(s), at most `MAX_URL_LENGTH` bytes.
///
/// The http(s) parser rejects host-less URLs, so a parsed URL always has one.
pub(crate) fn parse_audit_url(url: &str) -> Result<Url, AuditError> {
    let invalid = |reason: String| AuditError::InvalidUrl {
        url: url.to_string(),
        reason,
    };

    if url.len() > MAX_URL_LENGTH {
        return Err(invalid(format!(
            "longer than {} characters",
            MAX_URL_LENGTH
        )));
    }
    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    Ok(parsed)
}
