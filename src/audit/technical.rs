//! Technical analysis orchestration.
//!
//! robots.txt and the page are fetched concurrently. Once both resolve, the
//! favicon fallback probe and the sitemap fetch/validation run concurrently.
//! Every failure is reported to the sink and degrades to a default.

use tokio_util::sync::CancellationToken;
use url::Url;

use crate::analysis::{build_technical_result, TechnicalInputs};
use crate::config::HEADER_X_ROBOTS_TAG;
use crate::diagnostics::Diagnostic;
use crate::error_handling::DiagnosticKind;
use crate::models::{SitemapUrlStatus, TechnicalResult};
use crate::parse::{extract_page_signals, Document, PageSignals};
use crate::robots::{parse_robots_txt, robots_url, RobotsTxt};
use crate::sitemap::{parse_sitemap, validate_sitemap_urls};

use super::Auditor;

impl Auditor {
    pub(super) async fn technical_result(
        &self,
        page: &Url,
        cancel: &CancellationToken,
    ) -> TechnicalResult {
        let (robots, page_fetch) = tokio::join!(
            self.fetch_robots(page, cancel),
            self.fetcher
                .fetch(page.as_str(), self.config.technical_page_timeout, cancel),
        );

        let (signals, content_length, x_robots_tag) = match page_fetch {
            Ok(fetched) => {
                let signals = {
                    let document = Document::parse(&fetched.body);
                    extract_page_signals(&document, page)
                };
                let x_robots_tag = fetched.header(HEADER_X_ROBOTS_TAG).map(str::to_string);
                (signals, fetched.content_length(), x_robots_tag)
            }
            Err(e) => {
                self.sink
                    .record(Diagnostic::new(DiagnosticKind::PageFetchFailed, page.as_str(), e));
                (PageSignals::default(), None, None)
            }
        };

        let (favicon_found, (sitemap_url_count, sitemap_statuses)) = tokio::join!(
            self.favicon_found(page, signals.favicon_declared, cancel),
            self.check_sitemap(robots.sitemap_url(), cancel),
        );

        let result = build_technical_result(
            page,
            TechnicalInputs {
                robots,
                signals,
                content_length,
                x_robots_tag,
                favicon_found,
                sitemap_url_count,
                sitemap_statuses,
            },
        );
        log::info!("Technical score for {}: {}", page, result.score);
        result
    }

    async fn fetch_robots(&self, page: &Url, cancel: &CancellationToken) -> RobotsTxt {
        let url = robots_url(page);
        match self
            .fetcher
            .fetch(&url, self.config.robots_timeout, cancel)
            .await
        {
            Ok(fetched) => parse_robots_txt(&fetched.body, page),
            Err(e) => {
                self.sink
                    .record(Diagnostic::new(DiagnosticKind::RobotsFetchFailed, url, e));
                RobotsTxt::default()
            }
        }
    }

    /// A declared icon link counts without a request; otherwise `/favicon.ico`
    /// is probed and any status below 400 counts.
    async fn favicon_found(&self, page: &Url, declared: bool, cancel: &CancellationToken) -> bool {
        if declared {
            return true;
        }
        let url = format!("{}/favicon.ico", page.origin().ascii_serialization());
        match self
            .fetcher
            .probe(&url, self.config.favicon_timeout, cancel)
            .await
        {
            Ok(status) => status < 400,
            Err(e) => {
                self.sink
                    .record(Diagnostic::new(DiagnosticKind::FaviconProbeFailed, url, e));
                false
            }
        }
    }

    /// Fetches, parses and validates the sitemap.
    ///
    /// Returns the total entry count and the capped validation results; both
    /// are empty when there is no sitemap or it cannot be read.
    async fn check_sitemap(
        &self,
        sitemap_url: Option<&str>,
        cancel: &CancellationToken,
    ) -> (usize, Vec<SitemapUrlStatus>) {
        let Some(sitemap_url) = sitemap_url else {
            return (0, Vec::new());
        };

        let body = match self
            .fetcher
            .fetch_with_limit(
                sitemap_url,
                self.config.sitemap_timeout,
                self.config.max_sitemap_size,
                cancel,
            )
            .await
        {
            Ok(fetched) => fetched.body,
            Err(e) => {
                self.sink.record(Diagnostic::new(
                    DiagnosticKind::SitemapFetchFailed,
                    sitemap_url,
                    e,
                ));
                return (0, Vec::new());
            }
        };

        let locs = match parse_sitemap(&body) {
            Ok((_, locs)) => locs,
            Err(e) => {
                self.sink.record(Diagnostic::new(
                    DiagnosticKind::SitemapParseFailed,
                    sitemap_url,
                    e,
                ));
                return (0, Vec::new());
            }
        };

        let statuses = validate_sitemap_urls(
            &self.fetcher,
            &locs,
            self.config.sitemap_check_limit,
            self.config.sitemap_check_timeout,
            cancel,
            self.sink.as_ref(),
        )
        .await;
        (locs.len(), statuses)
    }
}
