//! Concurrent sitemap entry checks.

use std::time::Duration;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use tokio_util::sync::CancellationToken;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error_handling::DiagnosticKind;
use crate::fetch::Fetcher;
use crate::models::{CheckStatus, SitemapUrlStatus};

/// Checks the first `limit` sitemap entries with concurrent HEAD probes.
///
/// All probes are launched together; the returned list follows `urls` order,
/// not completion order, and has `min(limit, urls.len())` entries. A probe that
/// times out or fails records `CheckStatus::Error` and a `SitemapCheckFailed`
/// diagnostic without affecting the others.
///
/// # Arguments
///
/// * `fetcher` - Shared fetcher
/// * `urls` - Sitemap `<loc>` values in document order
/// * `limit` - Maximum number of entries to check
/// * `timeout` - Budget for each probe
/// * `cancel` - Audit-level cancellation
/// * `sink` - Receives per-entry failures
pub async fn validate_sitemap_urls(
    fetcher: &Fetcher,
    urls: &[String],
    limit: usize,
    timeout: Duration,
    cancel: &CancellationToken,
    sink: &dyn DiagnosticSink,
) -> Vec<SitemapUrlStatus> {
    let selected = &urls[..urls.len().min(limit)];

    let mut tasks: FuturesUnordered<_> = selected
        .iter()
        .enumerate()
        .map(|(index, url)| async move {
            (index, fetcher.probe(url, timeout, cancel).await)
        })
        .collect();

    let mut statuses: Vec<Option<CheckStatus>> = vec![None; selected.len()];
    while let Some((index, outcome)) = tasks.next().await {
        let status = match outcome {
            Ok(code) => CheckStatus::Code(code),
            Err(e) => {
                sink.record(Diagnostic::new(
                    DiagnosticKind::SitemapCheckFailed,
                    selected[index].as_str(),
                    e,
                ));
                CheckStatus::Error
            }
        };
        statuses[index] = Some(status);
    }

    log::debug!(
        "Checked {} of {} sitemap entries",
        selected.len(),
        urls.len()
    );

    selected
        .iter()
        .zip(statuses)
        .map(|(url, status)| SitemapUrlStatus {
            url: url.clone(),
            status: status.unwrap_or(CheckStatus::Error),
        })
        .collect()
}
