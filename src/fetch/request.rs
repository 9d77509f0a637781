//! HTTP request execution.

use std::time::{Duration, Instant};

use log::debug;
use tokio_util::sync::CancellationToken;

use crate::error_handling::{categorize_reqwest_error, FetchError};

use super::types::{collect_headers, FetchResult};

/// Thin wrapper over a shared `reqwest::Client`.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    max_body_size: usize,
}

impl Fetcher {
    pub fn new(client: reqwest::Client, max_body_size: usize) -> Self {
        Self {
            client,
            max_body_size,
        }
    }

    /// Fetches a resource with GET.
    ///
    /// Non-2xx responses are returned as `FetchError::Status`. Redirects follow the
    /// client's default policy.
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute http(s) URL
    /// * `timeout` - Budget for the whole exchange, body included
    /// * `cancel` - Cancelled by the caller to abandon the request
    pub async fn fetch(
        &self,
        url: &str,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> Result<FetchResult, FetchError> {
        self.fetch_with_limit(url, timeout, self.max_body_size, cancel)
            .await
    }

    /// Same as [`Fetcher::fetch`] with a body cap other than the client default.
    ///
    /// Sitemaps may legitimately be far larger than an HTML page.
    pub async fn fetch_with_limit(
        &self,
        url: &str,
        timeout: Duration,
        max_body_size: usize,
        cancel: &CancellationToken,
    ) -> Result<FetchResult, FetchError> {
        check_url(url)?;
        let start = Instant::now();

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(FetchError::Cancelled),
            outcome = tokio::time::timeout(timeout, self.get(url, max_body_size)) => {
                outcome.unwrap_or(Err(FetchError::Timeout))
            }
        };

        let elapsed = start.elapsed();
        match &result {
            Ok(fetched) => debug!(
                "GET {} -> {} ({} bytes) in {:.0}ms",
                url,
                fetched.status,
                fetched.body.len(),
                elapsed.as_secs_f64() * 1000.0
            ),
            Err(e) => debug!(
                "GET {} failed after {:.0}ms: {}",
                url,
                elapsed.as_secs_f64() * 1000.0,
                e
            ),
        }

        result.map(|mut fetched| {
            fetched.elapsed_ok = elapsed <= timeout;
            fetched
        })
    }

    /// Checks that a resource exists with HEAD.
    ///
    /// Any completed exchange yields its status code, including 4xx/5xx. Only
    /// transport failures, timeouts and cancellation are errors.
    pub async fn probe(
        &self,
        url: &str,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> Result<u16, FetchError> {
        check_url(url)?;

        let request = self.client.head(url).timeout(timeout).send();
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(FetchError::Cancelled),
            outcome = tokio::time::timeout(timeout, request) => match outcome {
                Ok(Ok(response)) => Ok(response.status().as_u16()),
                Ok(Err(e)) => Err(categorize_reqwest_error(&e)),
                Err(_) => Err(FetchError::Timeout),
            }
        };

        match &result {
            Ok(status) => debug!("HEAD {} -> {}", url, status),
            Err(e) => debug!("HEAD {} failed: {}", url, e),
        }
        result
    }

    async fn get(&self, url: &str, max_body_size: usize) -> Result<FetchResult, FetchError> {
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let headers = collect_headers(response.headers());
        let final_url = response.url().to_string();

        // Stream with size cap
        let mut buf: Vec<u8> = Vec::with_capacity(max_body_size.min(64 * 1024));
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?
        {
            if buf.len() + chunk.len() > max_body_size {
                return Err(FetchError::BodyTooLarge(max_body_size));
            }
            buf.extend_from_slice(&chunk);
        }

        Ok(FetchResult {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&buf).into_owned(),
            headers,
            elapsed_ok: true,
            final_url,
        })
    }
}

fn check_url(url: &str) -> Result<(), FetchError> {
    match url::Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        Ok(parsed) => Err(FetchError::InvalidUrl(format!(
            "unsupported scheme '{}' in {}",
            parsed.scheme(),
            url
        ))),
        Err(e) => Err(FetchError::InvalidUrl(format!("{}: {}", url, e))),
    }
}
