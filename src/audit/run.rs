//! Whole-audit orchestration.

use url::Url;

use crate::diagnostics::Diagnostic;
use crate::error_handling::{AuditError, DiagnosticKind};
use crate::models::{AuditFailure, AuditReport, CategoryScore};
use crate::recommendations;

use super::{parse_audit_url, Auditor};

const CATEGORY_ON_PAGE: &str = "onPage";
const CATEGORY_TECHNICAL: &str = "technical";
const CATEGORY_CONTENT: &str = "content";

impl Auditor {
    /// Runs the on-page, technical and content analyzers concurrently.
    ///
    /// The three analyzers share one child cancellation token. If
    /// `Config::deadline` expires first, the token is cancelled, in-flight
    /// fetches resolve as cancelled, and the report is assembled from whatever
    /// each analyzer produced. On-page and content failures fall back to zeroed
    /// results and are listed in `failures`.
    ///
    /// # Errors
    ///
    /// `AuditError::InvalidUrl` if `url` is not an absolute http(s) URL.
    pub async fn run_audit(&self, url: &str) -> Result<AuditReport, AuditError> {
        let page = parse_audit_url(url)?;
        let cancel = self.cancel.child_token();

        let analyses = async {
            tokio::join!(
                self.on_page_result(&page, &cancel),
                self.technical_result(&page, &cancel),
                self.content_result(&page, &cancel),
            )
        };
        tokio::pin!(analyses);

        let (on_page, technical, content) = match self.config.deadline {
            Some(deadline) => match tokio::time::timeout(deadline, &mut analyses).await {
                Ok(results) => results,
                Err(_) => {
                    self.sink.record(Diagnostic::new(
                        DiagnosticKind::DeadlineExceeded,
                        page.as_str(),
                        format!("deadline of {:?} expired", deadline),
                    ));
                    cancel.cancel();
                    analyses.await
                }
            },
            None => analyses.await,
        };

        let mut failures = Vec::new();
        let on_page = self.absorb(
            on_page,
            &page,
            DiagnosticKind::OnPageFetchFailed,
            CATEGORY_ON_PAGE,
            &mut failures,
        );
        let content = self.absorb(
            content,
            &page,
            DiagnosticKind::ContentFetchFailed,
            CATEGORY_CONTENT,
            &mut failures,
        );

        let category_scores = vec![
            CategoryScore {
                category: CATEGORY_ON_PAGE,
                score: on_page.score,
            },
            CategoryScore {
                category: CATEGORY_TECHNICAL,
                score: technical.score,
            },
            CategoryScore {
                category: CATEGORY_CONTENT,
                score: content.score,
            },
        ];

        Ok(AuditReport {
            url: page.to_string(),
            recommendations: recommendations::all(&on_page, &technical, &content),
            on_page,
            technical,
            content,
            category_scores,
            failures,
        })
    }

    /// Replaces a failed category result with its default and records why.
    fn absorb<T: Default>(
        &self,
        result: Result<T, AuditError>,
        page: &Url,
        kind: DiagnosticKind,
        category: &'static str,
        failures: &mut Vec<AuditFailure>,
    ) -> T {
        result.unwrap_or_else(|e| {
            self.sink.record(Diagnostic::new(kind, page.as_str(), &e));
            failures.push(AuditFailure {
                category,
                message: e.to_string(),
            });
            T::default()
        })
    }
}
