//! Error handling and diagnostic statistics.
//!
//! This module provides:
//! - Error type definitions (`FetchError`, `AuditError`, `SitemapError`, ...)
//! - Categorization of `reqwest` errors into `FetchError`
//! - Counters for absorbed failures, keyed by `DiagnosticKind`
//!
//! Failures are either:
//! - **Surfaced**: returned to the caller as `AuditError`
//! - **Absorbed**: degraded to a default value and reported as a `DiagnosticKind`

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::ProcessingStats;
pub use types::{
    AuditError, DiagnosticKind, FetchError, InitializationError, SitemapError,
};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for kind in DiagnosticKind::iter() {
            assert_eq!(stats.get_count(kind), 0);
        }
        assert_eq!(stats.total(), 0);
        assert!(stats.non_zero().is_empty());
    }

    #[test]
    fn test_processing_stats_increment() {
        let stats = ProcessingStats::new();
        stats.increment(DiagnosticKind::SitemapCheckFailed);
        stats.increment(DiagnosticKind::SitemapCheckFailed);
        stats.increment(DiagnosticKind::RobotsFetchFailed);

        assert_eq!(stats.get_count(DiagnosticKind::SitemapCheckFailed), 2);
        assert_eq!(stats.get_count(DiagnosticKind::RobotsFetchFailed), 1);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_processing_stats_non_zero_in_declaration_order() {
        let stats = ProcessingStats::new();
        stats.increment(DiagnosticKind::SitemapParseFailed);
        stats.increment(DiagnosticKind::RobotsFetchFailed);

        assert_eq!(
            stats.non_zero(),
            vec![
                (DiagnosticKind::RobotsFetchFailed, 1),
                (DiagnosticKind::SitemapParseFailed, 1),
            ]
        );
    }
}
