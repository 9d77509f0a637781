//! Diagnostic sinks for absorbed failures.
//!
//! Analyzers never log swallowed errors through a process-wide channel directly;
//! they report a `Diagnostic` to the `DiagnosticSink` the `Auditor` was built with.
//! The default `LogSink` forwards to the `log` facade.

use std::sync::{Arc, Mutex};

use crate::error_handling::{DiagnosticKind, ProcessingStats};

/// Log target used by `LogSink`.
pub const DIAGNOSTICS_TARGET: &str = "seo_audit::diagnostics";

/// One absorbed failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// What failed
    pub kind: DiagnosticKind,
    /// The resource that was being fetched or parsed
    pub url: String,
    /// Underlying error message
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, url: impl Into<String>, message: impl ToString) -> Self {
        Self {
            kind,
            url: url.into(),
            message: message.to_string(),
        }
    }
}

/// Receiver of diagnostics emitted while auditing.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the `log` facade at the kind's level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&self, diagnostic: Diagnostic) {
        log::log!(
            target: DIAGNOSTICS_TARGET,
            diagnostic.kind.level(),
            "{} for {}: {}",
            diagnostic.kind,
            diagnostic.url,
            diagnostic.message
        );
    }
}

/// Counts diagnostics per kind, then forwards them to an inner sink.
pub struct StatsSink {
    stats: Arc<ProcessingStats>,
    inner: Arc<dyn DiagnosticSink>,
}

impl StatsSink {
    pub fn new(stats: Arc<ProcessingStats>, inner: Arc<dyn DiagnosticSink>) -> Self {
        Self { stats, inner }
    }

    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }
}

impl DiagnosticSink for StatsSink {
    fn record(&self, diagnostic: Diagnostic) {
        self.stats.increment(diagnostic.kind);
        self.inner.record(diagnostic);
    }
}

/// Buffers diagnostics in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, in arrival order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self.diagnostics.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Recorded diagnostics of one kind.
    pub fn of_kind(&self, kind: DiagnosticKind) -> Vec<Diagnostic> {
        self.diagnostics()
            .into_iter()
            .filter(|d| d.kind == kind)
            .collect()
    }
}

impl DiagnosticSink for CollectingSink {
    fn record(&self, diagnostic: Diagnostic) {
        match self.diagnostics.lock() {
            Ok(mut guard) => guard.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}
