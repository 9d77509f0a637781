//! Diagnostic statistics tracking.
//!
//! Thread-safe counters for absorbed failures, one per `DiagnosticKind`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::DiagnosticKind;

/// Thread-safe diagnostic statistics tracker.
///
/// All kinds are initialized to zero on creation, so lookups never miss.
/// Share across tasks with `Arc`.
pub struct ProcessingStats {
    counts: HashMap<DiagnosticKind, AtomicUsize>,
}

impl ProcessingStats {
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for kind in DiagnosticKind::iter() {
            counts.insert(kind, AtomicUsize::new(0));
        }
        ProcessingStats { counts }
    }

    /// Increment the counter for a diagnostic kind.
    pub fn increment(&self, kind: DiagnosticKind) {
        if let Some(counter) = self.counts.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                kind
            );
        }
    }

    /// Get the count for a diagnostic kind.
    pub fn get_count(&self, kind: DiagnosticKind) -> usize {
        self.counts
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total count across all kinds.
    pub fn total(&self) -> usize {
        DiagnosticKind::iter().map(|k| self.get_count(k)).sum()
    }

    /// Non-zero counters, in enum declaration order.
    pub fn non_zero(&self) -> Vec<(DiagnosticKind, usize)> {
        DiagnosticKind::iter()
            .map(|k| (k, self.get_count(k)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
