//! Diagnostic statistics printing.

use log::debug;

use crate::error_handling::ProcessingStats;

/// Logs the per-kind counts of absorbed failures at debug level.
///
/// Kinds with a zero count are omitted; nothing is logged when no failure was
/// absorbed.
pub fn print_diagnostic_statistics(stats: &ProcessingStats) {
    let total = stats.total();
    if total == 0 {
        return;
    }
    debug!("Absorbed failures ({} total):", total);
    for (kind, count) in stats.non_zero() {
        debug!("   {}: {}", kind.as_str(), count);
    }
}
