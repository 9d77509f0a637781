//! Ctrl-C handling.

use log::warn;
use tokio_util::sync::CancellationToken;

/// Cancels `cancel` when the process receives Ctrl-C.
///
/// In-flight fetches resolve as cancelled, so the running audit still prints
/// its best-effort result. The returned handle can be aborted once the audit
/// finishes.
pub fn cancel_on_ctrl_c(cancel: CancellationToken) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling in-flight requests");
            cancel.cancel();
        }
    })
}
