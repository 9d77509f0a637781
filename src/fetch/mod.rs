//! Document fetching.
//!
//! Every network read in the audit goes through `Fetcher`:
//! - `fetch`: GET with a per-resource timeout, size-capped body, lowercased headers
//! - `probe`: HEAD existence check returning the raw status code
//!
//! Both race the caller's `CancellationToken`, so a caller-level deadline stops
//! in-flight requests. Failures come back as `FetchError`, never as panics.

mod request;
mod types;

pub use request::Fetcher;
pub use types::FetchResult;
