//! Result construction and scoring.
//!
//! Everything here is synchronous and pure: the auditor fetches and parses,
//! then hands the parsed document (or the technical findings) to a builder
//! that produces the immutable result record with its score.

mod content;
mod on_page;
mod scoring;
mod technical;

pub use content::build_content_result;
pub use on_page::build_on_page_result;
pub use scoring::{content_score, on_page_score, technical_score, technical_signals};
pub use technical::{build_technical_result, TechnicalInputs};
