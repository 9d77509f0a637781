//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Ctrl-C cancellation
//! - Printing the JSON result
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use seo_audit::initialization::init_logger_with;
use seo_audit::{
    cancel_on_ctrl_c, normalize_audit_url, print_diagnostic_statistics, AuditCategory, AuditError,
    Auditor, LogSink, Opt, ProcessingStats, StatsSink,
};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let url = match normalize_audit_url(&opt.url) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("seo_audit error: {}", e);
            process::exit(1);
        }
    };

    let stats = Arc::new(ProcessingStats::new());
    let cancel = CancellationToken::new();
    let auditor = Auditor::new(opt.to_config())
        .context("Failed to initialize auditor")?
        .with_sink(Arc::new(StatsSink::new(
            Arc::clone(&stats),
            Arc::new(LogSink),
        )))
        .with_cancellation(cancel.clone());
    let interrupt = cancel_on_ctrl_c(cancel);

    let output = match opt.category {
        AuditCategory::All => render(auditor.run_audit(&url).await, opt.pretty),
        AuditCategory::OnPage => render(auditor.analyze_on_page(&url).await, opt.pretty),
        AuditCategory::Technical => render(auditor.analyze_technical_seo(&url).await, opt.pretty),
        AuditCategory::Content => render(auditor.analyze_content(&url).await, opt.pretty),
    };
    interrupt.abort();
    print_diagnostic_statistics(&stats);

    match output {
        Ok(json) => {
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            eprintln!("seo_audit error: {:#}", e);
            process::exit(1);
        }
    }
}

fn render<T: Serialize>(result: Result<T, AuditError>, pretty: bool) -> Result<String> {
    let value = result?;
    let json = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    json.context("Failed to serialize audit result")
}
