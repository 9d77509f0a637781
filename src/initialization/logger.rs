//! Logger initialization.

use std::io::Write;

use chrono::SecondsFormat;
use colored::Colorize;
use log::LevelFilter;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. `RUST_LOG` is read first and
/// the provided `level` overrides it, so `RUST_LOG=seo_audit=trace` still works
/// for quick debugging while `--log-level` stays authoritative.
///
/// Logs go to stderr; stdout is reserved for the JSON audit result.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger was already installed.
///
/// # Examples
///
/// ```bash
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=seo_audit::diagnostics=debug seo_audit https://example.com --log-level info
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("rustls", LevelFilter::Warn);
    builder.filter_module("seo_audit", level);
    builder.target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| writeln!(buf, "{}", json_line(record)));
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = format!("{:<5}", record.level());
                let level = match record.level() {
                    log::Level::Error => level.red().bold(),
                    log::Level::Warn => level.yellow(),
                    log::Level::Info => level.green(),
                    log::Level::Debug => level.blue(),
                    log::Level::Trace => level.dimmed(),
                };
                writeln!(
                    buf,
                    "{} {} {}: {}",
                    chrono::Local::now().format("%H:%M:%S%.3f").to_string().dimmed(),
                    level,
                    record.target().cyan(),
                    record.args()
                )
            });
        }
    }

    // try_init so a second initialization (tests) reports an error instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// One JSON object per record.
fn json_line(record: &log::Record<'_>) -> serde_json::Value {
    serde_json::json!({
        "time": chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "level": record.level().as_str(),
        "target": record.target(),
        "message": record.args().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_twice_reports_error_instead_of_panicking() {
        // env_logger can only be installed once per process; whichever call
        // comes second must fail gracefully.
        let first = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(first.is_err() || second.is_err());
    }

    #[test]
    fn test_json_line_fields() {
        let line = json_line(
            &log::Record::builder()
                .level(log::Level::Warn)
                .target("seo_audit::diagnostics")
                .args(format_args!("sitemap fetch failed: {}", "timeout"))
                .build(),
        );
        assert_eq!(line["level"], "WARN");
        assert_eq!(line["target"], "seo_audit::diagnostics");
        assert_eq!(line["message"], "sitemap fetch failed: timeout");
        let time = line["time"].as_str().expect("time is a string");
        assert!(chrono::DateTime::parse_from_rfc3339(time).is_ok());
    }
}
