//! Tests for command-line parsing and URL normalization.

use clap::Parser;
use seo_audit::{normalize_audit_url, AuditCategory, LogFormat, LogLevel, Opt};

#[test]
fn test_all_categories_parse() {
    for (arg, expected) in [
        ("all", AuditCategory::All),
        ("on-page", AuditCategory::OnPage),
        ("technical", AuditCategory::Technical),
        ("content", AuditCategory::Content),
    ] {
        let opt = Opt::try_parse_from(["seo_audit", "example.com", "--category", arg])
            .unwrap_or_else(|e| panic!("category {} should parse: {}", arg, e));
        assert_eq!(opt.category, expected);
    }
}

#[test]
fn test_logging_flags_parse() {
    let opt = Opt::try_parse_from([
        "seo_audit",
        "example.com",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--pretty",
    ])
    .expect("logging flags should parse");
    assert!(matches!(opt.log_level, LogLevel::Debug));
    assert!(matches!(opt.log_format, LogFormat::Json));
    assert!(opt.pretty);
}

#[test]
fn test_url_is_required() {
    assert!(Opt::try_parse_from(["seo_audit"]).is_err());
}

#[test]
fn test_invalid_deadline_is_rejected() {
    let result = Opt::try_parse_from(["seo_audit", "example.com", "--deadline-seconds", "soon"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_url_normalization() {
    let opt = Opt::try_parse_from(["seo_audit", "www.example.com/blog"]).expect("should parse");
    assert_eq!(
        normalize_audit_url(&opt.url).expect("should normalize"),
        "https://www.example.com/blog"
    );
}
