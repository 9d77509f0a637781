//! Technical entry point against a mock site: robots.txt, sitemap checks and
//! degraded sub-fetches.

mod helpers;

use std::time::{Duration, Instant};

use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::{fast_config, mount_page, mount_robots, mount_sitemap, test_auditor, urlset};
use seo_audit::{AuditError, CheckStatus, Config, DiagnosticKind, RobotsDirective};

const TECHNICAL_PAGE: &str = r#"<!DOCTYPE html>
<html><head>
    <title>Technical</title>
    <link rel="canonical" href="/">
    <meta name="viewport" content="width=device-width">
    <meta name="robots" content="noindex, follow">
    <link rel="icon" href="/favicon.png">
    <link rel="stylesheet" href="/style.css">
    <script src="http://cdn.example.com/legacy.js"></script>
</head><body><img src="/a.png" alt="a"></body></html>"#;

async fn mount_head_ok(server: &MockServer, pattern: &str) {
    Mock::given(method("HEAD"))
        .and(path_regex(pattern))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_robots_disallow_paths_in_order() {
    let server = MockServer::start().await;
    mount_page(&server, "/", TECHNICAL_PAGE.to_string()).await;
    mount_robots(
        &server,
        "User-agent: *\nDisallow: /admin\nDisallow: /tmp\n".to_string(),
    )
    .await;
    let (auditor, _sink) = test_auditor(fast_config());

    let report = auditor
        .analyze_technical_seo(&format!("{}/", server.uri()))
        .await
        .expect("Technical analysis should succeed");
    let technical = &report.technical_seo;

    assert_eq!(technical.disallowed_paths, ["/admin", "/tmp"]);
    assert_eq!(technical.sitemap_url, None);
    assert!(technical.sitemap_valid_urls.is_empty());
    assert_eq!(
        technical.robots_txt_url,
        format!("{}/robots.txt", server.uri())
    );
}

#[tokio::test]
async fn test_page_signals_are_extracted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Robots-Tag", "noarchive")
                .set_body_string(TECHNICAL_PAGE),
        )
        .mount(&server)
        .await;
    let (auditor, _sink) = test_auditor(fast_config());

    let report = auditor
        .analyze_technical_seo(&format!("{}/", server.uri()))
        .await
        .expect("Technical analysis should succeed");
    let technical = &report.technical_seo;

    assert_eq!(
        technical.canonical.as_deref(),
        Some(format!("{}/", server.uri()).as_str())
    );
    assert!(!technical.canonical_conflict);
    assert!(technical.has_viewport);
    assert!(technical.has_fav_icon);
    assert!(technical.mixed_content);
    assert!(!technical.https);
    assert!(!technical.is_www);
    assert!(technical.trailing_slash);
    assert_eq!(technical.page_size_kb, Some(0));
    assert_eq!(technical.num_requests, 3);
    assert!(technical.robots_meta_present);
    assert_eq!(technical.robots_index, RobotsDirective::Failed);
    assert_eq!(technical.robots_follow, RobotsDirective::Pass);
    assert_eq!(technical.x_robots_tag.as_deref(), Some("noarchive"));
    assert_eq!(report.overview.score, technical.score);
}

#[tokio::test]
async fn test_sitemap_validation_is_capped_at_20_in_document_order() {
    let server = MockServer::start().await;
    mount_page(&server, "/", TECHNICAL_PAGE.to_string()).await;
    mount_robots(
        &server,
        format!("User-agent: *\nSitemap: {}/sitemap.xml\n", server.uri()),
    )
    .await;
    let locs: Vec<String> = (0..500)
        .map(|i| format!("{}/p/{}", server.uri(), i))
        .collect();
    mount_sitemap(&server, "/sitemap.xml", urlset(&locs)).await;
    mount_head_ok(&server, r"^/p/\d+$").await;
    let (auditor, _sink) = test_auditor(fast_config());

    let report = auditor
        .analyze_technical_seo(&format!("{}/", server.uri()))
        .await
        .expect("Technical analysis should succeed");
    let technical = &report.technical_seo;

    assert_eq!(
        technical.sitemap_url.as_deref(),
        Some(format!("{}/sitemap.xml", server.uri()).as_str())
    );
    assert_eq!(technical.sitemap_url_count, 500);
    assert_eq!(technical.sitemap_valid_urls.len(), 20);
    for (i, entry) in technical.sitemap_valid_urls.iter().enumerate() {
        assert_eq!(entry.url, locs[i]);
        assert_eq!(entry.status, CheckStatus::Code(200));
    }

    let head_requests = server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .into_iter()
        .filter(|request| request.method.as_str() == "HEAD" && request.url.path().starts_with("/p/"))
        .count();
    assert_eq!(head_requests, 20);
}

#[tokio::test]
async fn test_sitemap_larger_than_page_body_cap_is_read() {
    let server = MockServer::start().await;
    mount_page(&server, "/", TECHNICAL_PAGE.to_string()).await;
    mount_robots(
        &server,
        format!("Sitemap: {}/sitemap.xml\n", server.uri()),
    )
    .await;
    // 50,000 fully annotated entries, the largest sitemap the protocol allows by count
    let base = server.uri();
    let entries: String = (0..50_000)
        .map(|i| {
            format!(
                "<url><loc>{}/p/{}</loc><lastmod>2024-05-01</lastmod>\
                 <changefreq>weekly</changefreq><priority>0.5</priority></url>\n",
                base, i
            )
        })
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}</urlset>"#,
        entries
    );
    let config = Config {
        sitemap_timeout: Duration::from_secs(30),
        ..fast_config()
    };
    assert!(xml.len() > config.max_body_size);
    mount_sitemap(&server, "/sitemap.xml", xml).await;
    mount_head_ok(&server, r"^/p/\d+$").await;
    let (auditor, sink) = test_auditor(config);

    let report = auditor
        .analyze_technical_seo(&format!("{}/", server.uri()))
        .await
        .expect("Technical analysis should succeed");
    let technical = &report.technical_seo;

    assert!(sink.of_kind(DiagnosticKind::SitemapFetchFailed).is_empty());
    assert_eq!(technical.sitemap_url_count, 50_000);
    assert_eq!(technical.sitemap_valid_urls.len(), 20);
    assert_eq!(technical.sitemap_valid_urls[0].url, format!("{}/p/0", base));
    assert_eq!(technical.sitemap_valid_urls[19].url, format!("{}/p/19", base));
}

#[tokio::test]
async fn test_slow_sitemap_entry_records_error_without_blocking_others() {
    let server = MockServer::start().await;
    mount_page(&server, "/", TECHNICAL_PAGE.to_string()).await;
    mount_robots(&server, "Sitemap: /sitemap.xml\n".to_string()).await;

    let mut locs: Vec<String> = (0..19)
        .map(|i| format!("{}/p/{}", server.uri(), i))
        .collect();
    locs.insert(5, format!("{}/slow", server.uri()));
    mount_sitemap(&server, "/sitemap.xml", urlset(&locs)).await;
    mount_head_ok(&server, r"^/p/\d+$").await;
    Mock::given(method("HEAD"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;
    let (auditor, sink) = test_auditor(fast_config());

    let start = Instant::now();
    let report = auditor
        .analyze_technical_seo(&format!("{}/", server.uri()))
        .await
        .expect("Technical analysis should succeed");
    assert!(start.elapsed() < Duration::from_secs(4));

    let statuses = &report.technical_seo.sitemap_valid_urls;
    assert_eq!(statuses.len(), 20);
    assert_eq!(statuses[5].url, format!("{}/slow", server.uri()));
    assert_eq!(statuses[5].status, CheckStatus::Error);
    let completed = statuses
        .iter()
        .filter(|entry| entry.status == CheckStatus::Code(200))
        .count();
    assert_eq!(completed, 19);

    let json = serde_json::to_value(&report).expect("report should serialize");
    assert_eq!(json["technicalSeo"]["sitemapValidUrls"][5]["status"], "error");
    assert_eq!(json["technicalSeo"]["sitemapValidUrls"][0]["status"], 200);

    let failures = sink.of_kind(DiagnosticKind::SitemapCheckFailed);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].url, format!("{}/slow", server.uri()));
}

#[tokio::test]
async fn test_sitemap_index_entries_are_checked_directly() {
    let server = MockServer::start().await;
    mount_page(&server, "/", TECHNICAL_PAGE.to_string()).await;
    mount_robots(&server, "Sitemap: /sitemap_index.xml\n".to_string()).await;
    let index = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <sitemap><loc>{0}/sitemap-posts.xml</loc></sitemap>
  <sitemap><loc>{0}/sitemap-pages.xml</loc></sitemap>
</sitemapindex>"#,
        server.uri()
    );
    mount_sitemap(&server, "/sitemap_index.xml", index).await;
    mount_head_ok(&server, r"^/sitemap-(posts|pages)\.xml$").await;
    let (auditor, _sink) = test_auditor(fast_config());

    let report = auditor
        .analyze_technical_seo(&format!("{}/", server.uri()))
        .await
        .expect("Technical analysis should succeed");
    let statuses = &report.technical_seo.sitemap_valid_urls;

    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].url, format!("{}/sitemap-posts.xml", server.uri()));
    assert_eq!(statuses[1].status, CheckStatus::Code(200));
}

#[tokio::test]
async fn test_malformed_sitemap_degrades_to_empty() {
    let server = MockServer::start().await;
    mount_page(&server, "/", TECHNICAL_PAGE.to_string()).await;
    mount_robots(&server, "Sitemap: /sitemap.xml\n".to_string()).await;
    mount_sitemap(
        &server,
        "/sitemap.xml",
        "<html><body>Not a sitemap</body></html>".to_string(),
    )
    .await;
    let (auditor, sink) = test_auditor(fast_config());

    let report = auditor
        .analyze_technical_seo(&format!("{}/", server.uri()))
        .await
        .expect("Malformed sitemap must not fail the analysis");

    assert!(report.technical_seo.sitemap_url.is_some());
    assert!(report.technical_seo.sitemap_valid_urls.is_empty());
    assert_eq!(sink.of_kind(DiagnosticKind::SitemapParseFailed).len(), 1);
}

#[tokio::test]
async fn test_missing_robots_txt_is_absorbed() {
    let server = MockServer::start().await;
    mount_page(&server, "/", TECHNICAL_PAGE.to_string()).await;
    let (auditor, sink) = test_auditor(fast_config());

    let report = auditor
        .analyze_technical_seo(&format!("{}/", server.uri()))
        .await
        .expect("Missing robots.txt must not fail the analysis");

    assert_eq!(report.technical_seo.sitemap_url, None);
    assert!(report.technical_seo.disallowed_paths.is_empty());
    assert_eq!(sink.of_kind(DiagnosticKind::RobotsFetchFailed).len(), 1);
}

#[tokio::test]
async fn test_favicon_fallback_probe() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        "<html><head><title>No icon link</title></head></html>".to_string(),
    )
    .await;
    Mock::given(method("HEAD"))
        .and(path("/favicon.ico"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    let (auditor, _sink) = test_auditor(fast_config());

    let report = auditor
        .analyze_technical_seo(&format!("{}/", server.uri()))
        .await
        .expect("Technical analysis should succeed");
    assert!(report.technical_seo.has_fav_icon);
}

#[tokio::test]
async fn test_page_fetch_failure_still_resolves() {
    let (auditor, sink) = test_auditor(fast_config());

    let report = auditor
        .analyze_technical_seo("http://127.0.0.1:9/")
        .await
        .expect("Technical analysis never fails on fetch errors");
    let technical = &report.technical_seo;

    assert!(!technical.https);
    assert!(technical.trailing_slash);
    assert_eq!(technical.canonical, None);
    assert!(!technical.has_viewport);
    assert!(!technical.has_fav_icon);
    assert_eq!(technical.page_size_kb, None);
    assert_eq!(technical.num_requests, 0);
    assert!(!technical.robots_meta_present);
    assert!(technical.sitemap_valid_urls.is_empty());
    assert_eq!(sink.of_kind(DiagnosticKind::PageFetchFailed).len(), 1);
    assert_eq!(sink.of_kind(DiagnosticKind::RobotsFetchFailed).len(), 1);
}

#[tokio::test]
async fn test_https_reflects_url_scheme_when_unreachable() {
    let (auditor, _sink) = test_auditor(fast_config());

    let report = auditor
        .analyze_technical_seo("https://127.0.0.1:9/page")
        .await
        .expect("Technical analysis never fails on fetch errors");
    assert!(report.technical_seo.https);
    assert!(!report.technical_seo.trailing_slash);
}

#[tokio::test]
async fn test_invalid_url_is_the_only_error() {
    let (auditor, _sink) = test_auditor(fast_config());
    let err = auditor
        .analyze_technical_seo("not a url")
        .await
        .expect_err("Invalid URL is a contract error");
    assert!(matches!(err, AuditError::InvalidUrl { .. }));
}
