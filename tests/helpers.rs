// Shared test helpers: auditor construction and mock-site fixtures.
//
// Each integration test file includes this module with `mod helpers;`.

use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use seo_audit::{Auditor, CollectingSink, Config};

/// Config with short timeouts so failure paths resolve quickly.
#[allow(dead_code)] // Used by other test files
pub fn fast_config() -> Config {
    Config {
        page_timeout: Duration::from_secs(3),
        technical_page_timeout: Duration::from_secs(3),
        robots_timeout: Duration::from_secs(2),
        sitemap_timeout: Duration::from_secs(3),
        sitemap_check_timeout: Duration::from_millis(500),
        favicon_timeout: Duration::from_secs(1),
        ..Default::default()
    }
}

/// Auditor reporting into a `CollectingSink` the test can inspect.
#[allow(dead_code)] // Used by other test files
pub fn test_auditor(config: Config) -> (Auditor, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::new());
    let auditor = Auditor::new(config)
        .expect("Failed to create auditor")
        .with_sink(sink.clone());
    (auditor, sink)
}

/// A page where every on-page check passes except "h3 present":
/// 45-char title, 140-char meta description, one h1, one h2, three images with
/// alt, two internal links, one external link, all three social tags, one
/// JSON-LD block and more than 500 characters of body text.
#[allow(dead_code)] // Used by other test files
pub fn reference_page() -> String {
    let title = "Handmade Oak Furniture for Homes and Offices.";
    assert_eq!(title.chars().count(), 45);
    let description = "D".repeat(140);
    let paragraph = "Our workshop builds durable tables and chairs from sustainably sourced oak. ";
    let paragraphs: String = (0..4)
        .map(|_| format!("<p>{}</p>", paragraph.repeat(3)))
        .collect();
    format!(
        r#"<!DOCTYPE html>
<html lang="en"><head>
    <title>{title}</title>
    <meta name="description" content="{description}">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta property="og:title" content="Handmade Oak Furniture">
    <meta property="og:description" content="Durable oak furniture">
    <meta name="twitter:card" content="summary">
    <script type="application/ld+json">{{"@context":"https://schema.org","@type":"Organization"}}</script>
</head><body>
    <h1>Only</h1>
    <h2>A</h2>
    <img src="/img/1.jpg" alt="Oak table">
    <img src="/img/2.jpg" alt="Oak chair">
    <img src="/img/3.jpg" alt="Workshop">
    <a href="/about">About us</a>
    <a href="/contact">Contact</a>
    <a href="https://other.com/partners">Partners</a>
    {paragraphs}
</body></html>"#
    )
}

/// Serves `html` for GET `route`.
#[allow(dead_code)] // Used by other test files
pub async fn mount_page(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(html),
        )
        .mount(server)
        .await;
}

/// Serves `body` as `/robots.txt`.
#[allow(dead_code)] // Used by other test files
pub async fn mount_robots(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Serves `xml` for GET `route` as a sitemap.
#[allow(dead_code)] // Used by other test files
pub async fn mount_sitemap(server: &MockServer, route: &str, xml: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/xml")
                .set_body_string(xml),
        )
        .mount(server)
        .await;
}

/// A URL-set sitemap listing `locs` in order.
#[allow(dead_code)] // Used by other test files
pub fn urlset(locs: &[String]) -> String {
    let entries: String = locs
        .iter()
        .map(|loc| format!("<url><loc>{}</loc></url>", loc))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">{}</urlset>"#,
        entries
    )
}
