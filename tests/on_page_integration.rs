//! On-page entry point against a mock site.

mod helpers;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::{fast_config, mount_page, reference_page, test_auditor};
use seo_audit::{AuditError, FetchError, HeadingLevel};

#[tokio::test]
async fn test_reference_page_scores_80() {
    let server = MockServer::start().await;
    mount_page(&server, "/", reference_page()).await;
    let (auditor, _sink) = test_auditor(fast_config());

    let report = auditor
        .analyze_on_page(&format!("{}/", server.uri()))
        .await
        .expect("On-page analysis should succeed");

    let onpage = &report.onpage;
    assert!(onpage.title_pass);
    assert!(onpage.meta_pass);
    assert!(onpage.headings_pass);
    assert_eq!(onpage.headings.count(HeadingLevel::H1), 1);
    assert_eq!(onpage.headings.count(HeadingLevel::H3), 0);
    assert_eq!(onpage.images.count, 3);
    assert_eq!(onpage.images.with_alt, 3);
    assert_eq!(onpage.links.classification.internal, 2);
    assert_eq!(onpage.links.classification.external, 1);
    assert_eq!(onpage.links.classification.broken, 0);
    assert!(onpage.social.pass);
    assert!(onpage.structured_data_present);
    assert!(onpage.body_pass);
    assert_eq!(onpage.score, 80);
    assert_eq!(report.overview.score, 80);
    assert_eq!(report.overview.max_score, 100);
}

#[tokio::test]
async fn test_on_page_report_json_shape() {
    let server = MockServer::start().await;
    mount_page(&server, "/", reference_page()).await;
    let (auditor, _sink) = test_auditor(fast_config());

    let report = auditor
        .analyze_on_page(&format!("{}/", server.uri()))
        .await
        .expect("On-page analysis should succeed");
    let json = serde_json::to_value(&report).expect("report should serialize");

    assert_eq!(json["overview"]["maxScore"], 100);
    assert_eq!(json["onpage"]["headings"]["counts"]["h1"], 1);
    assert_eq!(json["onpage"]["headings"]["texts"]["h2"][0], "A");
    assert_eq!(json["onpage"]["images"]["withoutAlt"], 0);
    assert_eq!(json["onpage"]["links"]["internal"], 2);
    assert_eq!(json["onpage"]["social"]["twitterCard"], "summary");
    assert_eq!(json["onpage"]["structuredDataPresent"], true);
    assert_eq!(json["onpage"]["structuredDataTypes"][0], "Organization");
}

#[tokio::test]
async fn test_http_error_surfaces_as_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let (auditor, sink) = test_auditor(fast_config());

    let err = auditor
        .analyze_on_page(&format!("{}/missing", server.uri()))
        .await
        .expect_err("404 page should surface as an error");

    assert!(matches!(
        err,
        AuditError::Fetch {
            source: FetchError::Status(404),
            ..
        }
    ));
    // Surfaced errors are the caller's to report
    assert!(sink.diagnostics().is_empty());
}

#[tokio::test]
async fn test_connection_refused_surfaces_as_fetch_error() {
    let (auditor, _sink) = test_auditor(fast_config());

    let err = auditor
        .analyze_on_page("http://127.0.0.1:9/")
        .await
        .expect_err("Refused connection should surface as an error");
    assert!(matches!(err, AuditError::Fetch { .. }));
}

#[tokio::test]
async fn test_relative_url_is_contract_error() {
    let (auditor, _sink) = test_auditor(fast_config());

    let err = auditor
        .analyze_on_page("/about")
        .await
        .expect_err("Relative URL should be rejected");
    assert!(matches!(err, AuditError::InvalidUrl { .. }));
}

#[tokio::test]
async fn test_malformed_html_still_produces_result() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/broken",
        "<html><head><title>Broken page</title><body><h1>Heading<h2>Sub</h1><img src=x><a href=#>"
            .to_string(),
    )
    .await;
    let (auditor, _sink) = test_auditor(fast_config());

    let report = auditor
        .analyze_on_page(&format!("{}/broken", server.uri()))
        .await
        .expect("Malformed HTML should not fail the analysis");
    assert!(report.onpage.score <= 85);
    assert_eq!(report.onpage.links.classification.broken, 1);
}
