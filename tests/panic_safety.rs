//! Tests to ensure no panics occur on hostile input
//!
//! The parsers and builders face arbitrary remote content: HTML, robots.txt and
//! sitemap XML. These property tests feed them arbitrary strings and check that
//! they return (possibly empty) results instead of panicking.

use proptest::prelude::*;
use url::Url;

use seo_audit::analysis::{build_content_result, build_on_page_result};
use seo_audit::parse::{extract_page_signals, Document};
use seo_audit::recommendations;
use seo_audit::robots::parse_robots_txt;
use seo_audit::sitemap::parse_sitemap;

fn base() -> Url {
    Url::parse("https://example.com/").expect("valid base URL")
}

proptest! {
    #[test]
    fn test_arbitrary_html_never_panics(body in ".{0,2000}") {
        let document = Document::parse(&body);
        let on_page = build_on_page_result(&document, &base());
        let content = build_content_result(&document, body.chars().count());
        let _ = extract_page_signals(&document, &base());
        prop_assert!(on_page.score <= 85);
        prop_assert!(content.score <= 100);
        let _ = recommendations::on_page(&on_page);
        let _ = recommendations::content(&content);
    }

    #[test]
    fn test_tag_soup_never_panics(
        body in "(<(a|img|h1|h2|p|meta|link|script|title)( href=\"[#/a-z:]{0,8}\"| alt=\"[a-z ]{0,4}\"| rel=\"(canonical|icon|stylesheet)\")?>|</(a|h1|h2|p|script|title)>|[a-z .]{0,10}){0,40}"
    ) {
        let document = Document::parse(&body);
        let result = build_on_page_result(&document, &base());
        prop_assert_eq!(
            result.images.with_alt + result.images.without_alt,
            result.images.count
        );
    }

    #[test]
    fn test_arbitrary_robots_txt_never_panics(body in "((Sitemap|SITEMAP|sitemap|Disallow|disallow|DISALLOW|Allow|User-agent)\\s*:\\s*[^\\n]{0,30}\\n|#[^\\n]{0,20}\\n|[^\\n]{0,30}\\n){0,20}") {
        let robots = parse_robots_txt(&body, &base());
        prop_assert!(robots.disallowed_paths.iter().all(|p| !p.is_empty()));
        prop_assert_eq!(robots.sitemap_url(), robots.sitemaps.first().map(String::as_str));
    }

    #[test]
    fn test_arbitrary_sitemap_never_panics(body in "(<\\??[a-z]{0,10}[^>]{0,20}>|</[a-z]{0,10}>|[^<]{0,20}){0,30}") {
        let _ = parse_sitemap(&body);
    }
}
