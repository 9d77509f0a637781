use crate::config::{MAX_PAGE_SIZE_KB, MAX_REQUEST_COUNT};
use crate::models::{Recommendation, RobotsDirective, TechnicalResult};

/// Technical recommendations, in rule order.
///
/// `isWWW` and `trailingSlash` are scored but produce no message; neither is
/// universally correct advice.
pub fn technical(result: &TechnicalResult) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if result.robots_index == RobotsDirective::Failed {
        out.push(Recommendation::new(
            "Remove the noindex robots directive if the page should appear in search results.",
        ));
    }
    if result.robots_follow == RobotsDirective::Failed {
        out.push(Recommendation::new(
            "Remove the nofollow robots directive so crawlers can follow the page's links.",
        ));
    }
    if !result.robots_meta_present {
        out.push(Recommendation::new(
            "Add a robots meta tag stating the page's indexing preferences.",
        ));
    }

    if !result.https {
        out.push(Recommendation::new("Serve the page over HTTPS."));
    }

    if result.canonical.is_none() {
        out.push(Recommendation::new("Add a canonical link tag."));
    }
    if result.canonical_conflict {
        out.push(Recommendation::new(
            "Keep a single canonical link tag (several were found).",
        ));
    }

    if !result.has_viewport {
        out.push(Recommendation::new(
            "Add a viewport meta tag for mobile devices.",
        ));
    }

    if result.mixed_content {
        out.push(Recommendation::new(
            "Load every script, image and stylesheet over HTTPS to avoid mixed content.",
        ));
    }

    match result.page_size_kb {
        Some(kb) if kb >= MAX_PAGE_SIZE_KB => out.push(Recommendation::new(format!(
            "Reduce the page size below {} KB (currently {} KB).",
            MAX_PAGE_SIZE_KB, kb
        ))),
        Some(_) => {}
        None => out.push(Recommendation::new(
            "Send a Content-Length header so the page size can be measured.",
        )),
    }

    if result.num_requests >= MAX_REQUEST_COUNT {
        out.push(Recommendation::new(format!(
            "Reduce the number of requested resources below {} (currently {}).",
            MAX_REQUEST_COUNT, result.num_requests
        )));
    }

    if !result.has_fav_icon {
        out.push(Recommendation::new("Add a favicon."));
    }
    if !result.hreflang {
        out.push(Recommendation::new(
            "Add hreflang links if the site serves several languages or regions.",
        ));
    }
    if !result.has_amp {
        out.push(Recommendation::new(
            "Consider linking an AMP version of the page.",
        ));
    }

    if result.sitemap_url.is_none() {
        out.push(Recommendation::new("Declare a sitemap in robots.txt."));
    }
    let failing = result
        .sitemap_valid_urls
        .iter()
        .filter(|entry| !entry.status.is_ok())
        .count();
    if failing > 0 {
        out.push(Recommendation::new(format!(
            "Fix {} sitemap URL(s) that did not return a successful status.",
            failing
        )));
    }

    out
}
