//! Sitemap XML parsing.

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;

use crate::error_handling::SitemapError;

/// Recognized sitemap document shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitemapKind {
    /// `<urlset><url><loc>` lists pages
    UrlSet,
    /// `<sitemapindex><sitemap><loc>` lists further sitemaps
    Index,
}

#[derive(Debug, Deserialize)]
struct UrlSet {
    #[serde(rename = "url", default)]
    urls: Vec<LocEntry>,
}

#[derive(Debug, Deserialize)]
struct SitemapIndex {
    #[serde(rename = "sitemap", default)]
    sitemaps: Vec<LocEntry>,
}

#[derive(Debug, Deserialize)]
struct LocEntry {
    #[serde(default)]
    loc: Option<String>,
}

/// Parses a sitemap and returns its `<loc>` values in document order.
///
/// Index entries are returned as-is; nested sitemaps are not fetched. Entries
/// without a `<loc>` (or with a blank one) are skipped.
///
/// # Errors
///
/// - `SitemapError::Empty` if the document has no root element
/// - `SitemapError::UnrecognizedRoot` if the root is neither `urlset` nor `sitemapindex`
/// - `SitemapError::Reader` / `SitemapError::Xml` for malformed XML
pub fn parse_sitemap(xml: &str) -> Result<(SitemapKind, Vec<String>), SitemapError> {
    let kind = detect_kind(xml)?;
    let entries = match kind {
        SitemapKind::UrlSet => quick_xml::de::from_str::<UrlSet>(xml)?.urls,
        SitemapKind::Index => quick_xml::de::from_str::<SitemapIndex>(xml)?.sitemaps,
    };

    let locs: Vec<String> = entries
        .into_iter()
        .filter_map(|entry| entry.loc)
        .map(|loc| loc.trim().to_string())
        .filter(|loc| !loc.is_empty())
        .collect();
    log::debug!("Parsed {:?} sitemap with {} entries", kind, locs.len());
    Ok((kind, locs))
}

fn detect_kind(xml: &str) -> Result<SitemapKind, SitemapError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Start(element) | Event::Empty(element) => {
                let name = element.local_name();
                return match name.as_ref() {
                    b"urlset" => Ok(SitemapKind::UrlSet),
                    b"sitemapindex" => Ok(SitemapKind::Index),
                    other => Err(SitemapError::UnrecognizedRoot(
                        String::from_utf8_lossy(other).into_owned(),
                    )),
                };
            }
            Event::Eof => return Err(SitemapError::Empty),
            _ => continue,
        }
    }
}
