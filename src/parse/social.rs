//! Social (Open Graph / Twitter Card) tag extraction.

use std::sync::LazyLock;

use scraper::Selector;

use crate::models::SocialTags;
use crate::utils::parse_selector_unsafe;

// Some sites put og:* in `name` and twitter:* in `property`; accept both spellings.
const OG_TITLE_SELECTOR_STR: &str = r#"meta[property="og:title"], meta[name="og:title"]"#;
const OG_DESCRIPTION_SELECTOR_STR: &str =
    r#"meta[property="og:description"], meta[name="og:description"]"#;
const TWITTER_CARD_SELECTOR_STR: &str =
    r#"meta[name="twitter:card"], meta[property="twitter:card"]"#;

static OG_TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(OG_TITLE_SELECTOR_STR, "OG_TITLE_SELECTOR"));
static OG_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(OG_DESCRIPTION_SELECTOR_STR, "OG_DESCRIPTION_SELECTOR")
});
static TWITTER_CARD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TWITTER_CARD_SELECTOR_STR, "TWITTER_CARD_SELECTOR"));

/// Extracts `og:title`, `og:description` and `twitter:card`.
///
/// A tag counts as present only with a non-empty `content`. `pass` requires all
/// three.
pub fn extract_social_tags(document: &super::Document) -> SocialTags {
    let content_of = |selector: &Selector| {
        document
            .first_attr(selector, "content")
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
    };

    let og_title = content_of(&OG_TITLE_SELECTOR);
    let og_description = content_of(&OG_DESCRIPTION_SELECTOR);
    let twitter_card = content_of(&TWITTER_CARD_SELECTOR);
    let pass = og_title.is_some() && og_description.is_some() && twitter_card.is_some();

    SocialTags {
        og_title,
        og_description,
        twitter_card,
        pass,
    }
}
