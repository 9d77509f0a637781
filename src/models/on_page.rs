//! On-page result records.

use std::collections::BTreeMap;

use serde::Serialize;

use super::report::Overview;

/// Heading levels h1..h6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    /// Maps a tag name (`"h1"`..`"h6"`, any case) to its level.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "h1" => Some(HeadingLevel::H1),
            "h2" => Some(HeadingLevel::H2),
            "h3" => Some(HeadingLevel::H3),
            "h4" => Some(HeadingLevel::H4),
            "h5" => Some(HeadingLevel::H5),
            "h6" => Some(HeadingLevel::H6),
            _ => None,
        }
    }
}

/// Heading texts per level, in document order, with per-level counts.
///
/// Only constructible through `push`/`from_headings`, which keep
/// `counts[level] == texts[level].len()` for every level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadingSet {
    texts: BTreeMap<HeadingLevel, Vec<String>>,
    counts: BTreeMap<HeadingLevel, usize>,
}

impl Default for HeadingSet {
    fn default() -> Self {
        Self {
            texts: HeadingLevel::ALL.iter().map(|l| (*l, Vec::new())).collect(),
            counts: HeadingLevel::ALL.iter().map(|l| (*l, 0)).collect(),
        }
    }
}

impl HeadingSet {
    pub fn from_headings<I>(headings: I) -> Self
    where
        I: IntoIterator<Item = (HeadingLevel, String)>,
    {
        let mut set = Self::default();
        for (level, text) in headings {
            set.push(level, text);
        }
        set
    }

    pub fn push(&mut self, level: HeadingLevel, text: String) {
        let texts = self.texts.entry(level).or_default();
        texts.push(text);
        self.counts.insert(level, texts.len());
    }

    pub fn count(&self, level: HeadingLevel) -> usize {
        self.counts.get(&level).copied().unwrap_or(0)
    }

    pub fn texts(&self, level: HeadingLevel) -> &[String] {
        self.texts.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// One `<img>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub src: String,
    pub alt: Option<String>,
    /// `alt` present and non-empty after trimming
    pub has_alt: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSummary {
    pub count: usize,
    pub with_alt: usize,
    pub without_alt: usize,
    pub pass: bool,
    pub items: Vec<ImageRecord>,
}

/// Anchor tallies relative to the audited host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LinkClassification {
    pub internal: usize,
    pub external: usize,
    pub broken: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LinkSummary {
    #[serde(flatten)]
    pub classification: LinkClassification,
    pub pass: bool,
}

/// Open Graph / Twitter Card tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialTags {
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub twitter_card: Option<String>,
    /// All three tags present
    pub pass: bool,
}

/// On-page analysis of one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnPageResult {
    pub score: u32,
    pub title: String,
    pub title_pass: bool,
    pub meta_description: String,
    pub meta_pass: bool,
    pub headings: HeadingSet,
    pub headings_pass: bool,
    pub images: ImageSummary,
    pub links: LinkSummary,
    pub social: SocialTags,
    pub structured_data_present: bool,
    pub structured_data_types: Vec<String>,
    pub body_text_length: usize,
    pub body_pass: bool,
}

/// `analyze_on_page` output: `{overview:{score,maxScore}, onpage:{...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OnPageReport {
    pub overview: Overview,
    pub onpage: OnPageResult,
}

impl From<OnPageResult> for OnPageReport {
    fn from(onpage: OnPageResult) -> Self {
        Self {
            overview: Overview::new(onpage.score),
            onpage,
        }
    }
}
