//! Queryable HTML document.
//!
//! `Document` wraps a permissively parsed `scraper::Html` and only exposes
//! read-only queries, so nothing can mutate a document after it is parsed.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::utils::{collapse_whitespace, parse_selector_unsafe, parse_selector_with_fallback};

static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("body", "BODY_SELECTOR"));

/// Elements whose text never renders.
const NON_VISIBLE_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// A parsed HTML document.
///
/// Parsing never fails: malformed or truncated markup is repaired the way a
/// browser would (html5ever), and an empty body yields an empty document.
pub struct Document {
    html: Html,
}

/// One element matched by a query.
#[derive(Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl Document {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// All elements matching `selector`, in document order.
    pub fn select<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = Node<'a>> + 'a {
        self.html.select(selector).map(|element| Node { element })
    }

    /// All elements matching a selector string. An invalid selector matches nothing.
    pub fn select_css(&self, css: &str) -> Vec<Node<'_>> {
        let selector = parse_selector_with_fallback(css, "Document::select_css");
        self.html
            .select(&selector)
            .map(|element| Node { element })
            .collect()
    }

    pub fn count(&self, selector: &Selector) -> usize {
        self.html.select(selector).count()
    }

    pub fn exists(&self, selector: &Selector) -> bool {
        self.html.select(selector).next().is_some()
    }

    pub fn first<'a>(&'a self, selector: &'a Selector) -> Option<Node<'a>> {
        self.select(selector).next()
    }

    /// Trimmed text of the first match.
    pub fn first_text(&self, selector: &Selector) -> Option<String> {
        self.first(selector).map(|node| node.text())
    }

    /// Attribute value of the first match that carries the attribute.
    pub fn first_attr(&self, selector: &Selector, attr: &str) -> Option<String> {
        self.select(selector)
            .find_map(|node| node.attr(attr))
            .map(str::to_string)
    }

    /// Rendered body text with whitespace collapsed.
    ///
    /// Text inside `script`, `style`, `noscript` and `template` is skipped. Adjacent
    /// text nodes are concatenated as-is, matching how a DOM `textContent` read behaves.
    pub fn visible_body_text(&self) -> String {
        let Some(body) = self.html.select(&BODY_SELECTOR).next() else {
            return String::new();
        };

        let mut raw = String::new();
        for node in body.descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|e| NON_VISIBLE_ELEMENTS.contains(&e.name()))
            });
            if !hidden {
                raw.push_str(text);
            }
        }
        collapse_whitespace(&raw)
    }
}

impl<'a> Node<'a> {
    /// Lowercase tag name.
    pub fn name(&self) -> &'a str {
        self.element.value().name()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Concatenated descendant text, trimmed.
    pub fn text(&self) -> String {
        self.element.text().collect::<String>().trim().to_string()
    }
}
