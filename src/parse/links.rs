//! Hyperlink extraction and filtering.
//!
//! Links are collected from the original markup in document order, duplicates
//! included, and passed through a `LinkFilter`.

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::config::MAX_LINK_CONTEXT_CHARS;
use crate::parse::text::collapse_whitespace;
use crate::utils::truncate_chars;

const ANCHOR_SELECTOR_STR: &str = "a[href]";

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(ANCHOR_SELECTOR_STR, "ANCHOR_SELECTOR"));

/// A hyperlink found in the markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// The `href` target, trimmed
    pub href: String,
    /// Anchor text with whitespace collapsed (empty for image-only links)
    pub text: String,
    /// Collapsed text of the anchor's parent element
    pub context: String,
}

/// Include/exclude rules applied to each extracted link.
///
/// The serialized option names (`nullableText`, `linkMatcherList`, `ignore`)
/// match the configuration files used by existing mail templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkFilter {
    /// Keep links whose anchor text is empty or whitespace
    #[serde(rename = "nullableText", alias = "nullable_text")]
    pub nullable_text: bool,

    /// Keep only links whose target contains one of these substrings
    #[serde(rename = "linkMatcherList", alias = "link_matcher_list")]
    pub link_matcher_list: Vec<String>,

    /// Drop links whose target contains one of these substrings
    pub ignore: Vec<String>,
}

impl Default for LinkFilter {
    fn default() -> Self {
        Self {
            nullable_text: true,
            link_matcher_list: Vec::new(),
            ignore: Vec::new(),
        }
    }
}

impl LinkFilter {
    /// Sets whether links without anchor text are kept.
    pub fn nullable_text(mut self, nullable_text: bool) -> Self {
        self.nullable_text = nullable_text;
        self
    }

    /// Sets the required target substrings.
    pub fn link_matchers<I, S>(mut self, matchers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.link_matcher_list = matchers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the ignored target substrings.
    pub fn ignore<I, S>(mut self, ignored: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore = ignored.into_iter().map(Into::into).collect();
        self
    }

    /// Checks a target against the ignore list, then the matcher list.
    ///
    /// Ignore wins over inclusion. Empty lists impose no restriction.
    pub fn accepts_target(&self, target: &str) -> bool {
        if self.ignore.iter().any(|ignored| target.contains(ignored.as_str())) {
            return false;
        }
        self.link_matcher_list.is_empty()
            || self
                .link_matcher_list
                .iter()
                .any(|matcher| target.contains(matcher.as_str()))
    }

    /// Full per-link decision: target rules first, then the anchor-text rule.
    pub fn accepts(&self, link: &Link) -> bool {
        if !self.accepts_target(&link.href) {
            return false;
        }
        self.nullable_text || !link.text.trim().is_empty()
    }
}

/// Extracts all `a[href]` links from a parsed document that pass `filter`.
///
/// Document order is preserved and repeated links are kept as found.
pub fn extract_links(document: &Html, filter: &LinkFilter) -> Vec<Link> {
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| {
            let href = element.value().attr("href")?.trim();
            Some(Link {
                href: href.to_string(),
                text: collapse_whitespace(&element.text().collect::<String>()),
                context: link_context(&element),
            })
        })
        .filter(|link| filter.accepts(link))
        .collect()
}

fn link_context(element: &ElementRef) -> String {
    let Some(parent) = element.parent().and_then(ElementRef::wrap) else {
        return String::new();
    };
    let text = collapse_whitespace(&parent.text().collect::<String>());
    truncate_chars(&text, MAX_LINK_CONTEXT_CHARS).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(href: &str, text: &str) -> Link {
        Link {
            href: href.to_string(),
            text: text.to_string(),
            context: String::new(),
        }
    }

    #[test]
    fn test_default_filter_is_identity() {
        let filter = LinkFilter::default();
        assert!(filter.accepts(&link("https://example.com", "")));
        assert!(filter.accepts(&link("mailto:job@test.de", "Mail")));
    }

    #[test]
    fn test_ignore_takes_precedence_over_matchers() {
        let filter = LinkFilter::default()
            .link_matchers(["stepstone.de"])
            .ignore(["stepstone.de/unsubscribe"]);
        assert!(filter.accepts_target("https://www.stepstone.de/ja.cfm?id=1"));
        assert!(!filter.accepts_target("https://www.stepstone.de/unsubscribe?id=1"));
    }

    #[test]
    fn test_matchers_require_one_substring() {
        let filter = LinkFilter::default().link_matchers(["monster.de", "stepstone.de"]);
        assert!(filter.accepts_target("http://stellenanzeige.monster.de/x"));
        assert!(filter.accepts_target("https://www.stepstone.de/y"));
        assert!(!filter.accepts_target("https://www.indeed.de/z"));
    }

    #[test]
    fn test_nullable_text_false_drops_blank_anchor() {
        let filter = LinkFilter::default().nullable_text(false);
        assert!(!filter.accepts(&link("https://example.com", "")));
        assert!(!filter.accepts(&link("https://example.com", "   ")));
        assert!(filter.accepts(&link("https://example.com", "Zur Stelle")));
    }

    #[test]
    fn test_extract_links_document_order_and_duplicates() {
        let html = r#"<p>Erst <a href="https://a.de">A</a></p>
            <a href=" https://b.de ">B</a><a href="https://a.de">A</a><a name="anchor">kein Link</a>"#;
        let document = Html::parse_document(html);
        let links = extract_links(&document, &LinkFilter::default());
        let hrefs: Vec<&str> = links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, vec!["https://a.de", "https://b.de", "https://a.de"]);
        assert_eq!(links[0].text, "A");
        assert_eq!(links[0].context, "Erst A");
    }

    #[test]
    fn test_extract_links_anchor_text_collapsed() {
        let html = "<a href=\"https://x.de\">\n  Jetzt\n  <b>bewerben</b>\n</a>";
        let document = Html::parse_document(html);
        let links = extract_links(&document, &LinkFilter::default());
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text, "Jetzt bewerben");
    }

    #[test]
    fn test_extract_links_image_link_filtered_when_not_nullable() {
        let html = r#"<a href="https://x.de/logo"><img src="logo.png"></a><a href="https://x.de/job">Job</a>"#;
        let document = Html::parse_document(html);
        let all = extract_links(&document, &LinkFilter::default());
        assert_eq!(all.len(), 2);
        let filtered = extract_links(&document, &LinkFilter::default().nullable_text(false));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].href, "https://x.de/job");
    }
}
