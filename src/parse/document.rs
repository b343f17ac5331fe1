//! The per-email document and its combined extraction result.

use std::sync::OnceLock;

use log::debug;
use scraper::Html;
use serde::Serialize;

use crate::config::Config;
use crate::parse::email::{extract_email, extract_mailto};
use crate::parse::frame::{FrameFetcher, FrameSelector};
use crate::parse::links::{extract_links, Link, LinkFilter};
use crate::parse::text::{looks_like_markup, normalize_whitespace, render_plain_text};
use crate::parse::urls::extract_urls;

/// Everything extracted from one email body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// Filtered hyperlinks from the markup, in document order
    pub links: Vec<Link>,
    /// Distinct bare URLs from the rendered text, in order of appearance
    pub urls: Vec<String>,
    /// First contact email address
    pub email: Option<String>,
}

/// Whether a document's content may still hold markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentKind {
    Markup,
    PlainText,
}

/// One email body: raw markup plus its lazily rendered plain text.
///
/// The plain text is rendered on first use and cached; the document never
/// changes afterwards. `MailDocument` is `Send + Sync`, so one instance can be
/// read from several threads.
#[derive(Debug)]
pub struct MailDocument {
    content: String,
    kind: ContentKind,
    filter: LinkFilter,
    plain_text: OnceLock<String>,
}

impl MailDocument {
    /// Creates a document with the identity link filter.
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_filter(content, LinkFilter::default())
    }

    /// Creates a document whose links and URLs pass through `filter`.
    pub fn with_filter(content: impl Into<String>, filter: LinkFilter) -> Self {
        Self {
            content: content.into(),
            kind: ContentKind::Markup,
            filter,
            plain_text: OnceLock::new(),
        }
    }

    /// Creates a document filtered by the configured `link_filter`.
    pub fn from_config(content: impl Into<String>, config: &Config) -> Self {
        Self::with_filter(content, config.link_filter.clone())
    }

    /// The raw content this document was created from.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The link filter in effect.
    pub fn filter(&self) -> &LinkFilter {
        &self.filter
    }

    /// Whether the content is already rendered text (see `to_plain_text`).
    pub fn is_plain_text(&self) -> bool {
        self.kind == ContentKind::PlainText
    }

    /// The rendered plain text, computed once.
    pub fn plain_text(&self) -> &str {
        self.plain_text.get_or_init(|| match self.kind {
            ContentKind::Markup => render_plain_text(&self.content),
            ContentKind::PlainText => normalize_whitespace(&self.content),
        })
    }

    /// Replaces the content with its rendered plain text.
    ///
    /// The new content is never parsed as HTML again, so decoded text such as
    /// `<jobs@firma.de>` survives. Links are only found in markup, so a
    /// plain-text document yields none.
    pub fn to_plain_text(self) -> Self {
        let text = self.plain_text().to_string();
        Self {
            content: text,
            kind: ContentKind::PlainText,
            filter: self.filter,
            plain_text: OnceLock::new(),
        }
    }

    /// Restricts the document to its first frame's content (see `FrameSelector::select`).
    pub async fn find_first_frame<F: FrameFetcher>(self, selector: &FrameSelector<F>) -> Self {
        selector.select(self).await
    }

    /// A new markup document with different content and the same filter.
    pub(crate) fn with_content(self, content: String) -> Self {
        Self::with_filter(content, self.filter)
    }

    fn has_markup(&self) -> bool {
        self.kind == ContentKind::Markup && looks_like_markup(&self.content)
    }

    /// Hyperlinks in the markup that pass the filter.
    pub fn links(&self) -> Vec<Link> {
        if !self.has_markup() {
            return Vec::new();
        }
        let document = Html::parse_document(&self.content);
        extract_links(&document, &self.filter)
    }

    /// Bare URLs in the rendered text that pass the filter's target rules.
    pub fn urls(&self) -> Vec<String> {
        extract_urls(self.plain_text(), &self.filter)
    }

    /// The first email address in the rendered text, falling back to `mailto:` links.
    pub fn email(&self) -> Option<String> {
        extract_email(self.plain_text()).or_else(|| {
            if !self.has_markup() {
                return None;
            }
            extract_mailto(&Html::parse_document(&self.content))
        })
    }

    /// Runs link, URL and email extraction together.
    pub fn parse(&self) -> ParseResult {
        let (links, email_from_markup) = if self.has_markup() {
            let document = Html::parse_document(&self.content);
            (
                extract_links(&document, &self.filter),
                extract_mailto(&document),
            )
        } else {
            (Vec::new(), None)
        };

        let urls = extract_urls(self.plain_text(), &self.filter);
        let email = extract_email(self.plain_text()).or(email_from_markup);

        debug!(
            "Extracted {} links, {} urls, email {:?}",
            links.len(),
            urls.len(),
            email
        );

        ParseResult { links, urls, email }
    }
}
