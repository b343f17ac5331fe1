//! Plain-text rendering.
//!
//! Converts email markup into readable text: tags are stripped, entities are
//! decoded by the HTML parser, whitespace is collapsed and paragraph-level
//! line breaks are kept. Input without any markup only goes through the
//! whitespace normalization, which makes rendering idempotent.

use regex::Regex;
use scraper::node::Node;
use scraper::{ElementRef, Html};
use std::sync::LazyLock;

// Tags of known HTML elements, plus doctype and comment openers.
// `<jobs@firma.de>` and `a<b und Bonus` are text.
const MARKUP_PATTERN: &str = concat!(
    r"(?i)<!doctype\s|<!--|</?(?:",
    r"a|abbr|address|area|article|aside|b|base|big|blockquote|body|br|caption|center|",
    r"code|col|colgroup|dd|div|dl|dt|em|fieldset|font|footer|form|frame|frameset|h[1-6]|",
    r"head|header|hr|html|i|iframe|img|input|label|li|link|main|meta|nav|noscript|ol|p|",
    r"pre|s|section|small|span|strike|strong|style|sub|sup|table|tbody|td|template|",
    r"tfoot|th|thead|title|tr|u|ul",
    r")(?:\s[^<>]*)?/?>",
);

static MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(MARKUP_PATTERN).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in MARKUP_RE: {}. This is a programming error.",
            MARKUP_PATTERN, e
        )
    })
});

/// Elements whose content is never visible text.
const SKIPPED_ELEMENTS: &[&str] = &["head", "script", "style", "noscript", "template", "title"];

/// Elements that start and end a paragraph (rendered with a blank line around them).
const PARAGRAPH_ELEMENTS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "table", "ul", "ol", "dl", "blockquote", "pre", "hr",
];

/// Elements that start and end a line.
const LINE_ELEMENTS: &[&str] = &[
    "div", "tr", "li", "dt", "dd", "section", "article", "header", "footer", "nav", "aside",
    "main", "form", "fieldset", "address", "center", "caption", "tbody", "thead", "tfoot",
    "frameset", "body",
];

/// Renders markup (or already-plain text) as normalized plain text.
///
/// Never fails: html5ever recovers from unclosed and misnested tags, so the
/// result is always a best-effort rendering.
pub fn render_plain_text(input: &str) -> String {
    if !looks_like_markup(input) {
        return normalize_whitespace(input);
    }
    let document = Html::parse_document(input);
    render_document(&document)
}

/// Renders an already parsed document as normalized plain text.
pub fn render_document(document: &Html) -> String {
    let mut buffer = String::new();
    append_element_text(&document.root_element(), &mut buffer);
    normalize_whitespace(&buffer)
}

/// Returns true if the input contains a tag of a known element, a comment or a doctype.
pub(crate) fn looks_like_markup(input: &str) -> bool {
    MARKUP_RE.is_match(input)
}

fn append_element_text(element: &ElementRef, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => push_collapsed(out, text),
            Node::Element(data) => {
                let name = data.name();
                if SKIPPED_ELEMENTS.contains(&name) {
                    continue;
                }
                if name == "br" {
                    out.push('\n');
                    continue;
                }
                let boundary = if PARAGRAPH_ELEMENTS.contains(&name) {
                    Boundary::Paragraph
                } else if LINE_ELEMENTS.contains(&name) {
                    Boundary::Line
                } else if name == "td" || name == "th" {
                    Boundary::Cell
                } else {
                    Boundary::Inline
                };
                boundary.apply(out);
                if let Some(child_el) = ElementRef::wrap(child) {
                    append_element_text(&child_el, out);
                }
                boundary.apply(out);
            }
            _ => {}
        }
    }
}

#[derive(Clone, Copy)]
enum Boundary {
    Paragraph,
    Line,
    Cell,
    Inline,
}

impl Boundary {
    /// Makes sure `out` ends with the break this boundary needs, without stacking breaks.
    fn apply(self, out: &mut String) {
        if out.is_empty() {
            return;
        }
        match self {
            Boundary::Paragraph => {
                if !out.ends_with("\n\n") {
                    out.push_str(if out.ends_with('\n') { "\n" } else { "\n\n" });
                }
            }
            Boundary::Line => {
                if !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            Boundary::Cell => {
                if !out.ends_with([' ', '\n']) {
                    out.push(' ');
                }
            }
            Boundary::Inline => {}
        }
    }
}

/// Appends text with every whitespace run (newlines included) collapsed to one space.
fn push_collapsed(out: &mut String, text: &str) {
    let mut in_whitespace = false;
    for c in text.chars() {
        if c.is_whitespace() {
            in_whitespace = true;
            continue;
        }
        if in_whitespace && !out.is_empty() && !out.ends_with([' ', '\n']) {
            out.push(' ');
        }
        in_whitespace = false;
        out.push(c);
    }
    if in_whitespace && !out.is_empty() && !out.ends_with([' ', '\n']) {
        out.push(' ');
    }
}

/// Applies the fixed whitespace normalization rule.
///
/// 1. `\r\n` and `\r` become `\n`.
/// 2. Within a line, whitespace runs collapse to a single space; lines are trimmed.
/// 3. Runs of blank lines collapse to one blank line.
/// 4. Leading and trailing blank lines are dropped.
pub fn normalize_whitespace(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut out = String::with_capacity(text.len());
    let mut pending_blank = false;

    for line in text.split('\n') {
        let collapsed = collapse_whitespace(line);
        if collapsed.is_empty() {
            if !out.is_empty() {
                pending_blank = true;
            }
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
            if pending_blank {
                out.push('\n');
            }
        }
        pending_blank = false;
        out.push_str(&collapsed);
    }

    out
}

/// Collapses every whitespace run to a single space and trims the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
