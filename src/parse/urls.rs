//! Bare URL recognition in free text.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::config::MAX_URL_LENGTH;
use crate::parse::LinkFilter;

// Scheme or "www." prefix, dot-separated host labels, optional port, optional path.
// Trailing sentence punctuation is trimmed after matching.
const URL_PATTERN: &str =
    r"\b(?:https?://|www\.)[\w\-]+(?:\.[\w\-]+)*(?::\d{1,5})?(?:/[\w/\-.?=&%#~+:]*)?";

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(URL_PATTERN).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in URL_RE: {}. This is a programming error.",
            URL_PATTERN, e
        )
    })
});

/// Characters that end a sentence rather than a URL.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Extracts `http://`, `https://` and `www.` URLs from text.
///
/// URLs come back in left-to-right order, each distinct URL once. A period (or
/// other sentence punctuation) directly after a URL is not part of it, so
/// `"www.test.de."` yields `"www.test.de"`. URLs rejected by the filter's
/// target rules or longer than `MAX_URL_LENGTH` are dropped.
pub fn extract_urls(text: &str, filter: &LinkFilter) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for m in URL_RE.find_iter(text) {
        let url = m.as_str().trim_end_matches(TRAILING_PUNCTUATION);
        if url.len() > MAX_URL_LENGTH {
            log::debug!(
                "Skipping URL exceeding maximum length ({} > {})",
                url.len(),
                MAX_URL_LENGTH
            );
            continue;
        }
        if !filter.accepts_target(url) {
            continue;
        }
        if seen.insert(url) {
            urls.push(url.to_string());
        }
    }

    urls
}
