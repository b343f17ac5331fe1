//! Contact email recognition.
//!
//! A job posting is assumed to carry at most one relevant contact address, so
//! only the first match is returned.

use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

// local-part@label(.label)*.tld, where the final label is alphabetic.
// Local part and labels take any word character, so umlauts stay in the match.
// The address may not start right after another address character.
const EMAIL_PATTERN: &str =
    r"(?:^|[^\w.%+\-@])([\w.%+\-]+@(?:[\w\-]+\.)+[A-Za-z]{2,})\b";
const MAILTO_SELECTOR_STR: &str = "a[href^='mailto:'], a[href^='MAILTO:']";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(EMAIL_PATTERN).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in EMAIL_RE: {}. This is a programming error.",
            EMAIL_PATTERN, e
        )
    })
});

static MAILTO_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(MAILTO_SELECTOR_STR, "MAILTO_SELECTOR"));

/// Returns the first email address in `text`, if any.
///
/// `job@test` (no top-level label) and `job@test.` (dangling dot) are not
/// addresses; `job@test.de` and `job@test.de.de` are.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Returns the address of the first `mailto:` link whose target is a valid address.
///
/// Query parameters (`?subject=...`) are dropped.
pub fn extract_mailto(document: &Html) -> Option<String> {
    document
        .select(&MAILTO_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .find_map(|href| {
            let address = href
                .get("mailto:".len()..)?
                .split('?')
                .next()
                .unwrap_or_default()
                .trim();
            extract_email(address).filter(|found| found == address)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_without_tld_is_rejected() {
        let text = "hiermit moechte ich mien E-Mail job@test testen, das nicht gefudnden werden muss!";
        assert_eq!(extract_email(text), None);
    }

    #[test]
    fn test_email_with_dangling_dot_is_rejected() {
        let text = "hiermit moechte ich mien E-Mail job@test. testen, das nicht gefudnden werden muss!";
        assert_eq!(extract_email(text), None);
    }

    #[test]
    fn test_email_with_tld_is_found() {
        let text = "hiermit moechte ich mien E-Mail job@test.de testen, das nicht gefudnden werden muss!";
        assert_eq!(extract_email(text), Some("job@test.de".to_string()));
    }

    #[test]
    fn test_email_with_nested_domain_is_found() {
        let text = "hiermit moechte ich mien E-Mail job@test.de.de testen, das nicht gefudnden werden muss!";
        assert_eq!(extract_email(text), Some("job@test.de.de".to_string()));
    }

    #[test]
    fn test_first_email_wins() {
        let text = "Bewerbungen an jobs@t-systems-mms.com, Fragen an info@t-systems-mms.com.";
        assert_eq!(
            extract_email(text),
            Some("jobs@t-systems-mms.com".to_string())
        );
    }

    #[test]
    fn test_sentence_period_after_email() {
        assert_eq!(
            extract_email("Schreiben Sie an bewerbung@firma.de."),
            Some("bewerbung@firma.de".to_string())
        );
    }

    #[test]
    fn test_email_with_umlauts_is_found_whole() {
        assert_eq!(
            extract_email("Kontakt: jürgen.müller@firma.de"),
            Some("jürgen.müller@firma.de".to_string())
        );
        assert_eq!(
            extract_email("Fragen an Ärger-Team@bäckerei-müller.de bitte"),
            Some("Ärger-Team@bäckerei-müller.de".to_string())
        );
    }

    #[test]
    fn test_email_at_start_of_text() {
        assert_eq!(
            extract_email("björn@firma.de ist erreichbar"),
            Some("björn@firma.de".to_string())
        );
    }

    #[test]
    fn test_email_never_starts_inside_another_address() {
        assert_eq!(extract_email("Adresse max@muster@firma.de prüfen"), None);
    }

    #[test]
    fn test_extract_mailto_with_umlauts() {
        let html = r#"<a href="mailto:jürgen.müller@firma.de">Mail</a>"#;
        let document = Html::parse_document(html);
        assert_eq!(
            extract_mailto(&document),
            Some("jürgen.müller@firma.de".to_string())
        );
    }

    #[test]
    fn test_extract_mailto() {
        let html = r#"<a href="mailto:">leer</a><a href="mailto:karriere@firma.de?subject=Bewerbung">Mail</a>"#;
        let document = Html::parse_document(html);
        assert_eq!(
            extract_mailto(&document),
            Some("karriere@firma.de".to_string())
        );
    }

    #[test]
    fn test_extract_mailto_none() {
        let document = Html::parse_document(r#"<a href="https://firma.de">Web</a>"#);
        assert_eq!(extract_mailto(&document), None);
    }
}
