//! Small shared helpers.

mod selector;

pub use selector::parse_selector_unsafe;

/// Returns at most `max_chars` characters of `text`, on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_short_text() {
        assert_eq!(truncate_chars("Berlin", 10), "Berlin");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        // Must not split inside "ü"
        assert_eq!(truncate_chars("München", 2), "Mü");
    }

    #[test]
    fn test_truncate_chars_zero() {
        assert_eq!(truncate_chars("abc", 0), "");
    }
}
