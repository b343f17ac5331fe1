//! Street number features.

use regex::Regex;
use std::sync::LazyLock;

use super::FeatureGenerator;

/// Feature emitted when the token itself is a street number.
const STREET_NUMBER_PREFIX: &str = "sn";

/// Feature emitted when the following token is a street number.
const NEXT_STREET_NUMBER_PREFIX: &str = "nsn";

// Digits with an optional single-letter suffix: "19", "19a"
const STREET_NUMBER_PATTERN: &str = r"^[0-9]+[a-zA-Z]?$";

static STREET_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(STREET_NUMBER_PATTERN).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in STREET_NUMBER_RE: {}. This is a programming error.",
            STREET_NUMBER_PATTERN, e
        )
    })
});

/// Whether `token` looks like a house number.
pub fn is_street_number(token: &str) -> bool {
    STREET_NUMBER_RE.is_match(token)
}

/// Marks street numbers and the tokens directly before them.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreetNumberFeature;

impl FeatureGenerator for StreetNumberFeature {
    fn create_features(&self, tokens: &[String], index: usize, features: &mut Vec<String>) {
        let Some(token) = tokens.get(index).map(|t| t.trim()) else {
            return;
        };
        if is_street_number(token) {
            features.push(format!("{STREET_NUMBER_PREFIX}={}", token.to_lowercase()));
        }
        if tokens
            .get(index + 1)
            .is_some_and(|next| is_street_number(next.trim()))
        {
            features.push(format!(
                "{NEXT_STREET_NUMBER_PREFIX}={}",
                token.to_lowercase()
            ));
        }
    }
}
