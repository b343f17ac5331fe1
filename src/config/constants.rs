//! Configuration constants.
//!
//! This module defines the constants used throughout the crate, including
//! reference-data defaults, fetch timeouts and extraction limits.

/// Country assigned to an address whose zip code is found in the postal table.
///
/// The postal reference table covers a single country, so a hit implies it.
pub const DEFAULT_COUNTRY: &str = "Deutschland";

// Frame fetching
/// Total timeout for fetching a frame's referenced document, in seconds
pub const FRAME_FETCH_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout for frame fetches, in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for frame fetches.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Address resolution
/// Characters stripped from a zip token before lookup.
///
/// A token made only of these characters is a stray separator (e.g. the lone
/// comma in "Lindenstr. 19 , 12207 Berlin").
pub const ZIP_PUNCTUATION: &[char] = &['+', '.', '^', ':', ','];

// Text extraction limits
/// Maximum URL length in characters; longer matches are discarded
pub const MAX_URL_LENGTH: usize = 2048;
/// Maximum number of characters kept for a link's enclosing context
pub const MAX_LINK_CONTEXT_CHARS: usize = 500;
/// Maximum HTML preview length in characters used in debug logs
pub const MAX_HTML_PREVIEW_CHARS: usize = 200;
