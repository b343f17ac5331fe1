//! Email markup parsing and signal extraction.
//!
//! This module turns the HTML body of a job-posting email into:
//! - Normalized plain text
//! - Hyperlinks (filtered by `LinkFilter`)
//! - Bare URLs mentioned in the text
//! - A single contact email address
//!
//! Optionally the body is first restricted to its primary frame. All HTML
//! parsing goes through the `scraper` crate.

mod document;
mod email;
mod frame;
mod links;
mod text;
mod urls;

// Re-export public API
pub use document::{MailDocument, ParseResult};
pub use email::{extract_email, extract_mailto};
pub use frame::{first_frame_source, FrameFetcher, FrameSelector, FrameSource, HttpFrameFetcher};
pub use links::{extract_links, Link, LinkFilter};
pub use text::{normalize_whitespace, render_document, render_plain_text};
pub use urls::extract_urls;
