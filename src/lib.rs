//! jobmail_extract library: contact signals from job-posting emails
//!
//! This library extracts structured contact information from the HTML body of
//! job-posting emails: plain text, hyperlinks, bare URLs and a contact email
//! address. Separately, it resolves address spans proposed by an external
//! recognizer into street, street number, zip, city and country.
//!
//! # Example
//!
//! ```
//! use jobmail_extract::{LinkFilter, MailDocument};
//!
//! let filter = LinkFilter::default().link_matchers(["www.stepstone.de/ja.cfm"]);
//! let document = MailDocument::with_filter(
//!     r#"<p><a href="https://www.stepstone.de/ja.cfm?id=1">Entwickler</a>
//!        Bewerbung an jobs@firma.de, mehr unter www.firma.de.</p>"#,
//!     filter,
//! );
//!
//! let result = document.parse();
//! assert_eq!(result.links.len(), 1);
//! assert_eq!(result.urls, vec!["www.firma.de".to_string()]);
//! assert_eq!(result.email.as_deref(), Some("jobs@firma.de"));
//! ```
//!
//! Address spans:
//!
//! ```
//! use std::sync::Arc;
//! use jobmail_extract::address::{
//!     AddressCandidate, AddressSpanResolver, CountrySet, PostalRecord, PostalTable, TokenSpan,
//! };
//!
//! let postal: PostalTable = [PostalRecord::new("12207", "Berlin")].into_iter().collect();
//! let countries: CountrySet = ["Deutschland"].into_iter().collect();
//! let resolver = AddressSpanResolver::new(Arc::new(postal), Arc::new(countries));
//!
//! let tokens: Vec<String> = ["Lindenstr.", "19", ",", "12207", "Berlin"]
//!     .iter()
//!     .map(|t| t.to_string())
//!     .collect();
//! let candidate = AddressCandidate::new(&tokens, TokenSpan::new(0, 5)?, 0.9)?;
//! let address = resolver.resolve(&candidate);
//! assert_eq!(address.zip(), "12207");
//! assert_eq!(address.city(), "Berlin");
//! # Ok::<(), jobmail_extract::ExtractError>(())
//! ```
//!
//! # Requirements
//!
//! Frame selection fetches over HTTP and requires a Tokio runtime. Everything
//! else is synchronous.

#![warn(missing_docs)]

pub mod address;
pub mod config;
mod error_handling;
pub mod features;
pub mod initialization;
pub mod parse;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ExtractError, FrameError, InitializationError};
pub use parse::{
    FrameFetcher, FrameSelector, HttpFrameFetcher, Link, LinkFilter, MailDocument, ParseResult,
};
