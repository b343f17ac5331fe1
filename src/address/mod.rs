//! Address resolution from recognizer spans.
//!
//! An external recognizer proposes a token span that probably holds a postal
//! address. This module cuts that span into street, street number, zip, city
//! and country, using a zip table and a set of country names.

mod builder;
mod lookup;
mod record;
mod resolver;
mod span;

pub use builder::{AddressParts, AddressSpanBuilder};
pub use lookup::{CountryLookup, CountrySet, PostalLookup, PostalRecord, PostalTable};
pub use record::ResolvedAddress;
pub use resolver::AddressSpanResolver;
pub use span::{AddressCandidate, TokenSpan};
