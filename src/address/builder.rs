//! Position-based address assembly.
//!
//! Street, number and zip are cut from the candidate span left to right with
//! single-token lookahead. The zip selects a city from the postal table; when
//! the zip is unknown the rest of the span is read as "city [country]".

use log::debug;

use crate::address::lookup::{CountryLookup, PostalLookup};
use crate::address::record::ResolvedAddress;
use crate::address::span::{AddressCandidate, TokenSpan};
use crate::config::{DEFAULT_COUNTRY, ZIP_PUNCTUATION};
use crate::features::is_street_number;

/// Address fields collected while cutting a span.
///
/// `None` means the field was not determined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts {
    /// Street name
    pub street: Option<String>,
    /// House number
    pub street_number: Option<String>,
    /// Cleaned postal code
    pub zip: Option<String>,
    /// City
    pub city: Option<String>,
    /// Country
    pub country: Option<String>,
}

impl AddressParts {
    /// Turns the collected parts into the output record, empty where undetermined.
    pub fn finish(self, probability: f64) -> ResolvedAddress {
        ResolvedAddress::new(
            probability,
            self.street.unwrap_or_default(),
            self.street_number.unwrap_or_default(),
            self.zip.unwrap_or_default(),
            self.city.unwrap_or_default(),
            self.country.unwrap_or_default(),
        )
    }
}

/// Builds one `ResolvedAddress` from one candidate.
pub struct AddressSpanBuilder<'a> {
    candidate: &'a AddressCandidate<'a>,
    postal: Option<&'a dyn PostalLookup>,
    countries: Option<&'a dyn CountryLookup>,
    default_country: &'a str,
}

impl<'a> AddressSpanBuilder<'a> {
    /// Starts a builder without reference tables.
    pub fn new(candidate: &'a AddressCandidate<'a>) -> Self {
        Self {
            candidate,
            postal: None,
            countries: None,
            default_country: DEFAULT_COUNTRY,
        }
    }

    /// Sets the zip to city table.
    pub fn postal_lookup(mut self, postal: &'a dyn PostalLookup) -> Self {
        self.postal = Some(postal);
        self
    }

    /// Sets the known country names.
    pub fn countries(mut self, countries: &'a dyn CountryLookup) -> Self {
        self.countries = Some(countries);
        self
    }

    /// Sets the country reported for postal table hits.
    pub fn default_country(mut self, country: &'a str) -> Self {
        self.default_country = country;
        self
    }

    /// Cuts the span into address parts.
    pub fn parts(&self) -> AddressParts {
        let tokens = self.candidate.tokens();
        let span = self.candidate.span();
        let mut parts = AddressParts::default();

        let cut = (span.start()..span.end())
            .find(|&i| is_street_number(&tokens[i]))
            .unwrap_or(span.end());
        parts.street = non_empty(TokenSpan::between(span.start(), cut).join(tokens));

        let number_span = TokenSpan::single(cut);
        parts.street_number = non_empty(number_span.join(tokens));

        let mut zip_span = TokenSpan::single(number_span.end());
        let mut zip = clean_zip(&zip_span.join(tokens));
        if zip.trim().is_empty() {
            // A lone separator token, as in "Lindenstr. 19 , 12207 Berlin"
            zip_span = zip_span.shifted();
            zip = clean_zip(&zip_span.join(tokens));
        }
        parts.zip = non_empty(zip);

        let known = parts
            .zip
            .as_deref()
            .and_then(|zip| self.postal.and_then(|postal| postal.lookup(zip)));

        match known {
            Some(record) => {
                parts.city = non_empty(record.city.clone());
                parts.country = non_empty(self.default_country.to_string());
            }
            None => {
                let rest = TokenSpan::between(zip_span.end(), span.end()).join(tokens);
                let country = self
                    .countries
                    .and_then(|countries| countries.match_suffix(&rest));
                match country {
                    Some(country) => {
                        let city = rest[..rest.len() - country.len()].trim();
                        parts.city = non_empty(city.to_string());
                        parts.country = Some(country.to_string());
                    }
                    None => parts.city = non_empty(rest),
                }
            }
        }

        debug!(
            "Cut address span [{}, {}): street end {}, zip window [{}, {})",
            span.start(),
            span.end(),
            cut,
            zip_span.start(),
            zip_span.end()
        );
        parts
    }

    /// Cuts the span and finalizes the record.
    pub fn build(self) -> ResolvedAddress {
        self.parts().finish(self.candidate.probability())
    }
}

fn clean_zip(raw: &str) -> String {
    raw.chars().filter(|c| !ZIP_PUNCTUATION.contains(c)).collect()
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
