use std::sync::Arc;

use log::debug;

use crate::address::builder::AddressSpanBuilder;
use crate::address::lookup::{CountryLookup, PostalLookup};
use crate::address::record::ResolvedAddress;
use crate::address::span::AddressCandidate;
use crate::config::{Config, DEFAULT_COUNTRY};

/// Resolves recognizer candidates against shared reference tables.
///
/// The tables are read-only, so one resolver can serve many threads.
#[derive(Clone)]
pub struct AddressSpanResolver {
    postal: Arc<dyn PostalLookup>,
    countries: Arc<dyn CountryLookup>,
    default_country: String,
}

impl AddressSpanResolver {
    /// Creates a resolver reporting `Deutschland` for postal table hits.
    pub fn new(postal: Arc<dyn PostalLookup>, countries: Arc<dyn CountryLookup>) -> Self {
        Self {
            postal,
            countries,
            default_country: DEFAULT_COUNTRY.to_string(),
        }
    }

    /// Creates a resolver using the configured default country.
    pub fn from_config(
        config: &Config,
        postal: Arc<dyn PostalLookup>,
        countries: Arc<dyn CountryLookup>,
    ) -> Self {
        Self::new(postal, countries).with_default_country(config.default_country.clone())
    }

    /// Overrides the country reported for postal table hits.
    pub fn with_default_country(mut self, country: impl Into<String>) -> Self {
        self.default_country = country.into();
        self
    }

    /// Carves a structured address out of `candidate`.
    ///
    /// Never fails: fields that cannot be determined come back empty.
    pub fn resolve(&self, candidate: &AddressCandidate<'_>) -> ResolvedAddress {
        let address = AddressSpanBuilder::new(candidate)
            .postal_lookup(self.postal.as_ref())
            .countries(self.countries.as_ref())
            .default_country(&self.default_country)
            .build();
        debug!("Resolved address candidate: {:?}", address);
        address
    }
}

impl std::fmt::Debug for AddressSpanResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressSpanResolver")
            .field("default_country", &self.default_country)
            .finish_non_exhaustive()
    }
}
