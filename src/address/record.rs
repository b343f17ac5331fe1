use serde::Serialize;

/// A structured address carved out of a candidate span.
///
/// Fields that could not be determined are empty strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedAddress {
    probability: f64,
    street: String,
    street_number: String,
    zip: String,
    city: String,
    country: String,
}

impl ResolvedAddress {
    pub(crate) fn new(
        probability: f64,
        street: String,
        street_number: String,
        zip: String,
        city: String,
        country: String,
    ) -> Self {
        Self {
            probability,
            street,
            street_number,
            zip,
            city,
            country,
        }
    }

    /// The candidate's confidence.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Street name, possibly several words.
    pub fn street(&self) -> &str {
        &self.street
    }

    /// House number such as `19` or `19a`.
    pub fn street_number(&self) -> &str {
        &self.street_number
    }

    /// Postal code with stray punctuation removed.
    pub fn zip(&self) -> &str {
        &self.zip
    }

    /// City name.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Country name.
    pub fn country(&self) -> &str {
        &self.country
    }
}
