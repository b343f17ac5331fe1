//! Reference data lookups.
//!
//! Postal codes and country names come from reference files loaded once by the
//! caller. The resolver only sees them through these read-only traits, so
//! tests can pass small in-memory tables.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// A zip code and the city it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalRecord {
    /// Postal code
    pub zip: String,
    /// City name
    pub city: String,
}

impl PostalRecord {
    /// Creates a record.
    pub fn new(zip: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            zip: zip.into(),
            city: city.into(),
        }
    }
}

/// Zip code to city lookup.
pub trait PostalLookup: Send + Sync {
    /// Returns the record for `zip`, if known.
    fn lookup(&self, zip: &str) -> Option<&PostalRecord>;
}

/// Known country names.
pub trait CountryLookup: Send + Sync {
    /// Returns the known country name that ends `text`, if any.
    fn match_suffix<'a>(&'a self, text: &str) -> Option<&'a str>;
}

/// In-memory postal table keyed by zip.
///
/// When several records share a zip, the first one wins.
#[derive(Debug, Clone, Default)]
pub struct PostalTable {
    records: HashMap<String, PostalRecord>,
}

impl PostalTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record unless its zip is already present. Returns whether it was added.
    pub fn insert(&mut self, record: PostalRecord) -> bool {
        if self.records.contains_key(&record.zip) {
            return false;
        }
        self.records.insert(record.zip.clone(), record);
        true
    }

    /// Number of distinct zips.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<PostalRecord> for PostalTable {
    fn from_iter<I: IntoIterator<Item = PostalRecord>>(iter: I) -> Self {
        let mut table = Self::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}

impl PostalLookup for PostalTable {
    fn lookup(&self, zip: &str) -> Option<&PostalRecord> {
        self.records.get(zip)
    }
}

/// In-memory set of country names.
///
/// Suffix matching is case-sensitive. When several names end the text, the
/// longest one wins.
#[derive(Debug, Clone, Default)]
pub struct CountrySet {
    names: BTreeSet<String>,
}

impl CountrySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a country name. Blank names are ignored.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.names.insert(name.to_string())
    }

    /// Number of names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CountrySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl CountryLookup for CountrySet {
    fn match_suffix<'a>(&'a self, text: &str) -> Option<&'a str> {
        self.names
            .iter()
            .filter(|name| text.ends_with(name.as_str()))
            .max_by_key(|name| name.len())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postal_first_record_wins() {
        let table: PostalTable = [
            PostalRecord::new("12207", "Berlin"),
            PostalRecord::new("12207", "Potsdam"),
            PostalRecord::new("80331", "München"),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("12207").map(|r| r.city.as_str()), Some("Berlin"));
        assert_eq!(table.lookup("99999"), None);
    }

    #[test]
    fn test_country_suffix() {
        let countries: CountrySet = ["Deutschland", "Österreich"].into_iter().collect();
        assert_eq!(countries.match_suffix("München Deutschland"), Some("Deutschland"));
        assert_eq!(countries.match_suffix("Deutschland München"), None);
        assert_eq!(countries.match_suffix(""), None);
    }

    #[test]
    fn test_longest_country_suffix_wins() {
        let countries: CountrySet = ["Guinea", "Papua-Neuguinea", "Neuguinea"]
            .into_iter()
            .collect();
        assert_eq!(
            countries.match_suffix("Port Moresby Papua-Neuguinea"),
            Some("Papua-Neuguinea")
        );
        assert_eq!(countries.match_suffix("Conakry Guinea"), Some("Guinea"));
    }

    #[test]
    fn test_blank_country_ignored() {
        let countries: CountrySet = ["", "  ", "Schweiz"].into_iter().collect();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries.match_suffix("Zürich"), None);
    }

    #[test]
    fn test_postal_record_from_json() {
        let record: PostalRecord =
            serde_json::from_str(r#"{"zip": "10115", "city": "Berlin"}"#).unwrap();
        assert_eq!(record, PostalRecord::new("10115", "Berlin"));
    }
}
