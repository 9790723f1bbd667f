//! Country/aggregate classification of entity names.
//!
//! Countries are recognized by their three-letter uppercase ISO-style code in
//! the forest dataset; aggregates ("World", continents, income groups) carry
//! non-ISO codes or none. The resulting set is keyed by name, so datasets
//! without a code column (the CO2 file) reuse the same classification.

use ahash::AHashSet;

use crate::models::{EntityClass, Row};

/// True for codes shaped like ISO 3166-1 alpha-3 ("BRA", "TCD").
pub fn is_country_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}

/// The set of entity names classified as countries.
#[derive(Debug, Clone, Default)]
pub struct CountrySet {
    names: AHashSet<String>,
}

impl CountrySet {
    /// Collect country names from rows carrying a country-shaped code.
    pub fn from_rows(rows: &[Row]) -> CountrySet {
        let names = rows
            .iter()
            .filter(|row| row.code.as_deref().is_some_and(is_country_code))
            .map(|row| row.entity.clone())
            .collect();
        CountrySet { names }
    }

    pub fn is_country(&self, entity: &str) -> bool {
        self.names.contains(entity)
    }

    pub fn classify(&self, entity: &str) -> EntityClass {
        if self.is_country(entity) {
            EntityClass::Country
        } else {
            EntityClass::Aggregate
        }
    }

    /// Keep only entities eligible under the aggregate-inclusion flag.
    pub fn filter<'a>(
        &self,
        entities: impl Iterator<Item = &'a str>,
        include_aggregates: bool,
    ) -> Vec<&'a str> {
        entities
            .filter(|entity| include_aggregates || self.is_country(entity))
            .collect()
    }
}
