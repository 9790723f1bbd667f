//! In-memory store of one dataset's observations, indexed by entity and year.
//!
//! Built once per invocation from loader output, read-only thereafter. All
//! queries are pure reads, so a store can be shared freely across read-only
//! consumers.

use std::collections::BTreeMap;

use crate::models::Row;

/// Maps each entity name (exactly as given in the source data) to its
/// observations, sorted ascending by year with unique years.
#[derive(Debug, Clone, Default)]
pub struct Store {
    by_entity: BTreeMap<String, Vec<(i32, f64)>>,
}

impl Store {
    /// Group rows by entity, sort each group by year ascending and drop
    /// duplicate years keeping the first occurrence encountered (stable).
    pub fn build(rows: impl IntoIterator<Item = Row>) -> Store {
        let mut by_entity: BTreeMap<String, Vec<(i32, f64)>> = BTreeMap::new();
        for row in rows {
            by_entity
                .entry(row.entity)
                .or_default()
                .push((row.year, row.value));
        }
        for series in by_entity.values_mut() {
            // Stable sort keeps input order among equal years, so dedup
            // retains the first occurrence.
            series.sort_by_key(|&(year, _)| year);
            series.dedup_by_key(|&mut (year, _)| year);
        }
        Store { by_entity }
    }

    /// Derive a ratio store: numerator value divided by denominator value for
    /// every entity-year present in both stores. Pairs whose denominator is
    /// zero or missing are excluded here, so they can never appear in a
    /// ranking; point lookups report them via `lookup_ratio` instead.
    pub fn ratio(numerator: &Store, denominator: &Store) -> Store {
        let mut by_entity: BTreeMap<String, Vec<(i32, f64)>> = BTreeMap::new();
        for (entity, series) in &numerator.by_entity {
            let derived: Vec<(i32, f64)> = series
                .iter()
                .filter_map(|&(year, value)| {
                    match denominator.value_at(entity, year) {
                        Some(d) if d != 0.0 => Some((year, value / d)),
                        _ => None,
                    }
                })
                .collect();
            if !derived.is_empty() {
                by_entity.insert(entity.clone(), derived);
            }
        }
        Store { by_entity }
    }

    /// Years with data for `entity`, ascending; empty if the entity is unknown.
    pub fn years_for(&self, entity: &str) -> Vec<i32> {
        self.by_entity
            .get(entity)
            .map(|series| series.iter().map(|&(year, _)| year).collect())
            .unwrap_or_default()
    }

    /// The stored value for an exact entity/year pair.
    pub fn value_at(&self, entity: &str, year: i32) -> Option<f64> {
        let series = self.by_entity.get(entity)?;
        series
            .binary_search_by_key(&year, |&(y, _)| y)
            .ok()
            .map(|idx| series[idx].1)
    }

    /// The most recent year with data for `entity`.
    pub fn latest_year(&self, entity: &str) -> Option<i32> {
        self.by_entity
            .get(entity)
            .and_then(|series| series.last())
            .map(|&(year, _)| year)
    }

    /// True if the store has at least one observation for `entity`.
    pub fn contains_entity(&self, entity: &str) -> bool {
        self.by_entity.contains_key(entity)
    }

    /// All entity names known to the store, in name order.
    pub fn all_entities(&self) -> impl Iterator<Item = &str> {
        self.by_entity.keys().map(String::as_str)
    }

    /// Entities with a recorded value for `year`, paired with that value.
    pub fn entities_with_year(&self, year: i32) -> impl Iterator<Item = (&str, f64)> {
        self.by_entity.iter().filter_map(move |(entity, series)| {
            series
                .binary_search_by_key(&year, |&(y, _)| y)
                .ok()
                .map(|idx| (entity.as_str(), series[idx].1))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(entity: &str, year: i32, value: f64) -> Row {
        Row {
            entity: entity.into(),
            code: None,
            year,
            value,
        }
    }

    #[test]
    fn build_sorts_years_and_keeps_first_duplicate() {
        let store = Store::build(vec![
            row("Brazil", 2020, -1.1),
            row("Brazil", 2018, -1.2),
            row("Brazil", 2020, -9.9),
            row("Brazil", 2019, -1.5),
        ]);
        assert_eq!(store.years_for("Brazil"), vec![2018, 2019, 2020]);
        assert_eq!(store.value_at("Brazil", 2020), Some(-1.1));
    }

    #[test]
    fn value_round_trips_through_construction() {
        let rows = vec![row("Bolivia", 2001, 0.25), row("Bolivia", 2002, -3.75)];
        let store = Store::build(rows.clone());
        for r in &rows {
            assert_eq!(store.value_at(&r.entity, r.year), Some(r.value));
        }
    }

    #[test]
    fn latest_year_is_max_of_years_for() {
        let store = Store::build(vec![row("Chad", 1999, 1.0), row("Chad", 2014, 2.0)]);
        assert_eq!(store.latest_year("Chad"), store.years_for("Chad").last().copied());
        assert_eq!(store.latest_year("Nowhere"), None);
        assert!(store.years_for("Nowhere").is_empty());
    }

    #[test]
    fn ratio_excludes_zero_and_missing_denominators() {
        let num = Store::build(vec![
            row("Brazil", 2020, 10.0),
            row("Brazil", 2021, 20.0),
            row("Chad", 2020, 5.0),
        ]);
        let den = Store::build(vec![
            row("Brazil", 2020, 4.0),
            row("Brazil", 2021, 0.0),
            // Chad 2020 missing entirely
        ]);
        let ratio = Store::ratio(&num, &den);
        assert_eq!(ratio.value_at("Brazil", 2020), Some(2.5));
        assert_eq!(ratio.value_at("Brazil", 2021), None);
        assert!(!ratio.contains_entity("Chad"));
    }
}
