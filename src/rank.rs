//! Ranking of entities by indicator value for one year.

use crate::classify::CountrySet;
use crate::error::EngineError;
use crate::models::RankEntry;
use crate::store::Store;

/// Which end of the value scale ranks first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Most negative value first (largest decrease).
    Loss,
    /// Largest value first (largest increase).
    Gain,
}

/// Rank every eligible entity with a recorded value for `year`.
///
/// Eligibility: aggregates are dropped unless `include_aggregates` is set;
/// entity-years excluded at store construction (missing values, invalid
/// ratios) never appear. Exact-value ties get distinct, contiguous ranks
/// ordered by entity name ascending, so the output is deterministic.
pub fn rank(
    store: &Store,
    countries: &CountrySet,
    year: i32,
    direction: Direction,
    include_aggregates: bool,
) -> Result<Vec<RankEntry>, EngineError> {
    let mut scored: Vec<(&str, f64)> = store
        .entities_with_year(year)
        .filter(|(entity, _)| include_aggregates || countries.is_country(entity))
        .collect();
    if scored.is_empty() {
        return Err(EngineError::YearNotFound {
            entity: None,
            year: Some(year),
        });
    }

    // Values are finite by loader invariant; total_cmp keeps the order total.
    scored.sort_by(|a, b| {
        let by_value = match direction {
            Direction::Loss => a.1.total_cmp(&b.1),
            Direction::Gain => b.1.total_cmp(&a.1),
        };
        by_value.then_with(|| a.0.cmp(b.0))
    });

    Ok(scored
        .into_iter()
        .enumerate()
        .map(|(idx, (entity, value))| RankEntry {
            entity: entity.to_string(),
            value,
            rank: idx + 1,
            year,
        })
        .collect())
}

/// One entity's position within a ranking, plus the total number of ranked
/// entities.
///
/// An omitted year defaults to the entity's latest recorded year. The target
/// must itself be eligible; asking for an aggregate with aggregates excluded
/// is `EntityNotFound`.
pub fn rank_for_entity(
    store: &Store,
    countries: &CountrySet,
    entity: &str,
    year: Option<i32>,
    direction: Direction,
    include_aggregates: bool,
) -> Result<(RankEntry, usize), EngineError> {
    let year_to_use = match year {
        Some(y) => y,
        None => store
            .latest_year(entity)
            .ok_or_else(|| EngineError::EntityNotFound {
                query: entity.to_string(),
            })?,
    };

    let entries = rank(store, countries, year_to_use, direction, include_aggregates)?;
    let total = entries.len();
    let entry = entries
        .into_iter()
        .find(|e| e.entity == entity)
        .ok_or_else(|| EngineError::YearNotFound {
            entity: Some(entity.to_string()),
            year: Some(year_to_use),
        })?;
    Ok((entry, total))
}

/// The latest year for which any eligible entity has data; used when a
/// ranking is requested with no year at all.
pub fn default_year(
    store: &Store,
    countries: &CountrySet,
    include_aggregates: bool,
) -> Result<i32, EngineError> {
    store
        .all_entities()
        .filter(|entity| include_aggregates || countries.is_country(entity))
        .filter_map(|entity| store.latest_year(entity))
        .max()
        .ok_or(EngineError::YearNotFound {
            entity: None,
            year: None,
        })
}
