//! Point lookups of indicator values, with latest-year defaulting.
//!
//! Year defaulting lives here, in one place, instead of being re-derived by
//! every CLI branch that can omit a year.

use crate::error::EngineError;
use crate::models::LookupResult;
use crate::store::Store;

/// Look up the value for `entity` at `year`, or at the entity's latest
/// recorded year when `year` is omitted.
///
/// Distinguishes an unknown entity (`EntityNotFound`) from a known entity
/// missing the requested year (`YearNotFound`); both surface the same
/// user-facing string, but the taxonomy matters for diagnostics.
pub fn lookup(
    store: &Store,
    entity: &str,
    year: Option<i32>,
) -> Result<LookupResult, EngineError> {
    if !store.contains_entity(entity) {
        return Err(EngineError::EntityNotFound {
            query: entity.to_string(),
        });
    }

    let (year_to_use, year_was_defaulted) = match year {
        Some(y) => (y, false),
        None => {
            // contains_entity implies at least one recorded year
            let latest = store
                .latest_year(entity)
                .ok_or_else(|| EngineError::YearNotFound {
                    entity: Some(entity.to_string()),
                    year: None,
                })?;
            log::info!("no year given for {entity:?}, defaulting to {latest}");
            (latest, true)
        }
    };

    let value = store
        .value_at(entity, year_to_use)
        .ok_or_else(|| EngineError::YearNotFound {
            entity: Some(entity.to_string()),
            year: Some(year_to_use),
        })?;

    Ok(LookupResult {
        entity: entity.to_string(),
        year: year_to_use,
        value,
        year_was_defaulted,
    })
}

/// Look up a ratio metric (numerator value divided by denominator value) for
/// one entity-year.
///
/// A present numerator with a zero or missing denominator is a computation
/// failure for that specific entity-year and reports `InsufficientData`,
/// unlike an absent numerator which is a plain `YearNotFound`.
pub fn lookup_ratio(
    numerator: &Store,
    denominator: &Store,
    entity: &str,
    year: Option<i32>,
) -> Result<LookupResult, EngineError> {
    let mut result = lookup(numerator, entity, year)?;
    match denominator.value_at(entity, result.year) {
        Some(d) if d != 0.0 => {
            result.value /= d;
            Ok(result)
        }
        _ => Err(EngineError::InsufficientData {
            entity: entity.to_string(),
            year: result.year,
        }),
    }
}
