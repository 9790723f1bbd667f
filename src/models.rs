use serde::{Deserialize, Serialize};

/// One dataset observation (one row = one entity/year value).
///
/// Rows with a blank or unparseable value never reach the engine; the loader
/// filters them, so `value` is always present and finite here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Row {
    /// Entity name exactly as given in the source data.
    pub entity: String,
    /// ISO-style code column, when the dataset has one. Feeds country
    /// classification only; aggregates carry non-ISO codes or none.
    pub code: Option<String>,
    pub year: i32,
    pub value: f64,
}

/// Whether an entity name denotes a country or a region/world-level grouping.
///
/// The tag belongs to the name, not to individual rows, and is shared across
/// stores that reference the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityClass {
    Country,
    Aggregate,
}

/// Result of a single entity/year lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LookupResult {
    pub entity: String,
    pub year: i32,
    pub value: f64,
    /// True when the caller omitted the year and the entity's latest
    /// recorded year was substituted.
    pub year_was_defaulted: bool,
}

/// One entry of a ranked list for a specific year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankEntry {
    pub entity: String,
    pub value: f64,
    /// 1-based, contiguous; exact-value ties are ordered by entity name
    /// ascending, never shared or skipped.
    pub rank: usize,
    pub year: i32,
}
