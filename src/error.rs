use thiserror::Error;

/// Expected, recoverable engine failures.
///
/// These are returned as values, never raised as panics; the CLI layer turns
/// them into one of two fixed user-facing strings via [`EngineError::user_message`]
/// and decides the exit code.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// The query matched no known entity, even fuzzily.
    #[error("unknown entity: {query}")]
    EntityNotFound { query: String },

    /// Two or more entities tied at the best fuzzy score; surfaced instead of
    /// silently picking one.
    #[error("ambiguous entity {query:?}: candidates {candidates:?}")]
    EntityAmbiguous {
        query: String,
        candidates: Vec<String>,
    },

    /// The entity is known but has no value for the requested year, or no
    /// entity at all has data for the year (`entity: None`).
    #[error("no data for {} in {}", entity.as_deref().unwrap_or("any entity"), year.map_or_else(|| "any year".into(), |y| y.to_string()))]
    YearNotFound {
        entity: Option<String>,
        year: Option<i32>,
    },

    /// A ratio metric could not be computed for this entity-year because the
    /// denominator is zero or missing.
    #[error("insufficient data for {entity} in {year}")]
    InsufficientData { entity: String, year: i32 },
}

impl EngineError {
    /// The fixed string shown to users at the presentation boundary.
    pub fn user_message(&self) -> &'static str {
        match self {
            EngineError::InsufficientData { .. } => "insufficient data",
            _ => "invalid year or country",
        }
    }
}
