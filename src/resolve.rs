//! Resolution of free-text entity names against a dataset's known names.
//!
//! Users misspell country names; a silent wrong match is worse than reporting
//! ambiguity, so score ties are surfaced rather than broken arbitrarily.

use ahash::AHashMap;
use strsim::normalized_damerau_levenshtein;
use unicode_normalization::UnicodeNormalization;

use crate::error::EngineError;

/// Minimum similarity (exclusive) for accepting a fuzzy candidate.
///
/// Normalized Damerau-Levenshtein: a single-character typo or transposition
/// on a name of 5+ characters scores >= 0.8 and is accepted; close but
/// distinct names like "chile"/"china" score 0.6 and are rejected.
pub const MATCH_THRESHOLD: f64 = 0.7;

/// Outcome of resolving a query against a set of known entity names.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Normalized forms are identical.
    Exact(String),
    /// Best scoring candidate above the acceptance threshold.
    Fuzzy { candidate: String, score: f64 },
    /// Two or more candidates tied at the best score, sorted by name.
    Ambiguous(Vec<String>),
    NotFound,
}

impl Resolution {
    /// Collapse into the resolved entity name, or the matching engine error.
    pub fn into_entity(self, query: &str) -> Result<String, EngineError> {
        match self {
            Resolution::Exact(name) => Ok(name),
            Resolution::Fuzzy { candidate, score } => {
                log::info!("fuzzy-matched {query:?} to {candidate:?} (score {score:.2})");
                Ok(candidate)
            }
            Resolution::Ambiguous(candidates) => Err(EngineError::EntityAmbiguous {
                query: query.to_string(),
                candidates,
            }),
            Resolution::NotFound => Err(EngineError::EntityNotFound {
                query: query.to_string(),
            }),
        }
    }
}

/// Normalize an entity name for forgiving comparison: NFKD fold, strip
/// diacritics, case-fold, drop everything that is not ASCII alphanumeric.
///
/// `"Côte d'Ivoire"` and `"cote divoire"` normalize identically.
pub fn normalize(name: &str) -> String {
    name.nfkd()
        .filter(char::is_ascii)
        .map(|c| c.to_ascii_lowercase())
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Resolve `query` to zero, one, or many canonical names from `known`.
pub fn resolve<'a>(query: &str, known: impl IntoIterator<Item = &'a str>) -> Resolution {
    let key = normalize(query);
    if key.is_empty() {
        return Resolution::NotFound;
    }

    // First known name wins for colliding normalized forms.
    let mut by_normalized: AHashMap<String, &str> = AHashMap::new();
    for name in known {
        by_normalized.entry(normalize(name)).or_insert(name);
    }

    if let Some(&name) = by_normalized.get(&key) {
        return Resolution::Exact(name.to_string());
    }

    let mut best_score = 0.0_f64;
    let mut best: Vec<&str> = Vec::new();
    for (normalized, &name) in &by_normalized {
        let score = normalized_damerau_levenshtein(&key, normalized);
        if score > best_score {
            best_score = score;
            best.clear();
            best.push(name);
        } else if score == best_score {
            best.push(name);
        }
    }

    if best_score <= MATCH_THRESHOLD {
        return Resolution::NotFound;
    }
    match best.as_slice() {
        [single] => Resolution::Fuzzy {
            candidate: single.to_string(),
            score: best_score,
        },
        _ => {
            best.sort_unstable();
            Resolution::Ambiguous(best.into_iter().map(String::from).collect())
        }
    }
}
