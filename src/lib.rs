//! ecoquery
//!
//! A lightweight Rust library for looking up and ranking environmental
//! indicators (annual forest-area change, CO2 emissions per capita) by
//! country and year. Pairs with the `ecoquery` CLI.
//!
//! ### Features
//! - Index dataset rows by entity and year, with latest-year defaulting
//! - Forgiving entity-name resolution (case, diacritics, typos)
//! - Deterministic rankings with aggregate filtering and tie-breaking
//! - Ratio metrics that report insufficient data instead of dividing by zero
//!
//! ### Example
//! ```no_run
//! use std::path::Path;
//! use ecoquery::{CountrySet, Direction, Store, loader, lookup, rank, resolve};
//!
//! let rows = loader::load_forest_change(Path::new("Data"))?;
//! let countries = CountrySet::from_rows(&rows);
//! let store = Store::build(rows);
//! let entity = resolve::resolve("Brasil", store.all_entities()).into_entity("Brasil")?;
//! let result = lookup::lookup(&store, &entity, Some(2020))?;
//! let ranked = rank::rank(&store, &countries, 2020, Direction::Loss, false)?;
//! println!("{} -> {}, top entry {}", result.entity, result.value, ranked[0].entity);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod classify;
pub mod error;
pub mod format;
pub mod loader;
pub mod lookup;
pub mod models;
pub mod rank;
pub mod resolve;
pub mod store;

pub use classify::CountrySet;
pub use error::EngineError;
pub use models::{EntityClass, LookupResult, RankEntry, Row};
pub use rank::Direction;
pub use resolve::Resolution;
pub use store::Store;
