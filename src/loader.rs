//! CSV loading for the two shipped datasets.
//!
//! The loader owns the load-time filtering invariant: rows with a blank,
//! unparseable, or non-finite value are dropped here, so the engine never
//! sees a missing value.

use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::models::Row;

pub const FOREST_CHANGE_FILE: &str = "annual-change-forest-area.csv";
pub const FOREST_CHANGE_COLUMN: &str = "Annual change in forest area";

pub const CO2_FILE: &str = "co-emissions-per-capita.csv";
pub const CO2_COLUMN: &str = "Annual CO\u{2082} emissions (per capita)";

/// Read one dataset: `Entity`, optional `Code`, `Year`, and the named value
/// column. Rows without a usable value are skipped.
pub fn load_rows(path: &Path, value_column: &str) -> Result<Vec<Row>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("open dataset {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read header row of {}", path.display()))?
        .clone();

    let col = |name: &str| headers.iter().position(|h| h == name);
    let Some(entity_idx) = col("Entity") else {
        bail!("{}: missing 'Entity' column", path.display());
    };
    let Some(year_idx) = col("Year") else {
        bail!("{}: missing 'Year' column", path.display());
    };
    let Some(value_idx) = col(value_column) else {
        bail!("{}: missing {value_column:?} column", path.display());
    };
    let code_idx = col("Code");

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record.with_context(|| format!("read record from {}", path.display()))?;
        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        let Some(value) = field(value_idx).parse::<f64>().ok().filter(|v| v.is_finite())
        else {
            skipped += 1;
            continue;
        };
        let Ok(year) = field(year_idx).parse::<i32>() else {
            skipped += 1;
            continue;
        };

        let code = code_idx.map(|idx| field(idx)).filter(|c| !c.is_empty());
        rows.push(Row {
            entity: field(entity_idx).to_string(),
            code: code.map(String::from),
            year,
            value,
        });
    }

    log::debug!(
        "loaded {} rows from {} ({skipped} skipped for missing values)",
        rows.len(),
        path.display()
    );
    Ok(rows)
}

/// Load the annual forest-area change dataset from `data_dir`.
pub fn load_forest_change(data_dir: &Path) -> Result<Vec<Row>> {
    load_rows(&data_dir.join(FOREST_CHANGE_FILE), FOREST_CHANGE_COLUMN)
}

/// Load the CO2-per-capita dataset from `data_dir`.
pub fn load_co2(data_dir: &Path) -> Result<Vec<Row>> {
    load_rows(&data_dir.join(CO2_FILE), CO2_COLUMN)
}
