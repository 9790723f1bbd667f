//! Formatting of engine results into user-facing text.

use num_format::{Locale, ToFormattedString};

use crate::models::{LookupResult, RankEntry};
use crate::rank::Direction;

/// Format a value with thousands separators: integer-valued floats print as
/// grouped integers ("123,456"), everything else with two decimals
/// ("-1,234.57").
pub fn format_number(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < 1e-9 {
        return (rounded as i64).to_formatted_string(&Locale::en);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = int_part
        .parse::<u64>()
        .unwrap_or_default()
        .to_formatted_string(&Locale::en);
    format!("{sign}{grouped}.{frac_part}")
}

/// Stable label for a ranking order, as shown in titles and rank reports.
pub fn direction_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Loss => "loss",
        Direction::Gain => "gain",
    }
}

/// One-line report of a single entity/year value.
pub fn format_single_value(result: &LookupResult, metric: &str, unit: &str) -> String {
    format!(
        "{metric} for {} in {}: {} {unit}",
        result.entity,
        result.year,
        format_number(result.value)
    )
}

/// One-line report of an entity's rank within a year's ordering.
pub fn format_rank_result(
    entry: &RankEntry,
    total: usize,
    metric: &str,
    unit: &str,
    direction: Direction,
) -> String {
    format!(
        "{} rank in {} ({metric}, order={}): {} of {total} | value: {} {unit}",
        entry.entity,
        entry.year,
        direction_label(direction),
        entry.rank,
        format_number(entry.value)
    )
}

/// A titled, numbered list of ranked entities.
pub fn format_top_list(title: &str, entries: &[RankEntry], unit: &str) -> String {
    let mut lines = vec![title.to_string()];
    for entry in entries {
        lines.push(format!(
            "{}. {}: {} {unit}",
            entry.rank,
            entry.entity,
            format_number(entry.value)
        ));
    }
    lines.join("\n")
}
