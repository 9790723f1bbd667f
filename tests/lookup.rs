use ecoquery::lookup::{lookup, lookup_ratio};
use ecoquery::{EngineError, Row, Store};

fn row(entity: &str, year: i32, value: f64) -> Row {
    Row {
        entity: entity.into(),
        code: None,
        year,
        value,
    }
}

fn brazil_store() -> Store {
    Store::build(vec![
        row("Brazil", 2018, -1.2),
        row("Brazil", 2019, -1.5),
        row("Brazil", 2020, -1.1),
    ])
}

#[test]
fn explicit_year_returns_the_stored_value() {
    let result = lookup(&brazil_store(), "Brazil", Some(2020)).unwrap();
    assert_eq!(result.value, -1.1);
    assert_eq!(result.year, 2020);
    assert!(!result.year_was_defaulted);
}

#[test]
fn omitted_year_defaults_to_the_latest_for_the_entity() {
    let result = lookup(&brazil_store(), "Brazil", None).unwrap();
    assert_eq!(result.year, 2020);
    assert_eq!(result.value, -1.1);
    assert!(result.year_was_defaulted);
}

#[test]
fn unknown_entity_and_missing_year_are_distinct_failures() {
    let store = brazil_store();
    assert_eq!(
        lookup(&store, "Atlantis", None),
        Err(EngineError::EntityNotFound {
            query: "Atlantis".into()
        })
    );
    assert_eq!(
        lookup(&store, "Brazil", Some(1800)),
        Err(EngineError::YearNotFound {
            entity: Some("Brazil".into()),
            year: Some(1800),
        })
    );
    // Both still collapse to the same user-facing string.
    let unknown = lookup(&store, "Atlantis", None).unwrap_err();
    let missing = lookup(&store, "Brazil", Some(1800)).unwrap_err();
    assert_eq!(unknown.user_message(), missing.user_message());
}

#[test]
fn ratio_lookup_divides_numerator_by_denominator() {
    let num = Store::build(vec![row("Brazil", 2020, 10.0)]);
    let den = Store::build(vec![row("Brazil", 2020, 4.0)]);
    let result = lookup_ratio(&num, &den, "Brazil", Some(2020)).unwrap();
    assert_eq!(result.value, 2.5);
}

#[test]
fn zero_or_missing_denominator_is_insufficient_data() {
    let num = Store::build(vec![row("Brazil", 2020, 10.0), row("Brazil", 2021, 8.0)]);
    let den = Store::build(vec![row("Brazil", 2020, 0.0)]);
    assert_eq!(
        lookup_ratio(&num, &den, "Brazil", Some(2020)),
        Err(EngineError::InsufficientData {
            entity: "Brazil".into(),
            year: 2020,
        })
    );
    assert_eq!(
        lookup_ratio(&num, &den, "Brazil", Some(2021)),
        Err(EngineError::InsufficientData {
            entity: "Brazil".into(),
            year: 2021,
        })
    );
    let err = lookup_ratio(&num, &den, "Brazil", Some(2020)).unwrap_err();
    assert_eq!(err.user_message(), "insufficient data");
}

#[test]
fn ratio_lookup_with_absent_numerator_year_is_year_not_found() {
    let num = Store::build(vec![row("Brazil", 2020, 10.0)]);
    let den = Store::build(vec![row("Brazil", 2019, 4.0)]);
    assert_eq!(
        lookup_ratio(&num, &den, "Brazil", Some(2019)),
        Err(EngineError::YearNotFound {
            entity: Some("Brazil".into()),
            year: Some(2019),
        })
    );
}
