use ecoquery::resolve::{MATCH_THRESHOLD, Resolution, resolve};

const KNOWN: &[&str] = &["Brazil", "Bolivia", "Canada", "World"];

fn known() -> impl Iterator<Item = &'static str> {
    KNOWN.iter().copied()
}

#[test]
fn exact_match_returns_the_canonical_name_unchanged() {
    assert_eq!(resolve("Brazil", known()), Resolution::Exact("Brazil".into()));
    // Idempotent: resolving an already-known normalized form changes nothing.
    assert_eq!(resolve("brazil", known()), Resolution::Exact("Brazil".into()));
}

#[test]
fn case_and_diacritics_do_not_affect_the_outcome() {
    let lower = resolve("brasil", known());
    let upper = resolve("BRASIL", known());
    assert_eq!(lower, upper);
    match lower {
        Resolution::Fuzzy { candidate, score } => {
            assert_eq!(candidate, "Brazil");
            assert!(score > MATCH_THRESHOLD);
        }
        other => panic!("expected fuzzy match, got {other:?}"),
    }
}

#[test]
fn diacritic_queries_match_their_ascii_forms_exactly() {
    let entities = ["Cote d'Ivoire", "Cameroon"];
    assert_eq!(
        resolve("Côte d'Ivoire", entities.iter().copied()),
        Resolution::Exact("Cote d'Ivoire".into())
    );
}

#[test]
fn transposition_typo_picks_the_closer_candidate() {
    // "Barzil" is one transposition from Brazil and far from Bolivia.
    match resolve("Barzil", known()) {
        Resolution::Fuzzy { candidate, .. } => assert_eq!(candidate, "Brazil"),
        other => panic!("expected fuzzy match, got {other:?}"),
    }
}

#[test]
fn unrelated_names_are_not_found() {
    assert_eq!(resolve("Atlantis", known()), Resolution::NotFound);
    assert_eq!(resolve("xyz", known()), Resolution::NotFound);
}

#[test]
fn tied_candidates_are_surfaced_as_ambiguous() {
    // "Irak" is one substitution from both names; neither may be picked
    // silently.
    let entities = ["Iraq", "Iran"];
    match resolve("Irak", entities.iter().copied()) {
        Resolution::Ambiguous(candidates) => {
            assert_eq!(candidates, vec!["Iran".to_string(), "Iraq".to_string()]);
        }
        Resolution::Fuzzy { candidate, .. } => {
            panic!("tie broken arbitrarily in favor of {candidate:?}")
        }
        other => panic!("expected ambiguity, got {other:?}"),
    }
}
