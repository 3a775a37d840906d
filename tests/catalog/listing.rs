//! Registry enumeration and random selection over the full catalog.

use oeis::testing::{bounded_sequence, squares_sequence};
use oeis::{catalog, is_catalog_name, Registry, SequenceError};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_list_all_is_sorted_and_described() {
    let listing = catalog().list_all();
    assert!(listing.len() >= 40, "catalog has {} entries", listing.len());

    for pair in listing.windows(2) {
        assert!(pair[0].0 < pair[1].0, "{} before {}", pair[0].0, pair[1].0);
    }
    for (name, doc) in &listing {
        assert!(is_catalog_name(name), "{} is not an A-number", name);
        assert!(!doc.trim().is_empty(), "{} has no description", name);
    }
}

#[test]
fn test_list_all_matches_lookup() {
    for (name, doc) in catalog().list_all() {
        let seq = catalog().lookup(name).unwrap();
        assert_eq!(seq.name(), name);
        assert_eq!(seq.doc(), doc);
    }
}

#[test]
fn test_unknown_sequence() {
    let err = catalog().lookup("APOUETTE").unwrap_err();
    assert_eq!(
        err,
        SequenceError::UnknownSequence {
            name: "APOUETTE".to_string()
        }
    );
    assert!(err.to_string().contains("Unimplemented"));
}

#[test]
fn test_random_choice_is_registered() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let seq = catalog().random_choice_with(&mut rng).unwrap();
        assert!(catalog().contains(seq.name()));
    }
}

#[test]
fn test_random_choice_reaches_every_entry_eventually() {
    let mut registry = Registry::new();
    registry
        .insert(squares_sequence())
        .insert(bounded_sequence("T000002", 1, &[1, 2]));

    let mut rng = StdRng::seed_from_u64(42);
    let mut seen = std::collections::BTreeSet::new();
    for _ in 0..200 {
        seen.insert(registry.random_choice_with(&mut rng).unwrap().name().to_string());
    }
    assert_eq!(seen.len(), 2);
}

#[test]
fn test_empty_registry_has_no_random_choice() {
    assert!(Registry::new().random_choice().is_none());
}

#[test]
#[should_panic(expected = "registered twice")]
fn test_duplicate_registration_panics() {
    let mut registry = Registry::new();
    registry.insert(squares_sequence()).insert(squares_sequence());
}

#[test]
fn test_infos_serialise() {
    let infos = catalog().infos();
    let json = serde_json::to_value(&infos).unwrap();
    let first = &json[0];
    assert_eq!(first["name"], infos[0].name.as_str());
    assert!(first["offset"].is_u64());
}
