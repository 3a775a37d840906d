//! Generator-backed sequences: recurrences, searches and finite lists.

use super::common::{assert_big_term, assert_head, assert_terms_from, sequence};
use num_bigint::BigInt;
use oeis::{SequenceError, SequenceState};

#[test]
fn test_a000032_lucas() {
    assert_head("A000032", &[2, 1, 3, 4, 7, 11, 18, 29, 47, 76, 123]);
}

#[test]
fn test_a000045_fibonacci_starts_at_zero() {
    assert_head("A000045", &[0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
    assert_big_term(
        "A000045",
        300,
        "222232244629420445529739893461909967206666939096499764990979600",
    );
}

#[test]
fn test_a000142_factorials() {
    let seq = sequence("A000142");
    assert_eq!(seq.get(5).unwrap(), BigInt::from(120));
    assert_eq!(seq.get(0).unwrap(), BigInt::from(1));
    assert_head(
        "A000142",
        &[
            1,
            1,
            2,
            6,
            24,
            120,
            720,
            5040,
            40320,
            362880,
            3628800,
            39916800,
            479001600,
            6227020800,
            87178291200,
            1307674368000,
            20922789888000,
            355687428096000,
            6402373705728000,
            121645100408832000,
        ],
    );
}

#[test]
fn test_a000040_primes() {
    assert_head("A000040", &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37]);
    assert_eq!(sequence("A000040").get(1000).unwrap(), BigInt::from(7919));
}

#[test]
fn test_a001462_golomb() {
    assert_head("A001462", &[1, 2, 2, 3, 3, 4, 4, 4, 5, 5]);
    assert_terms_from("A001462", 2, &[2]);
    assert!(matches!(
        sequence("A001462").get(0),
        Err(SequenceError::OutOfRangeIndex { offset: 1, .. })
    ));
}

#[test]
fn test_a001969_evil_numbers() {
    assert_head("A001969", &[0, 3, 5, 6, 9, 10, 12, 15, 17, 18, 20, 23, 24, 27, 29, 30]);
}

#[test]
fn test_a002182_highly_composite() {
    assert_head(
        "A002182",
        &[
            1, 2, 4, 6, 12, 24, 36, 48, 60, 120, 180, 240, 360, 720, 840, 1260, 1680, 2520, 5040,
            7560,
        ],
    );
}

#[test]
fn test_a133058_gcd_walk() {
    assert_head(
        "A133058",
        &[1, 1, 4, 8, 2, 8, 4, 12, 3, 1, 12, 24, 2, 16, 8, 24, 3, 21, 7, 27],
    );
}

#[test]
fn test_a181391_van_eck() {
    assert_head(
        "A181391",
        &[0, 0, 1, 0, 2, 0, 2, 2, 1, 6, 0, 5, 0, 2, 6, 5, 4, 0, 5, 3],
    );
}

#[test]
fn test_a181391_long_range_has_exact_length() {
    let values = sequence("A181391").get_range(None, Some(20_000)).unwrap();
    assert_eq!(values.len(), 20_000);
}

#[test]
fn test_a001220_wieferich_is_finite() {
    let seq = sequence("A001220");
    assert_head("A001220", &[1093, 3511]);

    match seq.get(3) {
        Err(SequenceError::ExhaustedSequence { index, known, .. }) => {
            assert_eq!(index, 3);
            assert_eq!(known, 2);
        }
        other => panic!("expected exhaustion, got {:?}", other),
    }
    assert_eq!(seq.state(), SequenceState::Exhausted);

    // Exhaustion is sticky and the known terms stay readable
    assert!(seq.get(3).is_err());
    assert_eq!(seq.get(2).unwrap(), BigInt::from(3511));
}

#[test]
fn test_a001220_iter_stops_quietly() {
    let found: Vec<BigInt> = sequence("A001220").iter().map(Result::unwrap).collect();
    assert_eq!(found, vec![BigInt::from(1093), BigInt::from(3511)]);
}

#[test]
fn test_a115020_countdown() {
    assert_head(
        "A115020",
        &[100, 93, 86, 79, 72, 65, 58, 51, 44, 37, 30, 23, 16, 9, 2],
    );
    assert!(matches!(
        sequence("A115020").get_range(Some(10), Some(20)),
        Err(SequenceError::ExhaustedSequence { .. })
    ));
}
