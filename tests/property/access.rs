//! Range and point access agree, and index validation is uniform.

use super::common::sequence;
use oeis::SequenceError;
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// One function-backed and one generator-backed sequence per offset.
fn sequence_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "A000290", // function, offset 0
        "A000027", // function, offset 1
        "A000045", // generator, offset 0
        "A000040", // generator, offset 1
        "A181391", // generator, offset 0
        "A001223", // function over a generator, offset 1
    ])
}

/// A valid `[start, stop)` for the sequence's offset.
fn window() -> impl Strategy<Value = (&'static str, i64, i64)> {
    (sequence_name(), 0i64..300, 0i64..60).prop_map(|(name, from, len)| {
        let start = sequence(name).offset() as i64 + from;
        (name, start, start + len)
    })
}

// ============================================================================
// RANGE / POINT EQUIVALENCE
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: get_range(a, b)[i] == get(a + i)
    #[test]
    fn prop_range_matches_points((name, start, stop) in window()) {
        let seq = sequence(name);
        let values = seq.get_range(Some(start), Some(stop)).unwrap();

        prop_assert_eq!(values.len() as i64, stop - start);
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(value, &seq.get(start + i as i64).unwrap());
        }
    }

    /// Property: rust range syntax is the same request
    #[test]
    fn prop_range_syntax_matches((name, start, stop) in window()) {
        let seq = sequence(name);
        prop_assert_eq!(
            seq.range(start..stop).unwrap(),
            seq.get_range(Some(start), Some(stop)).unwrap()
        );
        if stop > start {
            prop_assert_eq!(
                seq.range(start..=stop - 1).unwrap(),
                seq.get_range(Some(start), Some(stop)).unwrap()
            );
        }
    }

    /// Property: consecutive windows concatenate
    #[test]
    fn prop_windows_concatenate((name, start, stop) in window(), extra in 0i64..40) {
        let seq = sequence(name);
        let mut joined = seq.get_range(Some(start), Some(stop)).unwrap();
        joined.extend(seq.get_range(Some(stop), Some(stop + extra)).unwrap());

        prop_assert_eq!(joined, seq.get_range(Some(start), Some(stop + extra)).unwrap());
    }

    /// Property: reversed bounds give an empty list, not an error
    #[test]
    fn prop_reversed_range_is_empty((name, start, _stop) in window(), back in 0i64..10) {
        let seq = sequence(name);
        let stop = (start - back).max(0);
        prop_assert!(seq.get_range(Some(start), Some(stop)).unwrap().is_empty());
    }
}

// ============================================================================
// INDEX VALIDATION
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: negative indices are always rejected as negative
    #[test]
    fn prop_negative_index_rejected(name in sequence_name(), index in i64::MIN..0) {
        let is_negative = matches!(
            sequence(name).get(index),
            Err(SequenceError::NegativeIndex { .. })
        );
        prop_assert!(is_negative);
    }

    /// Property: negative range bounds are rejected
    #[test]
    fn prop_negative_bounds_rejected(name in sequence_name(), bound in -1000i64..0) {
        let seq = sequence(name);
        let start_rejected = matches!(
            seq.get_range(Some(bound), Some(10)),
            Err(SequenceError::NegativeIndex { .. })
        );
        let stop_rejected = matches!(
            seq.get_range(Some(seq.offset() as i64), Some(bound)),
            Err(SequenceError::NegativeIndex { .. })
        );
        prop_assert!(start_rejected);
        prop_assert!(stop_rejected);
    }

    /// Property: an omitted start is fine exactly when the offset is 0
    #[test]
    fn prop_omitted_start(name in sequence_name(), stop in 0i64..50) {
        let seq = sequence(name);
        let result = seq.get_range(None, Some(stop));
        if seq.offset() == 0 {
            prop_assert_eq!(result.unwrap(), seq.get_range(Some(0), Some(stop)).unwrap());
        } else {
            let ambiguous = matches!(result, Err(SequenceError::AmbiguousStart { .. }));
            prop_assert!(ambiguous);
        }
    }

    /// Property: an omitted stop is never silently truncated
    #[test]
    fn prop_unbounded_rejected(name in sequence_name(), start in 0i64..50) {
        let seq = sequence(name);
        let start = start + seq.offset() as i64;
        let unbounded = matches!(
            seq.get_range(Some(start), None),
            Err(SequenceError::UnboundedRangeUnsupported { .. })
        );
        prop_assert!(unbounded);
        prop_assert!(seq.range(start..).is_err());
    }
}

/// Indices below a non-zero offset are out of range, never answered.
#[test]
fn test_below_offset_is_out_of_range() {
    for name in ["A000027", "A000040", "A001223"] {
        let seq = sequence(name);
        let err = seq.get(0).unwrap_err();
        assert!(err.is_offset_error(), "{}: {}", name, err);
        assert!(matches!(
            seq.get_range(Some(0), Some(5)),
            Err(SequenceError::OutOfRangeIndex { offset: 1, .. })
        ));
    }
}

/// An inclusive end at `i64::MAX` has no half-open stop.
#[test]
fn test_inclusive_end_at_i64_max_is_rejected() {
    for name in ["A000290", "A000045"] {
        let err = sequence(name).range(0..=i64::MAX).unwrap_err();
        assert!(
            matches!(err, SequenceError::IndexOverflow { bound: i64::MAX, .. }),
            "{}: {}",
            name,
            err
        );
    }
}
