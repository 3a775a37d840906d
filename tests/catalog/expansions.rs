//! Decimal expansions of constants.

use super::common::{assert_head, sequence};
use num_bigint::BigInt;

#[test]
fn test_a000796_pi() {
    assert_head(
        "A000796",
        &[
            3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9, 3, 2, 3, 8, 4, 6, 2, 6, 4, 3, 3, 8, 3, 2,
            7, 9, 5, 0, 2, 8, 8, 4, 1, 9, 7, 1, 6, 9, 3, 9, 9, 3, 7, 5, 1,
        ],
    );
}

#[test]
fn test_a001113_e() {
    assert_head(
        "A001113",
        &[
            2, 7, 1, 8, 2, 8, 1, 8, 2, 8, 4, 5, 9, 0, 4, 5, 2, 3, 5, 3, 6, 0, 2, 8, 7, 4, 7, 1, 3,
            5, 2, 6, 6, 2, 4, 9, 7, 7, 5, 7, 2, 4, 7, 0, 9, 3, 6, 9, 9, 9,
        ],
    );
}

#[test]
fn test_a002193_sqrt2() {
    assert_head(
        "A002193",
        &[1, 4, 1, 4, 2, 1, 3, 5, 6, 2, 3, 7, 3, 0, 9, 5, 0, 4, 8, 8, 0, 1, 6, 8, 8, 7],
    );
}

#[test]
fn test_late_digit_then_early_digit_agree() {
    // Asking far out first regrows the expansion; earlier digits must not move
    let e = sequence("A001113");
    let far = e.get(300).unwrap();
    let head = e.get_range(Some(1), Some(11)).unwrap();

    assert!(far >= BigInt::from(0) && far <= BigInt::from(9));
    assert_eq!(head[0], BigInt::from(2));
    assert_eq!(head[9], BigInt::from(8));
}

#[test]
fn test_digits_are_single_decimal_digits() {
    for name in ["A000796", "A001113", "A002193"] {
        let values = sequence(name).get_range(Some(1), Some(200)).unwrap();
        assert!(values
            .iter()
            .all(|d| *d >= BigInt::from(0) && *d <= BigInt::from(9)));
    }
}
