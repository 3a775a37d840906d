//! Function-backed sequences with closed forms.

use super::common::{assert_big_term, assert_head, assert_terms_from, sequence};
use num_bigint::BigInt;
use oeis::testing::terms;

#[test]
fn test_a000004_and_a000012_constants() {
    assert_head("A000004", &[0; 20]);
    assert_head("A000012", &[1; 20]);
}

#[test]
fn test_a000027_natural_numbers() {
    assert_head("A000027", &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert!(sequence("A000027").get(0).is_err());
}

#[test]
fn test_a000037_non_squares() {
    assert_head("A000037", &[2, 3, 5, 6, 7, 8, 10, 11, 12, 13, 14, 15, 17]);

    let head = sequence("A000037").get_range(Some(1), Some(17)).unwrap();
    for square in terms(&[0, 1, 4, 9, 16]) {
        assert!(!head.contains(&square), "{} is a square", square);
    }
}

#[test]
fn test_a000037_formula() {
    // a(n) = n + floor(1/2 + sqrt(n))
    let seq = sequence("A000037");
    for n in 1..500i64 {
        let expected = n + (0.5 + (n as f64).sqrt()).floor() as i64;
        assert_eq!(seq.get(n).unwrap(), BigInt::from(expected), "a({})", n);
    }
}

#[test]
fn test_a000037_against_a000194() {
    // a(n) = n + A000194(n)
    let non_squares = sequence("A000037");
    let near_root = sequence("A000194");
    for n in 1..200i64 {
        assert_eq!(
            non_squares.get(n).unwrap(),
            near_root.get(n).unwrap() + n,
            "a({})",
            n
        );
    }
}

#[test]
fn test_a000037_never_square() {
    // A010052(a(n)) = 0
    let non_squares = sequence("A000037");
    let is_square = sequence("A010052");
    for n in 1..300i64 {
        let term = non_squares.get(n).unwrap();
        let index = i64::try_from(term).unwrap();
        assert_eq!(is_square.get(index).unwrap(), BigInt::from(0));
    }
}

#[test]
fn test_a000079_powers_of_two() {
    assert_head("A000079", &[1, 2, 4, 8, 16, 32, 64, 128, 256, 512]);
    assert_big_term("A000079", 100, "1267650600228229401496703205376");
}

#[test]
fn test_a000108_catalan() {
    assert_head(
        "A000108",
        &[
            1, 1, 2, 5, 14, 42, 132, 429, 1430, 4862, 16796, 58786, 208012, 742900, 2674440,
            9694845, 35357670, 129644790, 477638700, 1767263190,
        ],
    );
}

#[test]
fn test_a000120_binary_weight() {
    assert_head(
        "A000120",
        &[0, 1, 1, 2, 1, 2, 2, 3, 1, 2, 2, 3, 2, 3, 3, 4, 1, 2, 2, 3],
    );
}

#[test]
fn test_a000121_fibonacci_representations() {
    assert_terms_from(
        "A000121",
        0,
        &[1, 2, 2, 3, 3, 3, 4, 3, 4, 5, 4, 5, 4, 4, 6, 5, 6, 6, 5, 6],
    );
}

#[test]
fn test_a000121_far_index_is_cheap() {
    let seq = sequence("A000121");
    assert_eq!(seq.get(1_000_000_000).unwrap(), BigInt::from(17640));
    assert_eq!(seq.get(1_000_000_000_000_000_000).unwrap(), BigInt::from(97796160));
}

#[test]
fn test_a000217_triangular() {
    assert_head(
        "A000217",
        &[
            0, 1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 66, 78, 91, 105, 120, 136, 153, 171, 190,
        ],
    );
}

#[test]
fn test_a000290_squares() {
    assert_head("A000290", &[0, 1, 4, 9, 16, 25, 36]);
    assert_terms_from("A000290", 1, &[1, 4, 9, 16, 25, 36]);
}

#[test]
fn test_a000326_pentagonal() {
    assert_head("A000326", &[0, 1, 5, 12, 22, 35, 51, 70, 92, 117]);
}

#[test]
fn test_a004086_double_reversal_drops_trailing_zeros() {
    let seq = sequence("A004086");
    for n in 1..=10_000i64 {
        let once = i64::try_from(seq.get(n).unwrap()).unwrap();
        let twice = seq.get(once).unwrap();
        let stripped: i64 = n.to_string().trim_end_matches('0').parse().unwrap();
        assert_eq!(twice, BigInt::from(stripped), "a(a({}))", n);
    }
}

#[test]
fn test_a004767_ends_in_binary_11() {
    let values = sequence("A004767").get_range(Some(0), Some(100)).unwrap();
    for value in values {
        let v = i64::try_from(value).unwrap();
        assert_eq!(v % 2, 1);
        assert_eq!(v & 0b11, 0b11, "{:b}", v);
    }
}

#[test]
fn test_a007953_digit_sum() {
    assert_head(
        "A007953",
        &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
    );
    assert_terms_from("A007953", 20, &[2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
}

#[test]
fn test_a008587_multiples_of_five() {
    let values = sequence("A008587").get_range(Some(0), Some(30)).unwrap();
    for multiple in terms(&[5, 10, 15, 20]) {
        assert!(values.contains(&multiple));
    }
    assert!(values.iter().all(|v| v % 5 == BigInt::from(0)));
}

#[test]
fn test_a008589_multiples_of_seven() {
    let values = sequence("A008589").get_range(Some(0), Some(40)).unwrap();
    for multiple in terms(&[7, 14, 21, 28]) {
        assert!(values.contains(&multiple));
    }
    assert!(values.iter().all(|v| v % 7 == BigInt::from(0)));
}

#[test]
fn test_a010052_characteristic_of_squares() {
    assert_head("A010052", &[1, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1]);
}
