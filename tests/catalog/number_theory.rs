//! Arithmetic functions of n, all starting at n = 1.

use super::common::{assert_head, sequence};
use num_bigint::BigInt;
use num_traits::One;

#[test]
fn test_a000005_divisor_count() {
    assert_head(
        "A000005",
        &[1, 2, 2, 3, 2, 4, 2, 4, 3, 4, 2, 6, 2, 4, 4, 5, 2, 6, 2, 6],
    );
}

#[test]
fn test_a000010_totient() {
    assert_head("A000010", &[1, 1, 2, 2, 4, 2, 6, 4, 6, 4, 10, 4, 12, 6, 8, 8]);
}

#[test]
fn test_a000203_divisor_sum() {
    assert_head(
        "A000203",
        &[
            1, 3, 4, 7, 6, 12, 8, 15, 13, 18, 12, 28, 14, 24, 24, 31, 18, 39, 20, 42, 32, 36, 24,
            60, 31, 42, 40, 56, 30, 72, 32, 63, 48, 54, 48, 91, 38, 60, 56, 90, 42, 96, 44, 84,
            78, 72, 48, 124, 57, 93, 72, 98, 54, 120, 72, 120, 80, 90, 60, 168, 62, 96, 104, 127,
            84, 144, 68, 126, 96, 144,
        ],
    );
}

#[test]
fn test_a006577_collatz_steps() {
    assert_head(
        "A006577",
        &[
            0, 1, 7, 2, 5, 8, 16, 3, 19, 6, 14, 9, 9, 17, 17, 4, 12, 20, 20, 7, 7, 15, 15, 10, 23,
        ],
    );
}

#[test]
fn test_a007947_radical() {
    assert_head(
        "A007947",
        &[1, 2, 3, 2, 5, 6, 7, 2, 3, 10, 11, 6, 13, 14, 15, 2, 17, 6, 19, 10],
    );
}

#[test]
fn test_a007947_of_prime_products() {
    // rad(p1 * p2 * ... * pk) for distinct primes is the product itself;
    // squaring a factor leaves the radical unchanged
    let primes = sequence("A000040").get_range(Some(1), Some(8)).unwrap();
    let radical = sequence("A007947");

    let mut product = BigInt::one();
    for p in &primes {
        product *= p;
        let n = i64::try_from(&product).unwrap();
        assert_eq!(radical.get(n).unwrap(), product);

        let squared = i64::try_from(&product * p).unwrap();
        assert_eq!(radical.get(squared).unwrap(), product);
    }
}
