// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sequences with a formula in `n` alone.

use num_bigint::{BigInt, BigUint};
use num_traits::One;

use crate::registry::Registry;
use crate::rule::TermRule;
use crate::util::number::{
    digit_sum, fibonacci_representations, is_square, reverse_digits, round_sqrt,
};

pub(super) fn register(registry: &mut Registry) {
    registry
        .register(
            TermRule::closed_form(|_| 0u8),
            "A000004",
            "The zero sequence.",
            0,
        )
        .register(
            TermRule::closed_form(|_| 1u8),
            "A000012",
            "The simplest sequence of positive numbers: the all 1's sequence.",
            0,
        )
        .register(
            TermRule::closed_form(|n| n),
            "A000027",
            "The positive integers.",
            1,
        )
        .register(
            TermRule::closed_form(|n| BigInt::one() << n),
            "A000079",
            "Powers of 2: a(n) = 2^n.",
            0,
        )
        .register(
            TermRule::closed_form(catalan),
            "A000108",
            "Catalan numbers: C(n) = binomial(2n,n)/(n+1) = (2n)!/(n!(n+1)!).",
            0,
        )
        .register(
            TermRule::closed_form(|n| (n as u64).count_ones()),
            "A000120",
            "1's-counting sequence: number of 1's in binary expansion of n.",
            0,
        )
        .register(
            TermRule::closed_form(fibonacci_representations),
            "A000121",
            "Number of representations of n as a sum of Fibonacci numbers \
             (1 is allowed twice as a part).",
            0,
        )
        .register(
            TermRule::closed_form(|n| round_sqrt(n as u64)),
            "A000194",
            "n appears 2n times, for n >= 1; also nearest integer to square root of n.",
            0,
        )
        .register(
            TermRule::closed_form(|n| {
                let n = n as u128;
                n * (n + 1) / 2
            }),
            "A000217",
            "Triangular numbers: a(n) = binomial(n+1,2) = n(n+1)/2.",
            0,
        )
        .register(
            TermRule::closed_form(|n| (n as u128) * (n as u128)),
            "A000290",
            "The squares: a(n) = n^2.",
            0,
        )
        .register(
            TermRule::closed_form(|n| {
                let n = n as u128;
                n * (3 * n).saturating_sub(1) / 2
            }),
            "A000326",
            "Pentagonal numbers: a(n) = n(3n-1)/2.",
            0,
        )
        .register(
            TermRule::closed_form(|n| n as u64 + round_sqrt(n as u64)),
            "A000037",
            "Numbers that are not squares (or, the nonsquares): a(n) = n + floor(1/2 + sqrt(n)).",
            1,
        )
        .register(
            TermRule::closed_form(|n| reverse_digits(n as u64)),
            "A004086",
            "Read n backwards (referred to as R(n) in many sequences).",
            0,
        )
        .register(
            TermRule::closed_form(|n| 4 * n as u128 + 3),
            "A004767",
            "a(n) = 4n + 3.",
            0,
        )
        .register(
            TermRule::closed_form(|n| digit_sum(n as u64)),
            "A007953",
            "Digital sum (i.e., sum of digits) of n; also called digsum(n).",
            0,
        )
        .register(
            TermRule::closed_form(|n| 5 * n as u128),
            "A008587",
            "Multiples of 5.",
            0,
        )
        .register(
            TermRule::closed_form(|n| 7 * n as u128),
            "A008589",
            "Multiples of 7.",
            0,
        )
        .register(
            TermRule::closed_form(|n| u8::from(is_square(n as u64))),
            "A010052",
            "Characteristic function of squares: a(n) = 1 if n is a square, otherwise 0.",
            0,
        );
}

fn catalan(n: usize) -> BigUint {
    let n = n as u64;
    num_integer::binomial(BigUint::from(2 * n), BigUint::from(n)) / (n + 1)
}
