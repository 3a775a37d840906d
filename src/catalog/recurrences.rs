// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Generator-backed sequences.
//!
//! Each cursor carries the state its recurrence needs and yields terms from
//! the offset onwards. The wrapper caches what they yield, so none of them
//! keeps more history than the recurrence itself requires.

use std::collections::HashMap;
use std::iter;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::One;

use crate::registry::Registry;
use crate::rule::TermRule;
use crate::util::number::divisor_count;
use crate::util::primes::Primes;

/// Primes below this bound are searched for Wieferich primes.
pub const WIEFERICH_SEARCH_LIMIT: u64 = 100_000;

pub(super) fn register(registry: &mut Registry) {
    registry
        .register(
            TermRule::generator(|| second_order(2, 1)),
            "A000032",
            "Lucas numbers beginning at 2: L(n) = L(n-1) + L(n-2), L(0) = 2, L(1) = 1.",
            0,
        )
        .register(
            TermRule::generator(|| second_order(0, 1)),
            "A000045",
            "Fibonacci numbers: F(n) = F(n-1) + F(n-2) with F(0) = 0 and F(1) = 1.",
            0,
        )
        .register(
            TermRule::generator(factorials),
            "A000142",
            "Factorial numbers n! = 1*2*3*4*...*n (order of symmetric group S_n).",
            0,
        )
        .register(
            TermRule::generator(Primes::new),
            "A000040",
            "The prime numbers.",
            1,
        )
        .register(
            TermRule::generator(golomb),
            "A001462",
            "Golomb's sequence: a(n) is the number of times n occurs, starting with a(1) = 1.",
            1,
        )
        .register(
            TermRule::generator(|| (0u64..).filter(|n| n.count_ones() % 2 == 0)),
            "A001969",
            "Evil numbers: nonnegative integers with an even number of 1's in their binary expansion.",
            0,
        )
        .register(
            TermRule::generator(highly_composite),
            "A002182",
            "Highly composite numbers: numbers n where d(n), the number of divisors of n, \
             increases to a record.",
            1,
        )
        .register(
            TermRule::generator(gcd_walk),
            "A133058",
            "a(0)=a(1)=1; for n>1, a(n) = a(n-1) + n + 1 if a(n-1) and n are coprime, \
             otherwise a(n) = a(n-1)/gcd(a(n-1),n).",
            0,
        )
        .register(
            TermRule::generator(van_eck),
            "A181391",
            "Van Eck's sequence: if a(n) appeared before, last at m < n, then a(n+1) = n - m, \
             otherwise a(n+1) = 0. Start with a(0) = 0.",
            0,
        )
        .register(
            TermRule::generator(wieferich),
            "A001220",
            "Wieferich primes: primes p such that p^2 divides 2^(p-1) - 1.",
            1,
        )
        .register(
            TermRule::generator(|| (2u32..=100).rev().step_by(7)),
            "A115020",
            "Count backwards from 100 in steps of 7.",
            0,
        );
}

/// `a(n) = a(n-1) + a(n-2)` from the two initial terms.
fn second_order(a0: i64, a1: i64) -> impl Iterator<Item = BigInt> + Send + Sync {
    iter::successors(Some((BigInt::from(a0), BigInt::from(a1))), |(a, b)| {
        Some((b.clone(), a + b))
    })
    .map(|(a, _)| a)
}

fn factorials() -> impl Iterator<Item = BigInt> + Send + Sync {
    (1u64..).scan(BigInt::one(), |product, n| {
        let term = product.clone();
        *product *= n;
        Some(term)
    })
}

fn golomb() -> Golomb {
    Golomb::default()
}

/// Golomb's sequence as runs: value `v` repeats `a(v)` times.
///
/// The run lengths are the sequence itself, read from a nested cursor that
/// lags far behind this one. Memory grows with the nesting depth, not with
/// the number of terms.
#[derive(Default)]
struct Golomb {
    value: u64,
    left: u64,
    runs: Option<Box<Golomb>>,
}

impl Iterator for Golomb {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.left == 0 {
            self.value += 1;
            self.left = match self.value {
                1 => 1,
                2 => 2,
                _ => {
                    let runs = self.runs.get_or_insert_with(|| {
                        // a(1) and a(2) were used above
                        let mut inner = Box::<Golomb>::default();
                        inner.nth(1);
                        inner
                    });
                    runs.next()?
                }
            };
        }
        self.left -= 1;
        Some(self.value)
    }
}

fn highly_composite() -> impl Iterator<Item = u64> + Send + Sync {
    (1u64..)
        .scan(0u64, |record, n| {
            let divisors = divisor_count(n);
            if divisors > *record {
                *record = divisors;
                Some(Some(n))
            } else {
                Some(None)
            }
        })
        .flatten()
}

fn gcd_walk() -> impl Iterator<Item = u64> + Send + Sync {
    let mut n = 0u64;
    let mut previous = 1u64;
    iter::from_fn(move || {
        let term = if n < 2 {
            1
        } else {
            let g = previous.gcd(&n);
            if g > 1 {
                previous / g
            } else {
                previous + n + 1
            }
        };
        previous = term;
        n += 1;
        Some(term)
    })
}

fn van_eck() -> impl Iterator<Item = u64> + Send + Sync {
    let mut last_seen: HashMap<u64, u64> = HashMap::new();
    let mut n = 0u64;
    let mut current = 0u64;
    iter::from_fn(move || {
        let term = current;
        current = match last_seen.insert(term, n) {
            Some(m) => n - m,
            None => 0,
        };
        n += 1;
        Some(term)
    })
}

/// Wieferich primes below the search limit; the cursor ends after that.
fn wieferich() -> impl Iterator<Item = u64> + Send + Sync {
    Primes::new()
        .take_while(|&p| p < WIEFERICH_SEARCH_LIMIT)
        .filter(|&p| is_wieferich(p))
}

fn is_wieferich(p: u64) -> bool {
    let modulus = BigUint::from(p) * p;
    BigUint::from(2u32)
        .modpow(&BigUint::from(p - 1), &modulus)
        .is_one()
}
