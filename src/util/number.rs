// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Integer functions used by closed-form and number-theoretic rules.

use std::collections::HashMap;

use num_bigint::{BigInt, BigUint};
use num_integer::Roots;
use num_traits::{One, Zero};

use super::primes::factorize;

/// Nearest integer to `sqrt(n)`, i.e. `floor(1/2 + sqrt(n))`, without floats.
///
/// `sqrt(n) >= r + 1/2` exactly when `n > r^2 + r` for `r = isqrt(n)`.
pub fn round_sqrt(n: u64) -> u64 {
    let r = n.sqrt();
    if n > r * r + r {
        r + 1
    } else {
        r
    }
}

pub fn is_square(n: u64) -> bool {
    let r = n.sqrt();
    r * r == n
}

/// Number of divisors `d(n)`.
pub fn divisor_count(n: u64) -> u64 {
    factorize(n).iter().map(|&(_, e)| u64::from(e) + 1).product()
}

/// Sum of divisors `sigma(n)`.
pub fn divisor_sum(n: u64) -> u128 {
    factorize(n)
        .iter()
        .map(|&(p, e)| {
            let p = u128::from(p);
            (p.pow(e + 1) - 1) / (p - 1)
        })
        .product()
}

/// Euler's totient.
pub fn totient(n: u64) -> u64 {
    factorize(n)
        .iter()
        .fold(n, |acc, &(p, _)| acc / p * (p - 1))
}

/// Largest squarefree divisor.
pub fn radical(n: u64) -> u64 {
    factorize(n).iter().map(|&(p, _)| p).product()
}

/// Decimal digits of `n` in reverse order, leading zeros dropped.
pub fn reverse_digits(n: u64) -> BigInt {
    let reversed: String = n.to_string().chars().rev().collect();
    reversed.parse().unwrap_or_else(|_| BigInt::zero())
}

pub fn digit_sum(n: u64) -> u64 {
    let mut n = n;
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Halving and tripling steps for `n` to reach 1 in the `3x+1` problem.
pub fn collatz_steps(n: u64) -> u64 {
    let one = BigUint::one();
    let mut x = BigUint::from(n);
    let mut steps = 0;
    while x > one {
        x = if x.bit(0) { &x * 3u32 + 1u32 } else { x >> 1 };
        steps += 1;
    }
    steps
}

/// Ways to write `n` as a sum of distinct Fibonacci numbers, with the two
/// leading 1s counted as different parts.
///
/// Taking the second 1 or not splits the count into representations of `n`
/// and `n - 1` over the distinct parts 1, 2, 3, 5, ...
pub fn fibonacci_representations(n: usize) -> u64 {
    let n = n as u64;
    let mut sums = DistinctFibonacciSums::up_to(n);
    let with_second_one = if n > 0 { sums.count(n - 1) } else { 0 };
    sums.count(n) + with_second_one
}

/// Counts subsets of 1, 2, 3, 5, ... summing to a target, largest part first.
///
/// A remainder larger than the sum of the parts still available has no
/// representation, which leaves only a few live remainders per part. The
/// cost is polylogarithmic in the target.
struct DistinctFibonacciSums {
    parts: Vec<u64>,
    /// `below[k]` is the sum of the `k` smallest parts.
    below: Vec<u128>,
    memo: HashMap<(u64, usize), u64>,
}

impl DistinctFibonacciSums {
    fn up_to(n: u64) -> Self {
        let mut parts = Vec::new();
        let (mut a, mut b) = (1u128, 2u128);
        while a <= u128::from(n) {
            parts.push(a as u64);
            (a, b) = (b, a + b);
        }

        let below = std::iter::once(0)
            .chain(parts.iter().scan(0u128, |sum, &p| {
                *sum += u128::from(p);
                Some(*sum)
            }))
            .collect();

        Self {
            parts,
            below,
            memo: HashMap::new(),
        }
    }

    fn count(&mut self, n: u64) -> u64 {
        self.count_within(n, self.parts.len())
    }

    /// Representations of `n` using only the `k` smallest parts.
    fn count_within(&mut self, n: u64, k: usize) -> u64 {
        if n == 0 {
            return 1;
        }
        if k == 0 || u128::from(n) > self.below[k] {
            return 0;
        }
        if let Some(&ways) = self.memo.get(&(n, k)) {
            return ways;
        }

        let part = self.parts[k - 1];
        let mut ways = self.count_within(n, k - 1);
        if n >= part {
            ways += self.count_within(n - part, k - 1);
        }
        self.memo.insert((n, k), ways);
        ways
    }
}

/// Last `digits` decimal digits of the power tower `base^base^...^base` of
/// the given height.
///
/// `base^x mod 10^k` only depends on `x mod 10^k` once `k >= 2` and `base` is
/// coprime to 10, because the multiplicative order divides `10^k`. So every
/// level of the tower can be reduced modulo the same `10^k`.
pub fn tower_mod(base: u32, height: usize, digits: u32) -> BigUint {
    let modulus = BigUint::from(10u32).pow(digits.max(2));
    let base = BigUint::from(base);
    let mut x = base.clone();
    for _ in 1..height {
        x = base.modpow(&x, &modulus);
    }
    x % BigUint::from(10u32).pow(digits)
}
