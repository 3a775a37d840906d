// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Primes: an unbounded incremental sieve and trial-division factorisation.

use std::collections::HashMap;

/// Unbounded sieve of Eratosthenes.
///
/// Each composite is discovered from the primes that divide it: when the
/// candidate `n` is in the table, its witnesses are moved to their next
/// multiple; when it is not, `n` is prime and starts witnessing at `n * n`.
/// Memory grows with the number of primes below `sqrt(n)`.
#[derive(Debug, Clone)]
pub struct Primes {
    composites: HashMap<u64, Vec<u64>>,
    candidate: u64,
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Primes {
    pub fn new() -> Self {
        Self {
            composites: HashMap::new(),
            candidate: 2,
        }
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            let n = self.candidate;
            self.candidate += 1;

            match self.composites.remove(&n) {
                None => {
                    self.composites.insert(n.saturating_mul(n), vec![n]);
                    return Some(n);
                }
                Some(witnesses) => {
                    for p in witnesses {
                        self.composites.entry(n + p).or_default().push(p);
                    }
                }
            }
        }
    }
}

/// Prime factorisation as `(prime, exponent)` pairs in increasing order.
///
/// `factorize(1)` and `factorize(0)` are empty.
pub fn factorize(mut n: u64) -> Vec<(u64, u32)> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }

    let mut divide_out = |n: &mut u64, p: u64| {
        let mut exponent = 0;
        while *n % p == 0 {
            *n /= p;
            exponent += 1;
        }
        if exponent > 0 {
            factors.push((p, exponent));
        }
    };

    divide_out(&mut n, 2);
    let mut p = 3;
    while p <= n / p {
        divide_out(&mut n, p);
        p += 2;
    }
    if n > 1 {
        factors.push((n, 1));
    }
    factors
}
