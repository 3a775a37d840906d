// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sequences defined through other sequences.
//!
//! Each rule names the sequence it reads and resolves it through the catalog
//! when a term is requested. Registration order is therefore irrelevant, and
//! the referenced sequence's cache is shared: asking for prime gaps fills the
//! cache of the primes.

use num_bigint::BigInt;

use super::term_of;
use crate::registry::Registry;
use crate::rule::TermRule;
use crate::util::number::tower_mod;

const PRIMES: &str = "A000040";
const TOWER_OF_THREES: &str = "A183613";

pub(super) fn register(registry: &mut Registry) {
    registry
        .register(
            TermRule::function(|n| Ok(term_of(PRIMES, n + 1)? - term_of(PRIMES, n)?)),
            "A001223",
            "Prime gaps: differences between consecutive primes.",
            1,
        )
        .register(
            TermRule::function(|n| Ok(term_of(PRIMES, n)?.pow(2))),
            "A001248",
            "Squares of primes.",
            1,
        )
        .register(
            TermRule::function(|n| {
                let p = term_of(PRIMES, n)?;
                Ok(BigInt::from(2).modpow(&BigInt::from(n), &p))
            }),
            "A064367",
            "a(n) = 2^n mod prime(n).",
            1,
        )
        .register(
            TermRule::closed_form(|n| tower_mod(3, n + 1, n as u32)),
            TOWER_OF_THREES,
            "a(n) = 3^^(n+1) mod 10^n: the last n digits of the power tower 3^3^...^3.",
            1,
        )
        .register(
            TermRule::function(|n| {
                let tail = term_of(TOWER_OF_THREES, n + 1)?;
                Ok(tail / BigInt::from(10).pow(n as u32))
            }),
            "A133613",
            "Digits of the 10-adic integer 3^3^3^3^... (read from the units digit up).",
            0,
        );
}
