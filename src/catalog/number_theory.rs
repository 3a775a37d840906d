// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Arithmetic functions of n, all defined for n >= 1.

use crate::registry::Registry;
use crate::rule::TermRule;
use crate::util::number::{collatz_steps, divisor_count, divisor_sum, radical, totient};

pub(super) fn register(registry: &mut Registry) {
    registry
        .register(
            TermRule::closed_form(|n| divisor_count(n as u64)),
            "A000005",
            "d(n) (also called tau(n) or sigma_0(n)), the number of divisors of n.",
            1,
        )
        .register(
            TermRule::closed_form(|n| totient(n as u64)),
            "A000010",
            "Euler totient function phi(n): count numbers <= n and prime to n.",
            1,
        )
        .register(
            TermRule::closed_form(|n| divisor_sum(n as u64)),
            "A000203",
            "a(n) = sigma(n), the sum of the divisors of n. Also called sigma_1(n).",
            1,
        )
        .register(
            TermRule::closed_form(|n| collatz_steps(n as u64)),
            "A006577",
            "Number of halving and tripling steps to reach 1 in '3x+1' problem.",
            1,
        )
        .register(
            TermRule::closed_form(|n| radical(n as u64)),
            "A007947",
            "Largest squarefree number dividing n: the squarefree kernel of n, rad(n).",
            1,
        );
}
