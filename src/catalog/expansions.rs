// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Decimal expansions of constants, one digit per term, offset 1.

use crate::registry::Registry;
use crate::rule::TermRule;
use crate::util::digits::{e_scaled, pi_scaled, sqrt2_scaled, DigitExpansion, ScaledConstant};

pub(super) fn register(registry: &mut Registry) {
    registry
        .register(digits_of(pi_scaled), "A000796", "Decimal expansion of Pi (or digits of Pi).", 1)
        .register(digits_of(e_scaled), "A001113", "Decimal expansion of e.", 1)
        .register(
            digits_of(sqrt2_scaled),
            "A002193",
            "Decimal expansion of square root of 2.",
            1,
        );
}

/// Term `n` is the n-th significant digit; the expansion owns its precision.
fn digits_of(scaled: ScaledConstant) -> TermRule {
    let expansion = DigitExpansion::new(scaled);
    TermRule::closed_form(move |n| expansion.digit(n - 1))
}
