// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Decimal expansions of constants at a precision that grows with demand.
//!
//! A constant is described by a function returning `floor(C * 10^k)` for any
//! scale `k`, computed in fixed-point big-integer arithmetic. An expansion
//! keeps the digits it has already derived. Before reading digit `i` it makes
//! sure the digits were computed with `GUARD_DIGITS` extra places past `i`;
//! if not, it re-derives the constant at (at least) twice the precision.
//!
//! Truncation error in the series is bounded by the number of terms, far
//! below `10^GUARD_DIGITS`, so the guard digits absorb it.

use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};
use parking_lot::RwLock;

use crate::contracts::{check_decimal_digit, check_guard_precision};

/// Extra places computed beyond the highest digit handed out.
pub const GUARD_DIGITS: usize = 12;

/// Digits derived on first access.
const INITIAL_PRECISION: usize = 64;

// Compile-time check: guard digits cover the truncation error of a series
// with up to 10^9 terms.
const _: () = assert!(GUARD_DIGITS > 9);

/// `floor(C * 10^scale)` for a constant `C`.
pub type ScaledConstant = fn(usize) -> BigUint;

/// Lazily grown digit string of a constant.
pub struct DigitExpansion {
    scaled: ScaledConstant,
    digits: RwLock<Vec<u8>>,
}

impl DigitExpansion {
    pub fn new(scaled: ScaledConstant) -> Self {
        Self {
            scaled,
            digits: RwLock::new(Vec::new()),
        }
    }

    /// Digit at `position`, counting the leading digit as 0.
    pub fn digit(&self, position: usize) -> u8 {
        if let Some(&d) = self.digits.read().get(position) {
            return d;
        }

        let mut digits = self.digits.write();
        if digits.len() <= position {
            let precision = (position + 1).max(2 * digits.len()).max(INITIAL_PRECISION);
            *digits = self.derive(precision);
            check_guard_precision(position, precision + GUARD_DIGITS);
        }
        digits[position]
    }

    /// Number of digits currently known.
    pub fn precision(&self) -> usize {
        self.digits.read().len()
    }

    /// First `precision` significant digits, computed with guard places.
    ///
    /// Only for constants in `[1, 10)`: the leading digit is the integer part.
    fn derive(&self, precision: usize) -> Vec<u8> {
        let scaled = (self.scaled)(precision - 1 + GUARD_DIGITS);
        let truncated = scaled / BigUint::from(10u32).pow(GUARD_DIGITS as u32);
        truncated
            .to_string()
            .bytes()
            .map(|b| {
                let d = b - b'0';
                check_decimal_digit(d);
                d
            })
            .collect()
    }
}

// ============================================================================
// CONSTANTS
// ============================================================================

fn ten_pow(scale: usize) -> BigUint {
    BigUint::from(10u32).pow(scale as u32)
}

/// `floor(e * 10^scale)` from the series `sum 1/k!`.
pub fn e_scaled(scale: usize) -> BigUint {
    let mut term = ten_pow(scale);
    let mut sum = BigUint::zero();
    let mut k = 0u32;
    while !term.is_zero() {
        sum += &term;
        k += 1;
        term /= k;
    }
    sum
}

/// `floor(pi * 10^scale)` from Machin's formula
/// `pi = 16 atan(1/5) - 4 atan(1/239)`.
pub fn pi_scaled(scale: usize) -> BigUint {
    let unit = BigInt::from(ten_pow(scale));
    let pi: BigInt = arctan_inverse(5, &unit) * 16u32 - arctan_inverse(239, &unit) * 4u32;
    pi.magnitude().clone()
}

/// `floor(sqrt(2) * 10^scale)`.
pub fn sqrt2_scaled(scale: usize) -> BigUint {
    (BigUint::from(2u32) * ten_pow(2 * scale)).sqrt()
}

/// `atan(1/x) * unit` from the alternating Gregory series.
fn arctan_inverse(x: u32, unit: &BigInt) -> BigInt {
    let x_squared = BigInt::from(x) * x;
    let mut power = unit / x;
    let mut sum = power.clone();
    let mut k = 1u32;
    loop {
        power /= &x_squared;
        let term = &power / (2 * k + 1);
        if term.is_zero() {
            break;
        }
        if k % 2 == 1 {
            sum -= term;
        } else {
            sum += term;
        }
        k += 1;
    }
    debug_assert!(!sum.is_negative());
    sum
}
