// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the term cache.
//!
//! Debug-mode assertions over the properties every wrapper promises:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Fail at the exact call that broke the invariant, not three calls later
//!    when a stale term is read back
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                     |
//! |----------------------------|----------------------------------------------|
//! | `check_cache_growth`       | cache is append-only, never shrinks          |
//! | `check_cache_covers`       | after extension the target index is cached   |
//! | `check_range_len`          | a range `[a, b)` returns exactly `b - a`     |
//! | `check_decimal_digit`      | digit expansions only yield `0..=9`          |
//! | `check_guard_precision`    | precision exceeds the requested digit        |

use num_bigint::BigInt;

// ============================================================================
// CACHE CONTRACTS
// ============================================================================

/// Check that the cache did not shrink across an access.
///
/// # Panics (debug builds only)
/// Panics if `after < before`.
#[inline]
pub fn check_cache_growth(name: &str, before: usize, after: usize) {
    // INVARIANT: cache population is append-only
    debug_assert!(
        after >= before,
        "CONTRACT VIOLATION: cache of {} shrank from {} to {} terms",
        name,
        before,
        after
    );
}

/// Check that an extension pass reached the requested number of terms.
///
/// # Panics (debug builds only)
/// Panics if `cached < needed`.
#[inline]
pub fn check_cache_covers(name: &str, cached: usize, needed: usize) {
    // INVARIANT: a successful extension caches every index below the target
    debug_assert!(
        cached >= needed,
        "CONTRACT VIOLATION: cache of {} holds {} terms after extending to {}",
        name,
        cached,
        needed
    );
}

// ============================================================================
// RANGE CONTRACTS
// ============================================================================

/// Check that a validated range produced one term per index.
///
/// # Panics (debug builds only)
/// Panics if `terms.len() != stop - start`.
#[inline]
pub fn check_range_len(name: &str, start: usize, stop: usize, terms: &[BigInt]) {
    // INVARIANT: get_range(a, b) has exactly b - a terms
    debug_assert_eq!(
        terms.len(),
        stop.saturating_sub(start),
        "CONTRACT VIOLATION: {}[{}..{}] returned {} terms",
        name,
        start,
        stop,
        terms.len()
    );
}

// ============================================================================
// DIGIT EXPANSION CONTRACTS
// ============================================================================

/// Check that an extracted value is a single decimal digit.
///
/// # Panics (debug builds only)
/// Panics if `digit > 9`.
#[inline]
pub fn check_decimal_digit(digit: u8) {
    // INVARIANT: decimal expansions yield digits in 0..=9
    debug_assert!(digit <= 9, "CONTRACT VIOLATION: {} is not a decimal digit", digit);
}

/// Check that an expansion was computed with guard digits past the request.
///
/// # Panics (debug builds only)
/// Panics if `precision <= index`.
#[inline]
pub fn check_guard_precision(index: usize, precision: usize) {
    // INVARIANT: precision exceeds the highest requested index
    debug_assert!(
        precision > index,
        "CONTRACT VIOLATION: digit {} read at precision {}",
        index,
        precision
    );
}
