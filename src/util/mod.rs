// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Arithmetic helpers shared by the catalog.
//!
//! Term rules stay one-liners by leaning on these: an incremental prime sieve,
//! divisor functions over a trial-division factorisation, integer roots, and
//! decimal expansions of constants at a precision that grows on demand.

pub mod digits;
pub mod number;
pub mod primes;
