// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The built-in sequences.
//!
//! Registration is explicit: [`register_all`] calls each group's `register`
//! once while [`crate::catalog()`] builds the process-wide registry. Groups
//! follow the shape of their term rule:
//!
//! | Module          | Rule kind                                     |
//! |-----------------|-----------------------------------------------|
//! | `closed_form`   | closed formulas and digit/bit functions       |
//! | `number_theory` | divisor functions over a factorisation        |
//! | `recurrences`   | generators: recurrences, sieves, finite lists |
//! | `derived`       | functions reading other sequences by name     |
//! | `expansions`    | decimal digits of constants                   |

mod closed_form;
mod derived;
mod expansions;
mod number_theory;
mod recurrences;

use num_bigint::BigInt;

use crate::error::Result;
use crate::registry::{catalog, Registry};

/// Register every built-in sequence.
pub fn register_all(registry: &mut Registry) {
    closed_form::register(registry);
    number_theory::register(registry);
    recurrences::register(registry);
    derived::register(registry);
    expansions::register(registry);
}

/// Term `index` of the catalog sequence `name`, resolved at call time.
fn term_of(name: &str, index: usize) -> Result<BigInt> {
    catalog().lookup(name)?.get(index as i64)
}
