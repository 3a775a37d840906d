//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical sequences with known behaviour so tests don't each
//! grow their own.

#![doc(hidden)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use num_bigint::BigInt;

use crate::registry::Registry;
use crate::rule::TermRule;
use crate::sequence::Sequence;

/// Function-backed squares, named like the catalog entry.
pub fn squares_sequence() -> Sequence {
    Sequence::new("A000290", "The squares: a(n) = n^2.", 0, TermRule::closed_form(|n| n * n))
}

/// Generator yielding `a(n) = n` from `offset`, counting every term it produces.
pub fn counting_sequence(name: &str, offset: usize, calls: Arc<AtomicUsize>) -> Sequence {
    let rule = TermRule::generator(move || {
        let calls = calls.clone();
        (offset..).map(move |n| {
            calls.fetch_add(1, Ordering::SeqCst);
            n
        })
    });
    Sequence::new(name, "Counting test sequence.", offset, rule)
}

/// Finite generator over `terms`.
pub fn bounded_sequence(name: &str, offset: usize, terms: &[i64]) -> Sequence {
    Sequence::new(name, "Bounded test sequence.", offset, TermRule::finite(terms))
}

/// Small registry with one sequence of each kind.
pub fn small_registry() -> Registry {
    let mut registry = Registry::new();
    registry.insert(squares_sequence());
    registry.insert(counting_sequence("T000001", 1, Arc::new(AtomicUsize::new(0))));
    registry.insert(bounded_sequence("T000002", 1, &[1093, 3511]));
    registry
}

/// Convert a slice of small integers into terms.
pub fn terms(values: &[i64]) -> Vec<BigInt> {
    values.iter().map(|&v| BigInt::from(v)).collect()
}
