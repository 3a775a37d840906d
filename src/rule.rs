// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term rules: how a sequence produces its n-th term.
//!
//! A rule is one of two things, and the wrapper branches on the tag once:
//!
//! - **Function**: `index -> term`, callable for any valid index without the
//!   previous terms. Closed forms, divisor functions, digit extractions, and
//!   rules that read other sequences through the registry all live here.
//! - **Generator**: a cursor yielding terms in index order starting at the
//!   offset. Recurrences keep their own state in the cursor; sieves and
//!   searches do the same. A cursor that returns `None` is a finite sequence.
//!
//! The wrapper never asks a rule for an index below the offset, so rules may
//! assume `index >= offset`.

use num_bigint::BigInt;

use crate::error::Result;

/// Pure term function. Receives the absolute index.
pub type TermFn = Box<dyn Fn(usize) -> Result<BigInt> + Send + Sync>;

/// Running generator cursor.
pub type Cursor = Box<dyn Iterator<Item = BigInt> + Send + Sync>;

/// Builds a fresh cursor positioned at the offset.
pub type CursorFactory = Box<dyn Fn() -> Cursor + Send + Sync>;

/// Tag of a [`TermRule`], used for display and dispatch in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Function,
    Generator,
}

/// How a sequence computes its terms.
pub enum TermRule {
    Function(TermFn),
    Generator(CursorFactory),
}

impl TermRule {
    /// Fallible term function, for rules that consult other sequences.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(usize) -> Result<BigInt> + Send + Sync + 'static,
    {
        TermRule::Function(Box::new(f))
    }

    /// Infallible closed form.
    pub fn closed_form<F, T>(f: F) -> Self
    where
        F: Fn(usize) -> T + Send + Sync + 'static,
        T: Into<BigInt>,
    {
        TermRule::Function(Box::new(move |n| Ok(f(n).into())))
    }

    /// Generator from a cursor factory. The factory runs on first access.
    pub fn generator<F, I, T>(factory: F) -> Self
    where
        F: Fn() -> I + Send + Sync + 'static,
        I: Iterator<Item = T> + Send + Sync + 'static,
        T: Into<BigInt> + 'static,
    {
        TermRule::Generator(Box::new(move || {
            Box::new(factory().map(Into::<BigInt>::into)) as Cursor
        }))
    }

    /// Finite generator over a fixed list of known terms.
    pub fn finite<T>(terms: &[T]) -> Self
    where
        T: Clone + Into<BigInt>,
    {
        let terms: Vec<BigInt> = terms.iter().cloned().map(Into::into).collect();
        TermRule::Generator(Box::new(move || Box::new(terms.clone().into_iter()) as Cursor))
    }

    pub fn kind(&self) -> RuleKind {
        match self {
            TermRule::Function(_) => RuleKind::Function,
            TermRule::Generator(_) => RuleKind::Generator,
        }
    }
}

impl std::fmt::Debug for TermRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TermRule::{:?}", self.kind())
    }
}
