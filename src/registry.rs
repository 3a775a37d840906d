// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The registry: every sequence, keyed by its catalog name.
//!
//! Built once, then only read. The process-wide instance is [`catalog()`], which
//! runs the explicit registration in [`crate::catalog::register_all`] on first
//! use. Rules that are defined in terms of another sequence call `catalog()`
//! when they are evaluated, never while the registry is being built, so the
//! order in which sequences are registered does not matter.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::error::{Result, SequenceError};
use crate::rule::TermRule;
use crate::sequence::{Sequence, SequenceInfo};

/// Name-keyed collection of sequences.
#[derive(Debug, Default)]
pub struct Registry {
    sequences: BTreeMap<String, Sequence>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `rule` under `name`.
    ///
    /// # Panics
    /// Panics if `name` is already registered. Duplicate names are a defect in
    /// the catalog, not something a caller can recover from.
    pub fn register(&mut self, rule: TermRule, name: &str, doc: &str, offset: usize) -> &mut Self {
        self.insert(Sequence::new(name, doc, offset, rule))
    }

    /// Add an already wrapped sequence.
    ///
    /// # Panics
    /// Panics on a duplicate name, like [`Registry::register`].
    pub fn insert(&mut self, sequence: Sequence) -> &mut Self {
        let name = sequence.name().to_string();
        assert!(
            !self.contains(&name),
            "sequence {} registered twice",
            name
        );
        self.sequences.insert(name, sequence);
        self
    }

    /// Sequence registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<&Sequence> {
        self.sequences
            .get(name)
            .ok_or_else(|| SequenceError::UnknownSequence {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sequences.contains_key(name)
    }

    /// All `(name, doc)` pairs, sorted by name.
    pub fn list_all(&self) -> Vec<(&str, &str)> {
        self.iter().map(|seq| (seq.name(), seq.doc())).collect()
    }

    /// Serialisable listing, sorted by name.
    pub fn infos(&self) -> Vec<SequenceInfo> {
        self.iter().map(Sequence::info).collect()
    }

    /// Registered sequences in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Sequence> {
        self.sequences.values()
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// One sequence picked uniformly at random, `None` if the registry is empty.
    pub fn random_choice(&self) -> Option<&Sequence> {
        self.random_choice_with(&mut rand::thread_rng())
    }

    /// Like [`Registry::random_choice`] with a caller-supplied generator.
    pub fn random_choice_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Sequence> {
        self.sequences.values().choose(rng)
    }
}

/// True for names shaped like catalog identifiers: `A` followed by six digits.
pub fn is_catalog_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() == 7 && bytes[0] == b'A' && bytes[1..].iter().all(u8::is_ascii_digit)
}

/// Cached process-wide registry
static CATALOG: OnceLock<Registry> = OnceLock::new();

/// The registry holding every built-in sequence.
pub fn catalog() -> &'static Registry {
    CATALOG.get_or_init(|| {
        let mut registry = Registry::new();
        crate::catalog::register_all(&mut registry);
        registry
    })
}
