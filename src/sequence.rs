// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The sequence wrapper: a cached, offset-aware, indexable view over a rule.
//!
//! Indices are absolute. A sequence with offset 1 has no term 0, and asking for
//! one is an error rather than a silently shifted answer. All bounds are taken
//! as `i64` so that negative requests can be rejected with their own error
//! instead of wrapping around.
//!
//! Generator-backed sequences keep one running cursor and an append-only cache
//! behind a per-sequence `RwLock`. Reads of already cached indices only take
//! the read side; extending the cache takes the write side, so there is a
//! single writer per sequence. Function-backed sequences have no shared cache
//! at all and call the rule directly.
//!
//! # State machine
//!
//! ```text
//! Uninitialized ──first access──▶ PartiallyCached ──cursor ends──▶ Exhausted
//!                                    ▲        │
//!                                    └────────┘ further access
//! ```

use std::ops::{Bound, RangeBounds};
use std::sync::atomic::{AtomicBool, Ordering};

use num_bigint::BigInt;
use parking_lot::RwLock;
use serde::Serialize;

use crate::contracts::{check_cache_covers, check_cache_growth, check_range_len};
use crate::error::{Result, SequenceError};
use crate::rule::{Cursor, CursorFactory, RuleKind, TermFn, TermRule};

/// Where a wrapper is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceState {
    /// No term has been requested yet.
    Uninitialized,
    /// Some terms are known; more can be produced on demand.
    PartiallyCached,
    /// A finite generator has produced its last term.
    Exhausted,
}

/// Name, description and offset of a sequence, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceInfo {
    pub name: String,
    pub doc: String,
    pub offset: usize,
}

/// Cache state of a generator-backed sequence.
struct TermCache {
    cursor: Option<Cursor>,
    known: Vec<BigInt>,
    exhausted: bool,
}

enum Backing {
    Function {
        rule: TermFn,
        touched: AtomicBool,
    },
    Generator {
        factory: CursorFactory,
        cache: RwLock<TermCache>,
    },
}

/// A named integer sequence with lazy, memoised term access.
pub struct Sequence {
    name: String,
    doc: String,
    offset: usize,
    backing: Backing,
}

impl Sequence {
    /// Wrap a rule. Nothing is computed until the first access.
    pub fn new(name: impl Into<String>, doc: impl Into<String>, offset: usize, rule: TermRule) -> Self {
        let backing = match rule {
            TermRule::Function(rule) => Backing::Function {
                rule,
                touched: AtomicBool::new(false),
            },
            TermRule::Generator(factory) => Backing::Generator {
                factory,
                cache: RwLock::new(TermCache {
                    cursor: None,
                    known: Vec::new(),
                    exhausted: false,
                }),
            },
        };

        Self {
            name: name.into(),
            doc: doc.into(),
            offset,
            backing,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// Smallest valid index.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn kind(&self) -> RuleKind {
        match self.backing {
            Backing::Function { .. } => RuleKind::Function,
            Backing::Generator { .. } => RuleKind::Generator,
        }
    }

    pub fn info(&self) -> SequenceInfo {
        SequenceInfo {
            name: self.name.clone(),
            doc: self.doc.clone(),
            offset: self.offset,
        }
    }

    /// Number of terms held in the shared cache (0 for function-backed).
    pub fn cached_len(&self) -> usize {
        match &self.backing {
            Backing::Function { .. } => 0,
            Backing::Generator { cache, .. } => cache.read().known.len(),
        }
    }

    pub fn state(&self) -> SequenceState {
        match &self.backing {
            Backing::Function { touched, .. } => {
                if touched.load(Ordering::Relaxed) {
                    SequenceState::PartiallyCached
                } else {
                    SequenceState::Uninitialized
                }
            }
            Backing::Generator { cache, .. } => {
                let cache = cache.read();
                if cache.exhausted {
                    SequenceState::Exhausted
                } else if cache.known.is_empty() && cache.cursor.is_none() {
                    SequenceState::Uninitialized
                } else {
                    SequenceState::PartiallyCached
                }
            }
        }
    }

    // ========================================================================
    // ACCESS PROTOCOL
    // ========================================================================

    /// Term at absolute index `index`.
    pub fn get(&self, index: i64) -> Result<BigInt> {
        let index = self.check_index(index)?;

        match &self.backing {
            Backing::Function { rule, touched } => {
                touched.store(true, Ordering::Relaxed);
                rule(index)
            }
            Backing::Generator { factory, cache } => {
                let position = index - self.offset;
                if let Some(term) = cache.read().known.get(position) {
                    return Ok(term.clone());
                }

                let mut cache = cache.write();
                self.extend(&mut cache, factory, index + 1)?;
                Ok(cache.known[position].clone())
            }
        }
    }

    /// Terms for indices in `[start, stop)`.
    ///
    /// `start` may be omitted only when the offset is 0. `stop` is mandatory.
    /// A range with `stop <= start` is empty.
    pub fn get_range(&self, start: Option<i64>, stop: Option<i64>) -> Result<Vec<BigInt>> {
        let start = match start {
            Some(start) => start,
            None if self.offset == 0 => 0,
            None => {
                return Err(SequenceError::AmbiguousStart {
                    name: self.name.clone(),
                    offset: self.offset,
                })
            }
        };
        let Some(stop) = stop else {
            return Err(SequenceError::UnboundedRangeUnsupported {
                name: self.name.clone(),
            });
        };

        let start = self.check_index(start)?;
        if stop < 0 {
            return Err(self.negative(stop));
        }
        let stop = stop as usize;
        if stop <= start {
            return Ok(Vec::new());
        }

        let terms = match &self.backing {
            Backing::Function { rule, touched } => {
                touched.store(true, Ordering::Relaxed);
                (start..stop).map(|n| rule(n)).collect::<Result<Vec<_>>>()?
            }
            Backing::Generator { factory, cache } => {
                let lo = start - self.offset;
                let hi = stop - self.offset;
                {
                    let cache = cache.read();
                    if cache.known.len() >= hi {
                        return Ok(cache.known[lo..hi].to_vec());
                    }
                }

                let mut cache = cache.write();
                self.extend(&mut cache, factory, stop)?;
                cache.known[lo..hi].to_vec()
            }
        };

        check_range_len(&self.name, start, stop, &terms);
        Ok(terms)
    }

    /// Range access with Rust range syntax.
    ///
    /// `seq.range(..7)` omits the start, `seq.range(3..)` is unbounded and
    /// rejected, `seq.range(1..=5)` is `[1, 6)`.
    pub fn range(&self, bounds: impl RangeBounds<i64>) -> Result<Vec<BigInt>> {
        let start = match bounds.start_bound() {
            Bound::Included(&a) => Some(a),
            Bound::Excluded(&a) => Some(self.successor(a)?),
            Bound::Unbounded => None,
        };
        let stop = match bounds.end_bound() {
            Bound::Included(&b) => Some(self.successor(b)?),
            Bound::Excluded(&b) => Some(b),
            Bound::Unbounded => None,
        };
        self.get_range(start, stop)
    }

    /// Forward cursor over the terms, starting at the offset.
    pub fn iter(&self) -> Terms<'_> {
        Terms {
            sequence: self,
            next: self.offset,
            done: false,
        }
    }

    // ========================================================================
    // INTERNALS
    // ========================================================================

    /// Validate an absolute index against sign and offset.
    fn check_index(&self, index: i64) -> Result<usize> {
        if index < 0 {
            return Err(self.negative(index));
        }
        if (index as u64) < self.offset as u64 {
            return Err(SequenceError::OutOfRangeIndex {
                name: self.name.clone(),
                index,
                offset: self.offset,
            });
        }
        Ok(index as usize)
    }

    /// `bound + 1` for inclusive and exclusive range ends.
    fn successor(&self, bound: i64) -> Result<i64> {
        bound.checked_add(1).ok_or_else(|| SequenceError::IndexOverflow {
            name: self.name.clone(),
            bound,
        })
    }

    fn negative(&self, index: i64) -> SequenceError {
        SequenceError::NegativeIndex {
            name: self.name.clone(),
            index,
        }
    }

    /// Advance the cursor until every index below `stop` is cached.
    ///
    /// Caller holds the write lock, so this is the only writer. Terms already
    /// in the cache are never recomputed.
    fn extend(&self, cache: &mut TermCache, factory: &CursorFactory, stop: usize) -> Result<()> {
        let needed = stop - self.offset;
        let before = cache.known.len();

        while cache.known.len() < needed {
            if cache.exhausted {
                return Err(SequenceError::ExhaustedSequence {
                    name: self.name.clone(),
                    index: stop - 1,
                    known: cache.known.len(),
                });
            }

            let cursor = cache.cursor.get_or_insert_with(|| factory());
            match cursor.next() {
                Some(term) => cache.known.push(term),
                None => {
                    cache.exhausted = true;
                    cache.cursor = None;
                }
            }
        }

        check_cache_growth(&self.name, before, cache.known.len());
        check_cache_covers(&self.name, cache.known.len(), needed);
        Ok(())
    }
}

impl std::fmt::Debug for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequence")
            .field("name", &self.name)
            .field("offset", &self.offset)
            .field("kind", &self.kind())
            .field("state", &self.state())
            .finish()
    }
}

/// Lazy forward iterator over a sequence's terms.
///
/// Reads go through the wrapper, so terms produced here land in (or come from)
/// the same cache as `get`. Ends when a finite sequence runs out; any other
/// error is yielded once and the iterator then fuses.
pub struct Terms<'a> {
    sequence: &'a Sequence,
    next: usize,
    done: bool,
}

impl Iterator for Terms<'_> {
    type Item = Result<BigInt>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.sequence.get(self.next as i64) {
            Ok(term) => {
                self.next += 1;
                Some(Ok(term))
            }
            Err(SequenceError::ExhaustedSequence { .. }) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Terms<'_> {}
