// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised by the access protocol and the registry.
//!
//! Every variant is a local condition the caller can recover from. None of them
//! is retried or swallowed inside the library; the CLI prints them and exits
//! non-zero. The one truly fatal condition, two rules registered under the same
//! name, is a panic in [`Registry::register`](crate::Registry::register) because
//! it can only happen when the catalog itself is wrong.

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SequenceError>;

/// Error type for sequence lookup and term access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// No sequence is registered under this name.
    UnknownSequence { name: String },
    /// Index is non-negative but below the sequence's offset.
    OutOfRangeIndex {
        name: String,
        index: i64,
        offset: usize,
    },
    /// Negative index or negative slice bound.
    NegativeIndex { name: String, index: i64 },
    /// Range start omitted on a sequence whose offset is not 0.
    AmbiguousStart { name: String, offset: usize },
    /// Range stop omitted; the library never materialises an infinite list.
    UnboundedRangeUnsupported { name: String },
    /// A range bound moves past `i64::MAX` once made half-open.
    IndexOverflow { name: String, bound: i64 },
    /// A finite generator ran out before reaching `index`.
    ExhaustedSequence {
        name: String,
        index: usize,
        known: usize,
    },
}

impl SequenceError {
    /// Name of the sequence the error refers to.
    pub fn sequence(&self) -> &str {
        match self {
            SequenceError::UnknownSequence { name }
            | SequenceError::OutOfRangeIndex { name, .. }
            | SequenceError::NegativeIndex { name, .. }
            | SequenceError::AmbiguousStart { name, .. }
            | SequenceError::UnboundedRangeUnsupported { name }
            | SequenceError::IndexOverflow { name, .. }
            | SequenceError::ExhaustedSequence { name, .. } => name,
        }
    }

    /// True for the conditions caused by the requested index rather than by
    /// the sequence itself.
    pub fn is_offset_error(&self) -> bool {
        matches!(
            self,
            SequenceError::OutOfRangeIndex { .. }
                | SequenceError::NegativeIndex { .. }
                | SequenceError::AmbiguousStart { .. }
        )
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::UnknownSequence { name } => {
                write!(f, "Unimplemented sequence {} (see --list)", name)
            }
            SequenceError::OutOfRangeIndex {
                name,
                index,
                offset,
            } => {
                write!(
                    f,
                    "{} starts at offset {}, index {} is out of range",
                    name, offset, index
                )
            }
            SequenceError::NegativeIndex { name, index } => {
                write!(f, "{} cannot be indexed with negative index {}", name, index)
            }
            SequenceError::AmbiguousStart { name, offset } => {
                write!(
                    f,
                    "{} starts at offset {}, give an explicit start (e.g. --start {})",
                    name, offset, offset
                )
            }
            SequenceError::UnboundedRangeUnsupported { name } => {
                write!(f, "{} is infinite, give an explicit stop", name)
            }
            SequenceError::IndexOverflow { name, bound } => {
                write!(f, "{} cannot address the index after {}", name, bound)
            }
            SequenceError::ExhaustedSequence { name, index, known } => {
                write!(
                    f,
                    "{} has only {} known terms, index {} is not available",
                    name, known, index
                )
            }
        }
    }
}

impl std::error::Error for SequenceError {}
