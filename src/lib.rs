// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lazy, cached integer sequences from the On-Line Encyclopedia of Integer
//! Sequences.
//!
//! Every sequence is a [`Sequence`]: a name, a description, an offset (its
//! smallest valid index) and a [`TermRule`] that computes terms. Sequences are
//! looked up by catalog name in a [`Registry`]; [`catalog()`] is the one holding
//! every built-in sequence.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   rule.rs   │────▶│ sequence.rs  │────▶│ registry.rs  │
//! │ (Function | │     │ (get, ranges,│     │ (lookup, list│
//! │  Generator) │     │  term cache) │     │  random pick)│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        ▲                   │                    │
//!        │                   ▼                    ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   util/     │     │ contracts.rs │     │  catalog/    │
//! │ (primes,    │     │ (cache       │     │ (built-in    │
//! │  digits)    │     │  invariants) │     │  sequences)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use num_bigint::BigInt;
//! use oeis::catalog;
//!
//! let squares = catalog().lookup("A000290").unwrap();
//! let head = squares.get_range(Some(0), Some(7)).unwrap();
//! assert_eq!(head, [0, 1, 4, 9, 16, 25, 36].map(BigInt::from));
//!
//! let primes = catalog().lookup("A000040").unwrap();
//! assert_eq!(primes.get(1).unwrap(), BigInt::from(2));
//! assert!(primes.get(0).is_err());
//! ```

pub mod catalog;
pub mod contracts;
mod error;
mod registry;
mod rule;
mod sequence;
pub mod testing;
pub mod util;

pub use error::{Result, SequenceError};
pub use registry::{catalog, is_catalog_name, Registry};
pub use rule::{Cursor, CursorFactory, RuleKind, TermFn, TermRule};
pub use sequence::{Sequence, SequenceInfo, SequenceState, Terms};

pub use num_bigint::BigInt;
