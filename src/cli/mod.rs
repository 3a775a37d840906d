// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the oeis command-line interface.
//!
//! One positional argument names the sequence; flags pick the slice and the
//! output. `--list` and `--random` stand in for the positional argument, so
//! clap rejects a bare `oeis` with a usage message pointing at `--help`.

pub mod display;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "oeis",
    about = "Print a sweet sequence from the On-Line Encyclopedia of Integer Sequences",
    version
)]
pub struct Cli {
    /// Sequence to print, e.g. A181391
    #[arg(required_unless_present_any = ["list", "random"])]
    pub sequence: Option<String>,

    /// First index to print (defaults to 0, which only offset-0 sequences accept)
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Index to stop before
    #[arg(long, allow_negative_numbers = true, conflicts_with = "limit")]
    pub stop: Option<i64>,

    /// Number of terms to print when --stop is not given
    #[arg(long, default_value_t = 20)]
    pub limit: u32,

    /// Draw a scatter plot instead of printing values
    #[arg(long)]
    pub plot: bool,

    /// Like --plot, forcing the dark palette
    #[arg(long, conflicts_with = "plot")]
    pub dark_plot: bool,

    /// Export the plot as SVG to this path
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Output format for values and listings
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// List every implemented sequence
    #[arg(long, conflicts_with_all = ["sequence", "random"])]
    pub list: bool,

    /// Print a random implemented sequence
    #[arg(long, conflicts_with = "sequence")]
    pub random: bool,

    /// Report cache state and timing on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl Cli {
    /// The `(start, stop)` pair handed to `get_range`.
    ///
    /// An omitted start stays omitted so the sequence itself decides whether
    /// that is ambiguous. The stop falls back to `start + limit`.
    pub fn window(&self) -> (Option<i64>, Option<i64>) {
        let stop = self
            .stop
            .unwrap_or_else(|| self.start.unwrap_or(0).saturating_add(i64::from(self.limit)));
        (self.start, Some(stop))
    }

    pub fn wants_plot(&self) -> bool {
        self.plot || self.dark_plot || self.file.is_some()
    }
}
