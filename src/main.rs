// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::process;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use oeis::{catalog, BigInt, Sequence, SequenceError};

mod cli;
use cli::display::{self, Theme};
use cli::render::{self, Scatter, PLOT_HEIGHT, PLOT_WIDTH};
use cli::{Cli, Format};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        display::error(&format!("{:#}", err));
        if let Some(hint) = err.downcast_ref::<SequenceError>().and_then(offset_hint) {
            display::hint(&hint);
        }
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.list {
        return list(cli.format);
    }
    if cli.random {
        return random(cli);
    }

    let name = cli
        .sequence
        .as_deref()
        .ok_or_else(|| anyhow!("no sequence given (see --help)"))?;
    let sequence = catalog().lookup(name)?;

    let (start, stop) = cli.window();
    let started = Instant::now();
    let values = sequence.get_range(start, stop)?;
    let elapsed = started.elapsed();

    if cli.verbose {
        report(sequence, start, stop, values.len(), elapsed.as_secs_f64() * 1000.0);
    }

    // A successful request with an omitted start began at index 0
    let first = start.unwrap_or(0) as usize;
    let indices: Vec<usize> = (first..first + values.len()).collect();
    emit(cli, sequence, first, &indices, &values)
}

fn emit(cli: &Cli, sequence: &Sequence, first: usize, indices: &[usize], values: &[BigInt]) -> Result<()> {
    let forced = cli.dark_plot.then_some(Theme::Dark);

    if let Some(path) = &cli.file {
        let theme = forced.unwrap_or_else(display::theme);
        render::export_svg(path, sequence.name(), indices, values, theme)
            .with_context(|| format!("failed to write {}", path.display()))?;
        if cli.verbose {
            display::status("Exported", &path.display().to_string());
        }
    }

    if cli.plot || cli.dark_plot {
        let scatter = Scatter::new(indices, values, PLOT_WIDTH, PLOT_HEIGHT);
        render::print_plot(sequence.name(), &scatter, forced);
        return Ok(());
    }
    if cli.wants_plot() {
        return Ok(());
    }

    match cli.format {
        Format::Text => println!("{}", render::text(values)),
        Format::Json => println!("{}", render::json(&sequence.info(), first, values)?),
    }
    Ok(())
}

fn list(format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for (name, doc) in catalog().list_all() {
                println!("{} {}", display::themed(display::CYAN, &[], name), doc);
            }
        }
        Format::Json => println!("{}", render::listing_json(&catalog().infos())?),
    }
    Ok(())
}

/// A random sequence from its offset. Finite sequences print what they have.
fn random(cli: &Cli) -> Result<()> {
    let sequence = catalog()
        .random_choice()
        .ok_or_else(|| anyhow!("the catalog is empty"))?;

    let started = Instant::now();
    let values = sequence
        .iter()
        .take(cli.limit as usize)
        .collect::<oeis::Result<Vec<BigInt>>>()?;
    let elapsed = started.elapsed();

    let offset = sequence.offset();
    if cli.verbose {
        let start = Some(offset as i64);
        let stop = Some((offset + values.len()) as i64);
        report(sequence, start, stop, values.len(), elapsed.as_secs_f64() * 1000.0);
    }

    if cli.format == Format::Text && !cli.wants_plot() {
        println!(
            "{} {} {}",
            display::themed(display::CYAN, &[display::BOLD], sequence.name()),
            display::kind_badge(sequence.kind()),
            sequence.doc()
        );
    }
    let indices: Vec<usize> = (offset..offset + values.len()).collect();
    emit(cli, sequence, offset, &indices, &values)
}

fn report(sequence: &Sequence, start: Option<i64>, stop: Option<i64>, count: usize, ms: f64) {
    let bound = |b: Option<i64>| b.map_or_else(|| "_".to_string(), |b| b.to_string());
    display::status(
        "Sequence",
        &format!("{} (offset {})", sequence.name(), sequence.offset()),
    );
    display::status(
        "Range",
        &format!("[{}, {}) yielded {} terms", bound(start), bound(stop), count),
    );
    display::status(
        "Cache",
        &format!(
            "{}, {} terms cached",
            display::state_label(sequence.state()),
            sequence.cached_len()
        ),
    );
    display::status("Elapsed", &display::timing_ms(ms));
}

/// Offset-related failures tell the user where the sequence starts.
fn offset_hint(err: &SequenceError) -> Option<String> {
    match err {
        SequenceError::OutOfRangeIndex { offset, .. } | SequenceError::AmbiguousStart { offset, .. } => {
            Some(format!("this sequence starts at index {0}; try --start {0}", offset))
        }
        SequenceError::NegativeIndex { .. } => Some("indices are never negative".to_string()),
        _ => None,
    }
}
