// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Renderers for a slice of a sequence.
//!
//! Everything here consumes `(indices, values)` and produces text: a bracketed
//! list, a JSON document, a terminal scatter plot, or an SVG document. Plot
//! coordinates are `f64`; the values themselves are never rounded in the text
//! and JSON outputs.

use std::fmt::{self, Write as _};
use std::fs;
use std::io;
use std::path::Path;

use num_traits::ToPrimitive;
use oeis::{BigInt, SequenceInfo};
use serde::Serialize;
use serde_json::Value;

use super::display::{self, hex, palette, Theme, RESET};

/// Plot area in terminal cells
pub const PLOT_WIDTH: usize = 60;
pub const PLOT_HEIGHT: usize = 16;

/// SVG canvas in pixels
const SVG_WIDTH: f64 = 640.0;
const SVG_HEIGHT: f64 = 400.0;
const SVG_MARGIN: f64 = 48.0;

const POINT: char = '●';

// ═══════════════════════════════════════════════════════════════════════════
// TEXT AND JSON
// ═══════════════════════════════════════════════════════════════════════════

/// `[a, b, c]`
pub fn text(values: &[BigInt]) -> String {
    let joined: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", joined.join(", "))
}

#[derive(Serialize)]
struct Slice<'a> {
    name: &'a str,
    offset: usize,
    start: usize,
    values: Vec<Value>,
}

/// Terms that fit in an `i64` become JSON numbers, larger ones decimal strings.
fn json_value(value: &BigInt) -> Value {
    value
        .to_i64()
        .map_or_else(|| Value::String(value.to_string()), Value::from)
}

pub fn json(info: &SequenceInfo, start: usize, values: &[BigInt]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Slice {
        name: &info.name,
        offset: info.offset,
        start,
        values: values.iter().map(json_value).collect(),
    })
}

pub fn listing_json(infos: &[SequenceInfo]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(infos)
}

// ═══════════════════════════════════════════════════════════════════════════
// SCATTER GEOMETRY
// ═══════════════════════════════════════════════════════════════════════════

/// Points mapped onto a `width x height` grid, row 0 at the top.
#[derive(Debug, Clone)]
pub struct Scatter {
    cells: Vec<Vec<bool>>,
    pub y_min: f64,
    pub y_max: f64,
    pub x_min: usize,
    pub x_max: usize,
}

/// Lossy, for plotting only; terms beyond `f64` clamp to its range.
fn coordinate(value: &BigInt) -> f64 {
    value
        .to_f64()
        .filter(|v| v.is_finite())
        .unwrap_or(if value.sign() == num_bigint::Sign::Minus {
            f64::MIN
        } else {
            f64::MAX
        })
}

/// Position of `value` in `[min, max]` scaled onto `0..=steps`.
fn scale(value: f64, min: f64, max: f64, steps: usize) -> usize {
    let span = max - min;
    if span <= 0.0 || !span.is_finite() {
        return 0;
    }
    (((value - min) / span) * steps as f64).round() as usize
}

impl Scatter {
    pub fn new(indices: &[usize], values: &[BigInt], width: usize, height: usize) -> Self {
        let ys: Vec<f64> = values.iter().map(coordinate).collect();
        let y_min = ys.iter().copied().fold(f64::INFINITY, f64::min);
        let y_max = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let x_min = indices.iter().copied().min().unwrap_or(0);
        let x_max = indices.iter().copied().max().unwrap_or(0);

        let mut cells = vec![vec![false; width]; height];
        if width > 0 && height > 0 {
            for (&x, &y) in indices.iter().zip(&ys) {
                let column = scale(x as f64, x_min as f64, x_max as f64, width - 1);
                let row = height - 1 - scale(y, y_min, y_max, height - 1);
                cells[row][column] = true;
            }
        }

        Self {
            cells,
            y_min,
            y_max,
            x_min,
            x_max,
        }
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn is_set(&self, row: usize, column: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(column))
            .copied()
            .unwrap_or(false)
    }

    /// Rows as plain text, points drawn with `●`.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|cells| {
                cells
                    .iter()
                    .map(|&set| if set { POINT } else { ' ' })
                    .collect()
            })
            .collect()
    }
}

/// Axis label that stays within nine columns.
fn axis_label(value: f64) -> String {
    if value.abs() < 1e9 {
        format!("{:.0}", value)
    } else {
        format!("{:.2e}", value)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TERMINAL PLOT
// ═══════════════════════════════════════════════════════════════════════════

/// Print a boxed scatter plot. `forced` picks the palette regardless of the
/// detected terminal theme and paints the plot background with it.
pub fn print_plot(name: &str, scatter: &Scatter, forced: Option<Theme>) {
    let colored = display::use_colors();
    let theme = forced.unwrap_or_else(display::theme);
    let colors = palette(theme);

    let (point, axis, background, reset) = if colored {
        let background = forced
            .map(|_| {
                let (r, g, b) = colors.BACKGROUND;
                format!("\x1b[48;2;{};{};{}m", r, g, b)
            })
            .unwrap_or_default();
        (
            display::fg(colors.YELLOW),
            display::fg(colors.GRAY),
            background,
            RESET,
        )
    } else {
        (String::new(), String::new(), String::new(), "")
    };

    display::section_top(name);
    let last = scatter.height().saturating_sub(1);
    for (index, line) in scatter.rows().iter().enumerate() {
        let label = match index {
            0 => axis_label(scatter.y_max),
            i if i == last => axis_label(scatter.y_min),
            _ => String::new(),
        };
        let cells = line.replace(POINT, &format!("{}{}{}{}", point, POINT, reset, background));
        display::row(&format!(
            "{:>9} {}┤{}{}{}{}",
            label, axis, reset, background, cells, reset
        ));
    }
    display::row(&format!(
        "{:>9} {}└{}{}",
        "",
        axis,
        "─".repeat(PLOT_WIDTH),
        reset
    ));
    let low = scatter.x_min.to_string();
    let high = scatter.x_max.to_string();
    let gap = PLOT_WIDTH.saturating_sub(low.len() + high.len());
    display::row(&format!("{:>11}{}{}{}", "", low, " ".repeat(gap), high));
    display::section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// SVG EXPORT
// ═══════════════════════════════════════════════════════════════════════════

/// Write a standalone SVG scatter plot of the slice to `out`.
pub fn svg(
    out: &mut impl fmt::Write,
    name: &str,
    indices: &[usize],
    values: &[BigInt],
    theme: Theme,
) -> fmt::Result {
    let colors = palette(theme);
    let plot_w = SVG_WIDTH - 2.0 * SVG_MARGIN;
    let plot_h = SVG_HEIGHT - 2.0 * SVG_MARGIN;
    // Pixel grid; one cell per pixel keeps the scaling shared with the terminal plot
    let scatter = Scatter::new(indices, values, plot_w as usize + 1, plot_h as usize + 1);

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = SVG_WIDTH,
        h = SVG_HEIGHT
    )?;
    writeln!(
        out,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        hex(colors.BACKGROUND)
    )?;
    writeln!(
        out,
        r#"  <text x="{}" y="{}" fill="{}" font-family="monospace" font-size="16">{}</text>"#,
        SVG_MARGIN,
        SVG_MARGIN / 2.0,
        hex(colors.WHITE),
        escape(name)
    )?;
    writeln!(
        out,
        r#"  <polyline points="{x0},{y0} {x0},{y1} {x1},{y1}" fill="none" stroke="{c}"/>"#,
        x0 = SVG_MARGIN,
        y0 = SVG_MARGIN,
        x1 = SVG_WIDTH - SVG_MARGIN,
        y1 = SVG_HEIGHT - SVG_MARGIN,
        c = hex(colors.GRAY)
    )?;
    for (label, y) in [
        (axis_label(scatter.y_max), SVG_MARGIN),
        (axis_label(scatter.y_min), SVG_HEIGHT - SVG_MARGIN),
    ] {
        writeln!(
            out,
            r#"  <text x="{}" y="{}" fill="{}" font-family="monospace" font-size="10" text-anchor="end">{}</text>"#,
            SVG_MARGIN - 4.0,
            y,
            hex(colors.GRAY),
            label
        )?;
    }
    for row in 0..scatter.height() {
        for column in 0..=plot_w as usize {
            if scatter.is_set(row, column) {
                writeln!(
                    out,
                    r#"  <circle cx="{}" cy="{}" r="3" fill="{}"/>"#,
                    SVG_MARGIN + column as f64,
                    SVG_MARGIN + row as f64,
                    hex(colors.RED)
                )?;
            }
        }
    }
    writeln!(out, "</svg>")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn export_svg(
    path: &Path,
    name: &str,
    indices: &[usize],
    values: &[BigInt],
    theme: Theme,
) -> io::Result<()> {
    let mut doc = String::new();
    svg(&mut doc, name, indices, values, theme).map_err(io::Error::other)?;
    fs::write(path, doc)
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
