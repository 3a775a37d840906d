// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the oeis CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `OEIS_THEME` first (for explicit control), then `COLORFGBG` (set by some
//! terminals), then defaults to dark. `--dark-plot` skips detection and asks
//! for the dark palette directly.
//!
//! Respects `NO_COLOR` and non-TTY detection for pipelines: piping
//! `oeis A000045 | ...` gets plain text.
//!
//! # Theme detection order
//!
//! 1. `OEIS_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use oeis::{RuleKind, SequenceState};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via OEIS_THEME
    if let Some(theme) = std::env::var("OEIS_THEME").ok().as_deref().and_then(parse_theme) {
        return theme;
    }

    // 2. COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                // Colors 0-6 are typically dark, 7+ are light
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    // 3. Default to dark (most developer terminals)
    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════
//
// OneDark: https://github.com/joshdick/onedark.vim
// One Light: https://github.com/sonph/onehalf

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);     // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);   // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);  // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);     // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);     // #56b6c2
    pub const WHITE: (u8, u8, u8) = (171, 178, 191);   // #abb2bf
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);      // #5c6370
    pub const BACKGROUND: (u8, u8, u8) = (40, 44, 52); // #282c34
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);         // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);       // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);      // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);       // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);    // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);        // #0184bc
    pub const WHITE: (u8, u8, u8) = (56, 58, 66);        // #383a42 (foreground)
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);      // #a0a1a7
    pub const BACKGROUND: (u8, u8, u8) = (250, 250, 250); // #fafafa
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = palette(theme()).$name;
            rgb(r, g, b)
        }
    };
}

/// Colors of one theme, for renderers that pick a theme explicitly.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub RED: (u8, u8, u8),
    pub GREEN: (u8, u8, u8),
    pub YELLOW: (u8, u8, u8),
    pub BLUE: (u8, u8, u8),
    pub MAGENTA: (u8, u8, u8),
    pub CYAN: (u8, u8, u8),
    pub WHITE: (u8, u8, u8),
    pub GRAY: (u8, u8, u8),
    pub BACKGROUND: (u8, u8, u8),
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            RED: onedark::RED,
            GREEN: onedark::GREEN,
            YELLOW: onedark::YELLOW,
            BLUE: onedark::BLUE,
            MAGENTA: onedark::MAGENTA,
            CYAN: onedark::CYAN,
            WHITE: onedark::WHITE,
            GRAY: onedark::GRAY,
            BACKGROUND: onedark::BACKGROUND,
        },
        Theme::Light => Palette {
            RED: onelight::RED,
            GREEN: onelight::GREEN,
            YELLOW: onelight::YELLOW,
            BLUE: onelight::BLUE,
            MAGENTA: onelight::MAGENTA,
            CYAN: onelight::CYAN,
            WHITE: onelight::WHITE,
            GRAY: onelight::GRAY,
            BACKGROUND: onelight::BACKGROUND,
        },
    }
}

/// Foreground escape for an RGB triple
pub fn fg((r, g, b): (u8, u8, u8)) -> String {
    rgb(r, g, b)
}

/// `#rrggbb` for an RGB triple
pub fn hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used on stdout (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Same check for stderr, where diagnostics go
pub fn use_colors_stderr() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stderr)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = border_color();
    let len = visible_len(content);
    let pad = BOX_WIDTH.saturating_sub(len);
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset(),
        content,
        " ".repeat(pad),
        border,
        reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = border_color();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border_color(), "─".repeat(BOX_WIDTH), reset());
}

fn border_color() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// DIAGNOSTICS
// ═══════════════════════════════════════════════════════════════════════════

/// Print an error line to stderr
pub fn error(message: &str) {
    if use_colors_stderr() {
        eprintln!("{}{}error:{} {}", BOLD, RED(), RESET, message);
    } else {
        eprintln!("error: {}", message);
    }
}

/// Print a hint line to stderr
pub fn hint(message: &str) {
    if use_colors_stderr() {
        eprintln!("{}{}hint:{} {}", DIM, GRAY(), RESET, message);
    } else {
        eprintln!("hint: {}", message);
    }
}

/// Print a status line to stderr (only with --verbose)
pub fn status(label: &str, message: &str) {
    if use_colors_stderr() {
        eprintln!("{}{}{:>10}{} {}", BOLD, GREEN(), label, RESET, message);
    } else {
        eprintln!("{:>10} {}", label, message);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded rule kind badge
pub fn kind_badge(kind: RuleKind) -> String {
    let (label, color): (&str, fn() -> String) = match kind {
        RuleKind::Function => ("FN", BLUE),
        RuleKind::Generator => ("GEN", MAGENTA),
    };
    if !use_colors() {
        return format!("[{}]", label);
    }
    format!("{}[{}]{}", color(), label, RESET)
}

/// Cache state label
pub fn state_label(state: SequenceState) -> &'static str {
    match state {
        SequenceState::Uninitialized => "uninitialized",
        SequenceState::PartiallyCached => "partially cached",
        SequenceState::Exhausted => "exhausted",
    }
}

/// Color-coded timing value in ms
pub fn timing_ms(value: f64) -> String {
    if !use_colors_stderr() {
        return format!("{:.3} ms", value);
    }
    let color = if value < 5.0 {
        GREEN()
    } else if value < 100.0 {
        YELLOW()
    } else {
        RED()
    };
    format!("{}{:.3} ms{}", color, value, RESET)
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
