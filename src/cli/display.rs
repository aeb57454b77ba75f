// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the facetrank CLI.
//!
//! Plain ANSI styling, dropped entirely when stdout is not a TTY or
//! `NO_COLOR` is set, so piped output stays clean.

use facetrank::{RankComponent, RankStrategy};

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

pub use colors::*;

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply multiple styles
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Right-pad plain text to a fixed width, then style it.
fn cell(styles: &[&str], text: &str, width: usize) -> String {
    styled(styles, &format!("{:<width$}", text, width = width))
}

// ═══════════════════════════════════════════════════════════════════════════
// STRATEGY TABLE
// ═══════════════════════════════════════════════════════════════════════════

/// One line per strategy: wire key, what the rank component feeds it, description.
pub fn strategy_table() -> Vec<String> {
    let key_width = RankStrategy::ALL
        .iter()
        .map(|s| s.key().len())
        .max()
        .unwrap_or(0);

    let mut lines = vec![format!(
        "{}  {}  {}",
        cell(&[BOLD], "KEY", key_width + 1),
        cell(&[BOLD], "INPUT", 9),
        styled(&[BOLD], "DESCRIPTION"),
    )];
    for strategy in RankStrategy::ALL {
        let (input, color) = match strategy {
            RankStrategy::LegacyDense => ("hit list", CYAN),
            RankStrategy::Ordinal => ("page", GRAY),
            _ => ("histogram", GREEN),
        };
        let key = if strategy == RankStrategy::default() {
            format!("{}*", strategy.key())
        } else {
            strategy.key().to_string()
        };
        lines.push(format!(
            "{}  {}  {}",
            cell(&[BOLD], &key, key_width + 1),
            cell(&[color], input, 9),
            styled(&[DIM], strategy.description()),
        ));
    }
    lines.push(styled(&[GRAY], "* default when sn.rank.strategy is absent or unknown"));
    lines
}

/// Print the strategy table to stdout.
pub fn print_strategies() {
    println!("{}\n", styled(&[DIM], RankComponent::new().description()));
    for line in strategy_table() {
        println!("{}", line);
    }
}
