//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::types::{HistogramEntry, HitEntry, Pair};

/// Build a histogram from `(group key, count)` literals.
pub fn pairs(entries: &[(&str, u64)]) -> Vec<HistogramEntry> {
    entries
        .iter()
        .map(|(key, count)| Pair::new(key.to_string(), *count))
        .collect()
}

/// Build an ordered hit list from `(identity, score)` literals.
pub fn hits(entries: &[(&str, &str)]) -> Vec<HitEntry> {
    entries
        .iter()
        .map(|(identity, score)| Pair::new(identity.to_string(), score.to_string()))
        .collect()
}

/// One row of the reference data set: a tie-group and its expected ranks.
#[derive(Debug, Clone, Copy)]
pub struct RankRow {
    pub key: &'static str,
    pub count: u64,
    pub dense: u64,
    pub standard: u64,
    pub modified: u64,
}

impl RankRow {
    /// Mean of the standard and modified ranks.
    pub fn fractional(&self) -> f64 {
        (self.standard + self.modified) as f64 / 2.0
    }
}

const fn row(key: &'static str, count: u64, dense: u64, standard: u64, modified: u64) -> RankRow {
    RankRow {
        key,
        count,
        dense,
        standard,
        modified,
    }
}

/// Reference histogram of ten tie-groups with every strategy's expected rank.
pub const RANK_DATA_SET: [RankRow; 10] = [
    row("1", 10, 1, 1, 10),
    row("2", 20, 2, 11, 30),
    row("7", 10, 3, 31, 40),
    row("14", 1, 4, 41, 41),
    row("15", 40, 5, 42, 81),
    row("16", 5, 6, 82, 86),
    row("25", 5, 7, 87, 91),
    row("29", 8, 8, 92, 99),
    row("31", 10, 9, 100, 109),
    row("32", 60, 10, 110, 169),
];

/// The reference data set as a histogram, in rank order.
pub fn rank_data_set() -> Vec<HistogramEntry> {
    RANK_DATA_SET
        .iter()
        .map(|row| Pair::new(row.key.to_string(), row.count))
        .collect()
}
