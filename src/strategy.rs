// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The six ranking conventions and their wire keys.
//!
//! The set is closed. Adding a strategy means adding a variant here and an arm
//! in the engine's dispatcher; there is no runtime registration.
//!
//! | Variant       | Wire key      | On scores [100, 90, 90, 80] |
//! |---------------|---------------|-----------------------------|
//! | `Standard`    | `standard`    | 1, 2, 2, 4                  |
//! | `Modified`    | `modified`    | 1, 3, 3, 4                  |
//! | `Dense`       | `dense`       | 1, 2, 2, 3                  |
//! | `Ordinal`     | `ordinal`     | 1, 2, 3, 4                  |
//! | `Fractional`  | `fractional`  | 1, 2.5, 2.5, 4              |
//! | `LegacyDense` | `legacyDense` | 1, 2, 2, 3                  |
//!
//! The wire keys are the only external identifiers and lookup is case-sensitive.

use crate::error::{RankError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A ranking convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RankStrategy {
    /// Standard competition ranking ("1224").
    Standard,
    /// Modified competition ranking ("1334").
    Modified,
    /// Dense ranking ("1223").
    Dense,
    /// Ordinal ranking ("1234"). Hosts fall back to it.
    #[default]
    Ordinal,
    /// Fractional ranking ("1 2.5 2.5 4").
    Fractional,
    /// Dense ranking computed by scanning the raw hit list.
    ///
    /// Superseded by [`RankStrategy::Dense`], which only needs the histogram.
    /// Still fully supported for parity with earlier behavior.
    LegacyDense,
}

impl RankStrategy {
    /// Every strategy, in registry order.
    pub const ALL: [RankStrategy; 6] = [
        RankStrategy::Standard,
        RankStrategy::Modified,
        RankStrategy::Dense,
        RankStrategy::Ordinal,
        RankStrategy::Fractional,
        RankStrategy::LegacyDense,
    ];

    /// Look a strategy up by its exact wire key.
    pub fn by_key(key: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.key() == key)
            .ok_or_else(|| RankError::UnknownStrategy {
                key: key.to_string(),
            })
    }

    /// Wire key. Part of the external contract; never change these.
    pub const fn key(self) -> &'static str {
        match self {
            RankStrategy::Standard => "standard",
            RankStrategy::Modified => "modified",
            RankStrategy::Dense => "dense",
            RankStrategy::Ordinal => "ordinal",
            RankStrategy::Fractional => "fractional",
            RankStrategy::LegacyDense => "legacyDense",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            RankStrategy::Standard => "Standard Competition Ranking [1224]",
            RankStrategy::Modified => "Modified Competition Ranking [1334]",
            RankStrategy::Dense => "Dense Ranking [1223]",
            RankStrategy::Ordinal => "Ordinal Ranking [1234]",
            RankStrategy::Fractional => "Fractional Ranking [1 2.5 2.5 4]",
            RankStrategy::LegacyDense => {
                "Legacy Dense Ranking [1223], computed from the hit list; use dense instead"
            }
        }
    }

    /// Whether [`compute_facet_based_rank`](crate::compute_facet_based_rank) accepts it.
    pub const fn is_facet_based(self) -> bool {
        !matches!(self, RankStrategy::LegacyDense)
    }
}

impl FromStr for RankStrategy {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self> {
        RankStrategy::by_key(s)
    }
}

impl fmt::Display for RankStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
