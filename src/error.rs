// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Failures the rank engine can report.
//!
//! Empty input is not one of them: every entry point returns an empty map.
//! Nothing here is fatal beyond the single call that produced it; the host
//! decides what the user sees.

use crate::strategy::RankStrategy;

/// Everything that can go wrong while computing ranks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankError {
    /// The wire key does not name a strategy. Lookup is case-sensitive.
    #[error("unknown rank strategy '{key}' (expected one of: standard, modified, dense, ordinal, fractional, legacyDense)")]
    UnknownStrategy { key: String },

    /// A histogram entry claims an empty tie-group.
    #[error("histogram entry '{key}' has count {count}; tie-group counts must be positive")]
    InvalidCount { key: String, count: u64 },

    /// A legacy dense score is not a base-10 integer.
    #[error("score '{score}' for '{identity}' is not an integer")]
    MalformedScore { identity: String, score: String },

    /// The strategy ranks hit lists, not histograms.
    #[error("strategy '{strategy}' cannot be computed from a facet histogram")]
    NotFacetBased { strategy: RankStrategy },
}

pub type Result<T> = std::result::Result<T, RankError>;
