// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values that flow through the rank engine.
//!
//! Everything here is transient: a caller builds a list of pairs, hands it to
//! the engine, and gets a [`RankMap`] back. Nothing is retained between calls.
//!
//! # Shapes
//!
//! | Alias            | Key                 | Value                      |
//! |------------------|---------------------|----------------------------|
//! | `HistogramEntry` | group key (value)   | documents in the tie-group |
//! | `HitEntry`       | document identity   | score, as text             |
//! | `RankMap`        | group key / identity| assigned [`Rank`]          |
//!
//! # Invariants
//!
//! - **Rank**: stored as twice its value, so `n` and `n + 0.5` are both exact.
//!   Fractional ranking is the only producer of half values.
//! - **HistogramEntry**: count is positive. The engine rejects zero with
//!   [`RankError::InvalidCount`](crate::RankError::InvalidCount).

use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// PAIR
// =============================================================================

/// Immutable key/value pair. Equality is structural, no ordering is implied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair<K, V> {
    key: K,
    value: V,
}

impl<K, V> Pair<K, V> {
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Pair { key, value }
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Pair { key, value }
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Pair<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.key, self.value)
    }
}

/// One tie-group of a facet histogram: `(group key, documents in group)`.
pub type HistogramEntry = Pair<String, u64>;

/// One row of an ordered hit list: `(document identity, score text)`.
pub type HitEntry = Pair<String, String>;

// =============================================================================
// RANK
// =============================================================================

/// A rank number that is either a whole number or a whole number plus one half.
///
/// Stored as twice the value in a `u64`, which keeps half ranks exact and leaves
/// room for far more than 2³¹ documents. Arithmetic saturates instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Rank(u64);

impl Rank {
    /// The first rank handed out by every strategy.
    pub const FIRST: Rank = Rank(2);

    /// A whole-number rank.
    #[inline]
    pub const fn whole(n: u64) -> Self {
        Rank(n.saturating_mul(2))
    }

    /// Arithmetic mean of two ranks.
    ///
    /// Exact whenever the two doubled values sum to an even number, which is
    /// always the case for two whole ranks. Never overflows.
    #[inline]
    pub const fn midpoint(a: Rank, b: Rank) -> Self {
        Rank((a.0 & b.0) + ((a.0 ^ b.0) >> 1))
    }

    /// `Some(n)` if this rank is a whole number.
    #[inline]
    pub const fn as_whole(self) -> Option<u64> {
        if self.0 % 2 == 0 {
            Some(self.0 / 2)
        } else {
            None
        }
    }

    #[inline]
    pub const fn is_whole(self) -> bool {
        self.0 % 2 == 0
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 2.0
    }

    /// Advance a whole rank by `n` positions.
    #[inline]
    pub const fn advance(self, n: u64) -> Self {
        Rank(self.0.saturating_add(n.saturating_mul(2)))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_whole() {
            Some(n) => write!(f, "{}", n),
            None => write!(f, "{}.5", self.0 / 2),
        }
    }
}

impl Serialize for Rank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_whole() {
            Some(n) => serializer.serialize_u64(n),
            None => serializer.serialize_f64(self.as_f64()),
        }
    }
}

/// Group key or document identity → assigned rank.
pub type RankMap = HashMap<String, Rank>;
