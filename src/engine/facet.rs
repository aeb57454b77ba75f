// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking from a facet histogram.
//!
//! Each input entry is one tie-group `(group key, count)`, already in rank
//! order. The output maps each group key to the rank every document in that
//! group shares. Counts never need to be expanded into documents.
//!
//! ```text
//! groups:      A(1)  B(2)  C(1)
//! dense:        1     2     3
//! standard:     1     2     4      next = rank + count
//! modified:     1     3     4      rank = previous + count
//! fractional:   1    2.5    4      (standard + modified) / 2
//! ```
//!
//! A group key that appears twice is written twice; the later entry wins.

use crate::contracts;
use crate::error::{RankError, Result};
use crate::strategy::RankStrategy;
use crate::types::{Pair, Rank, RankMap};

/// Rank a histogram with one of the facet-capable strategies.
///
/// [`RankStrategy::Ordinal`] goes through the dense arm: every *group* gets a
/// distinct rank, not every document. Callers that want per-document ordinals
/// must use [`compute_ordinal_based_rank`](crate::compute_ordinal_based_rank)
/// with the expanded hit list.
///
/// [`RankStrategy::LegacyDense`] needs the hit list and is rejected here.
pub fn compute_facet_based_rank<K: AsRef<str>>(
    pairs: &[Pair<K, u64>],
    strategy: RankStrategy,
) -> Result<RankMap> {
    match strategy {
        RankStrategy::Dense => compute_dense_rank(pairs),
        RankStrategy::Standard => compute_standard_rank(pairs),
        RankStrategy::Modified => compute_modified_rank(pairs),
        RankStrategy::Fractional => compute_fractional_rank(pairs),
        // Groups, not documents: same table as dense.
        RankStrategy::Ordinal => compute_dense_rank(pairs),
        RankStrategy::LegacyDense => Err(RankError::NotFacetBased { strategy }),
    }
}

/// Dense ranking ("1223"): 1, 2, 3, ... one step per group regardless of size.
pub fn compute_dense_rank<K: AsRef<str>>(pairs: &[Pair<K, u64>]) -> Result<RankMap> {
    check_counts(pairs)?;

    let mut ranks = RankMap::with_capacity(pairs.len());
    let mut rank = Rank::FIRST;
    for pair in pairs {
        ranks.insert(pair.key().as_ref().to_owned(), rank);
        rank = rank.advance(1);
    }

    contracts::check_dense_steps(pairs, &ranks);
    Ok(ranks)
}

/// Standard competition ranking ("1224"): a group of `c` pushes the next rank by `c`.
pub fn compute_standard_rank<K: AsRef<str>>(pairs: &[Pair<K, u64>]) -> Result<RankMap> {
    check_counts(pairs)?;

    let mut ranks = RankMap::with_capacity(pairs.len());
    let mut rank = Rank::FIRST;
    for pair in pairs {
        ranks.insert(pair.key().as_ref().to_owned(), rank);
        rank = rank.advance(*pair.value());
    }

    contracts::check_non_decreasing(pairs, &ranks);
    Ok(ranks)
}

/// Modified competition ranking ("1334"): each group takes the last position it covers.
pub fn compute_modified_rank<K: AsRef<str>>(pairs: &[Pair<K, u64>]) -> Result<RankMap> {
    check_counts(pairs)?;

    let mut ranks = RankMap::with_capacity(pairs.len());
    let mut rank = Rank::default();
    for pair in pairs {
        rank = rank.advance(*pair.value());
        ranks.insert(pair.key().as_ref().to_owned(), rank);
    }

    contracts::check_non_decreasing(pairs, &ranks);
    contracts::check_modified_total(pairs, &ranks);
    Ok(ranks)
}

/// Fractional ranking ("1 2.5 2.5 4"): mean of the standard and modified ranks.
pub fn compute_fractional_rank<K: AsRef<str>>(pairs: &[Pair<K, u64>]) -> Result<RankMap> {
    let standard = compute_standard_rank(pairs)?;
    let modified = compute_modified_rank(pairs)?;

    let mut ranks = RankMap::with_capacity(pairs.len());
    for pair in pairs {
        let key = pair.key().as_ref();
        // Both maps were built from the same keys.
        if let (Some(&low), Some(&high)) = (standard.get(key), modified.get(key)) {
            ranks.insert(key.to_owned(), Rank::midpoint(low, high));
        }
    }

    contracts::check_fractional_bracketed(&standard, &modified, &ranks);
    Ok(ranks)
}

fn check_counts<K: AsRef<str>>(pairs: &[Pair<K, u64>]) -> Result<()> {
    match pairs.iter().find(|pair| *pair.value() == 0) {
        Some(pair) => Err(RankError::InvalidCount {
            key: pair.key().as_ref().to_owned(),
            count: *pair.value(),
        }),
        None => Ok(()),
    }
}
