// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking from the ordered hit list, one document at a time.
//!
//! Slower than the histogram path because it touches every hit up to the end
//! of the requested page, including the skipped prefix. Use it when the caller
//! wants per-document ranks (ordinal) or bit-for-bit parity with the old
//! dense behavior (legacy dense).

use crate::engine::iter::DenseRankExt;
use crate::error::{RankError, Result};
use crate::types::{Pair, Rank, RankMap};

/// Ordinal ranking by position: `start + 1, start + 2, ...` in input order.
///
/// The pair values are ignored; only position matters.
pub fn compute_ordinal_based_rank<K: AsRef<str>, V>(pairs: &[Pair<K, V>], start: usize) -> RankMap {
    let mut ranks = RankMap::with_capacity(pairs.len());
    let mut rank = Rank::whole(u64::try_from(start).unwrap_or(u64::MAX));
    for pair in pairs {
        rank = rank.advance(1);
        ranks.insert(pair.key().as_ref().to_owned(), rank);
    }
    ranks
}

/// Dense ranking computed by scanning the hit list, restricted to a page window.
///
/// Scans the first `start + rows` hits. The rank counter runs over the whole
/// scan, but only positions in `start..start + rows` are recorded, so the first
/// recorded rank depends on the skipped prefix.
///
/// Scores compare as base-10 `i64` values parsed from their text, so `"07"`
/// and `"7"` tie. Scores past the scanned prefix are never parsed.
pub fn compute_legacy_dense_rank<K, S>(hits: &[Pair<K, S>], start: usize, rows: usize) -> Result<RankMap>
where
    K: AsRef<str>,
    S: AsRef<str>,
{
    let scanned = start.saturating_add(rows);
    let parsed = hits
        .iter()
        .take(scanned)
        .map(|hit| parse_score(hit).map(|score| (hit.key().as_ref(), score)))
        .collect::<Result<Vec<_>>>()?;

    Ok(parsed
        .into_iter()
        .dense_ranks()
        .window(start, rows)
        .map(|(identity, rank)| (identity.to_owned(), rank))
        .collect())
}

fn parse_score<K: AsRef<str>, S: AsRef<str>>(hit: &Pair<K, S>) -> Result<i64> {
    let score = hit.value().as_ref();
    score.parse::<i64>().map_err(|_| RankError::MalformedScore {
        identity: hit.key().as_ref().to_owned(),
        score: score.to_owned(),
    })
}
