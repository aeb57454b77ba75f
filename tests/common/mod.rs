//! Shared test utilities and fixtures.

#![allow(dead_code)]

use facetrank::host::Document;
use facetrank::{HistogramEntry, HitEntry, Pair, Rank, RankMap, RankRequest};
use proptest::prelude::*;
use serde_json::Value;

// Re-export canonical test utilities from facetrank::testing
pub use facetrank::testing::{hits, pairs, rank_data_set, RankRow, RANK_DATA_SET};

// ============================================================================
// HISTOGRAMS
// ============================================================================

/// Histogram with one group per count, keyed `g0`, `g1`, ... in input order.
pub fn histogram_from_counts(counts: &[u64]) -> Vec<HistogramEntry> {
    counts
        .iter()
        .enumerate()
        .map(|(i, count)| Pair::new(format!("g{}", i), *count))
        .collect()
}

/// Ranks of `pairs` in input order.
pub fn ranks_in_order(pairs: &[HistogramEntry], ranks: &RankMap) -> Vec<Rank> {
    pairs.iter().map(|pair| ranks[pair.key()]).collect()
}

/// Assert a rank map holds exactly the expected `(key, rank)` entries.
pub fn assert_ranks(ranks: &RankMap, expected: &[(&str, f64)]) {
    assert_eq!(
        ranks.len(),
        expected.len(),
        "rank map has {} keys, expected {}: {:?}",
        ranks.len(),
        expected.len(),
        ranks
    );
    for (key, rank) in expected {
        let actual = ranks
            .get(*key)
            .unwrap_or_else(|| panic!("key {:?} missing from {:?}", key, ranks));
        assert_eq!(actual.as_f64(), *rank, "rank of {:?}", key);
    }
}

// ============================================================================
// PROPTEST STRATEGIES
// ============================================================================

/// Non-empty histograms with distinct keys and positive counts.
pub fn histogram_strategy() -> impl Strategy<Value = Vec<HistogramEntry>> {
    prop::collection::vec(1u64..1_000, 1..60).prop_map(|counts| histogram_from_counts(&counts))
}

/// Ordered hit lists: distinct identities, scores sorted best-first with ties.
pub fn hit_list_strategy() -> impl Strategy<Value = Vec<HitEntry>> {
    prop::collection::vec(-50i64..50, 0..80).prop_map(|mut scores| {
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores
            .into_iter()
            .enumerate()
            .map(|(i, score)| Pair::new(format!("doc{}", i), score.to_string()))
            .collect()
    })
}

// ============================================================================
// HOST FIXTURES
// ============================================================================

/// Parse a rank request from a JSON literal.
pub fn request(value: Value) -> RankRequest {
    serde_json::from_value(value).expect("valid rank request")
}

/// The `rank` field of every document, in order.
pub fn rank_column(docs: &[Document]) -> Vec<Value> {
    docs.iter()
        .map(|doc| doc.get("rank").cloned().expect("every document is ranked"))
        .collect()
}
