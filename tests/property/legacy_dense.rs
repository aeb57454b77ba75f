//! Windowed dense ranking over the raw hit list.

use super::common::hit_list_strategy;
use facetrank::{compute_legacy_dense_rank, Rank};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_window_agrees_with_full_scan(hits in hit_list_strategy(), start in 0usize..100, rows in 0usize..100) {
        let window = compute_legacy_dense_rank(&hits, start, rows).unwrap();
        let full = compute_legacy_dense_rank(&hits, 0, start + rows).unwrap();
        for (identity, rank) in &window {
            prop_assert_eq!(Some(rank), full.get(identity));
        }
    }

    #[test]
    fn prop_ties_share_rank(hits in hit_list_strategy()) {
        let ranks = compute_legacy_dense_rank(&hits, 0, hits.len()).unwrap();
        for w in hits.windows(2) {
            let (a, b) = (ranks[w[0].key()], ranks[w[1].key()]);
            if w[0].value() == w[1].value() {
                prop_assert_eq!(a, b);
            } else {
                prop_assert_eq!(b, a.advance(1));
            }
        }
        if let Some(first) = hits.first() {
            prop_assert_eq!(ranks[first.key()], Rank::FIRST);
        }
    }
}
