//! Every group key is ranked exactly once, whatever the strategy.

use super::common::{histogram_from_counts, histogram_strategy, hit_list_strategy};
use facetrank::{compute_facet_based_rank, compute_legacy_dense_rank, Pair, RankStrategy};
use proptest::prelude::*;

fn facet_strategies() -> impl Iterator<Item = RankStrategy> {
    RankStrategy::ALL.into_iter().filter(|s| s.is_facet_based())
}

proptest! {
    #[test]
    fn prop_every_key_ranked(histogram in histogram_strategy()) {
        for strategy in facet_strategies() {
            let ranks = compute_facet_based_rank(&histogram, strategy).unwrap();
            prop_assert_eq!(ranks.len(), histogram.len(), "{}", strategy);
            for pair in &histogram {
                prop_assert!(ranks.contains_key(pair.key()), "{} missing {}", strategy, pair);
            }
        }
    }

    #[test]
    fn prop_duplicate_keys_last_write_wins(counts in prop::collection::vec(1u64..20, 2..20)) {
        let mut histogram = histogram_from_counts(&counts);
        let last = histogram.len() - 1;
        let first_key = histogram[0].key().clone();
        histogram[last] = Pair::new(first_key.clone(), counts[last]);

        for strategy in facet_strategies() {
            let ranks = compute_facet_based_rank(&histogram, strategy).unwrap();
            prop_assert_eq!(ranks.len(), histogram.len() - 1);

            // Same rank the last group would get under its own key.
            let renamed: Vec<_> = histogram
                .iter()
                .enumerate()
                .map(|(i, pair)| {
                    if i == last {
                        Pair::new("tail".to_string(), *pair.value())
                    } else {
                        pair.clone()
                    }
                })
                .collect();
            let reference = compute_facet_based_rank(&renamed, strategy).unwrap();
            prop_assert_eq!(ranks[&first_key], reference["tail"]);
        }
    }

    #[test]
    fn prop_legacy_window_size(hits in hit_list_strategy(), start in 0usize..100, rows in 0usize..100) {
        let ranks = compute_legacy_dense_rank(&hits, start, rows).unwrap();
        let expected = hits.len().saturating_sub(start).min(rows);
        prop_assert_eq!(ranks.len(), expected);
    }
}
