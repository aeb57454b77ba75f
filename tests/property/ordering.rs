//! Rank order follows input order.

use super::common::{histogram_strategy, ranks_in_order};
use facetrank::{
    compute_dense_rank, compute_facet_based_rank, compute_modified_rank, compute_standard_rank,
    Rank, RankStrategy,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_non_decreasing(histogram in histogram_strategy()) {
        for strategy in [
            RankStrategy::Dense,
            RankStrategy::Standard,
            RankStrategy::Modified,
            RankStrategy::Ordinal,
            RankStrategy::Fractional,
        ] {
            let ranks = compute_facet_based_rank(&histogram, strategy).unwrap();
            let ordered = ranks_in_order(&histogram, &ranks);
            prop_assert!(
                ordered.windows(2).all(|w| w[0] <= w[1]),
                "{} not monotone: {:?}", strategy, ordered
            );
        }
    }

    #[test]
    fn prop_dense_steps_by_one(histogram in histogram_strategy()) {
        let ranks = compute_dense_rank(&histogram).unwrap();
        let ordered = ranks_in_order(&histogram, &ranks);
        prop_assert_eq!(ordered[0], Rank::FIRST);
        for w in ordered.windows(2) {
            prop_assert_eq!(w[1], w[0].advance(1));
        }
    }

    #[test]
    fn prop_standard_is_one_past_modified_of_previous(histogram in histogram_strategy()) {
        let standard = ranks_in_order(&histogram, &compute_standard_rank(&histogram).unwrap());
        let modified = ranks_in_order(&histogram, &compute_modified_rank(&histogram).unwrap());
        for i in 1..histogram.len() {
            prop_assert_eq!(standard[i], modified[i - 1].advance(1));
        }
    }

    #[test]
    fn prop_modified_total_is_document_count(histogram in histogram_strategy()) {
        let ranks = compute_modified_rank(&histogram).unwrap();
        let total: u64 = histogram.iter().map(|pair| *pair.value()).sum();
        let last = histogram.last().map(|pair| ranks[pair.key()]);
        prop_assert_eq!(last, Some(Rank::whole(total)));
    }

    #[test]
    fn prop_singletons_agree(n in 1usize..80) {
        let histogram = super::common::histogram_from_counts(&vec![1; n]);
        let dense = compute_facet_based_rank(&histogram, RankStrategy::Dense).unwrap();
        for strategy in [RankStrategy::Standard, RankStrategy::Modified, RankStrategy::Ordinal, RankStrategy::Fractional] {
            prop_assert_eq!(&compute_facet_based_rank(&histogram, strategy).unwrap(), &dense, "{}", strategy);
        }
    }
}
