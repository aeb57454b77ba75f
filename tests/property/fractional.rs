//! Fractional ranks sit exactly between the two competition ranks.

use super::common::histogram_strategy;
use facetrank::{compute_fractional_rank, compute_modified_rank, compute_standard_rank, Rank};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_fractional_is_midpoint(histogram in histogram_strategy()) {
        let standard = compute_standard_rank(&histogram).unwrap();
        let modified = compute_modified_rank(&histogram).unwrap();
        let fractional = compute_fractional_rank(&histogram).unwrap();

        for pair in &histogram {
            let key = pair.key();
            prop_assert_eq!(fractional[key], Rank::midpoint(standard[key], modified[key]));
            prop_assert_eq!(
                fractional[key].as_f64(),
                (standard[key].as_f64() + modified[key].as_f64()) / 2.0
            );
        }
    }

    #[test]
    fn prop_fractional_bracketed(histogram in histogram_strategy()) {
        let standard = compute_standard_rank(&histogram).unwrap();
        let modified = compute_modified_rank(&histogram).unwrap();
        let fractional = compute_fractional_rank(&histogram).unwrap();

        for pair in &histogram {
            let key = pair.key();
            prop_assert!(standard[key] <= fractional[key]);
            prop_assert!(fractional[key] <= modified[key]);
        }
    }

    #[test]
    fn prop_fractional_whole_iff_odd_group(histogram in histogram_strategy()) {
        let fractional = compute_fractional_rank(&histogram).unwrap();
        for pair in &histogram {
            prop_assert_eq!(fractional[pair.key()].is_whole(), pair.value() % 2 == 1);
        }
    }
}
