// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for facet-based rank dispatch.
//!
//! Arbitrary histograms, including zero counts, duplicate keys and counts
//! near `u64::MAX`, through every strategy key. Nothing may panic, zero counts
//! must be rejected, and accepted input must obey the rank laws.

#![no_main]

use arbitrary::Arbitrary;
use facetrank::{compute_facet_based_rank, Pair, Rank, RankError, RankStrategy};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct DispatchInput {
    key: String,
    groups: Vec<(u8, u64)>,
}

fuzz_target!(|input: DispatchInput| {
    // Small key space so duplicates are common.
    let histogram: Vec<Pair<String, u64>> = input
        .groups
        .iter()
        .take(256)
        .map(|(key, count)| Pair::new(format!("k{}", key % 32), *count))
        .collect();

    let strategy = match RankStrategy::by_key(&input.key) {
        Ok(strategy) => strategy,
        Err(RankError::UnknownStrategy { key }) => {
            assert_eq!(key, input.key);
            // Hosts fall back to the default; so do we.
            RankStrategy::default()
        }
        Err(other) => panic!("unexpected error from by_key: {}", other),
    };

    for strategy in [strategy, RankStrategy::LegacyDense] {
        let result = compute_facet_based_rank(&histogram, strategy);

        if !strategy.is_facet_based() {
            assert_eq!(result, Err(RankError::NotFacetBased { strategy }));
            continue;
        }

        if let Some(empty) = histogram.iter().find(|pair| *pair.value() == 0) {
            assert!(
                matches!(result, Err(RankError::InvalidCount { ref key, count: 0 }) if key == empty.key()),
                "zero count accepted: {:?}",
                result
            );
            continue;
        }

        let ranks = result.expect("positive counts are always rankable");

        // INVARIANT 1: every distinct key ranked exactly once
        let mut distinct: Vec<&String> = histogram.iter().map(|pair| pair.key()).collect();
        distinct.sort();
        distinct.dedup();
        assert_eq!(ranks.len(), distinct.len());

        // INVARIANT 2: ranks start at one or later
        assert!(ranks.values().all(|rank| *rank >= Rank::FIRST));
    }
});
