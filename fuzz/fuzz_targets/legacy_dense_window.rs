// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for windowed dense ranking over the hit list.
//!
//! Page windows are arbitrary, including `start + rows` overflowing `usize`.
//! Scores are arbitrary text, so parse failures are exercised as much as
//! parse successes.

#![no_main]

use arbitrary::Arbitrary;
use facetrank::{compute_legacy_dense_rank, Pair, RankError};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct WindowInput {
    scores: Vec<String>,
    start: usize,
    rows: usize,
}

fuzz_target!(|input: WindowInput| {
    let hits: Vec<Pair<String, String>> = input
        .scores
        .into_iter()
        .take(512)
        .enumerate()
        .map(|(i, score)| Pair::new(format!("doc{}", i), score))
        .collect();

    let scanned = input.start.saturating_add(input.rows).min(hits.len());
    let first_bad = hits[..scanned]
        .iter()
        .find(|hit| hit.value().parse::<i64>().is_err());

    match compute_legacy_dense_rank(&hits, input.start, input.rows) {
        Ok(window) => {
            assert!(first_bad.is_none(), "malformed score accepted");

            // INVARIANT 1: exactly the window is emitted
            let expected = scanned.saturating_sub(input.start);
            assert_eq!(window.len(), expected);

            // INVARIANT 2: the window agrees with a scan from the top
            let full = compute_legacy_dense_rank(&hits, 0, scanned).expect("prefix parsed once");
            for (identity, rank) in &window {
                assert_eq!(full.get(identity), Some(rank));
            }
        }
        Err(RankError::MalformedScore { identity, score }) => {
            let bad = first_bad.expect("error reported without a malformed score");
            assert_eq!(&identity, bad.key());
            assert_eq!(&score, bad.value());
        }
        Err(other) => panic!("unexpected error: {}", other),
    }
});
