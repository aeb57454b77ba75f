//! Runtime contracts for the rank engine.
//!
//! Debug-mode assertions that the maps the engine hands back satisfy the
//! ranking laws. These contracts:
//!
//! 1. Are **zero-cost in release builds** (the loops sit behind `cfg!(debug_assertions)`)
//! 2. Provide **early failure detection** during development
//! 3. Mirror the properties checked by `tests/property/`
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function             | Law                                         |
//! |-------------------------------|---------------------------------------------|
//! | `check_dense_steps`           | consecutive dense ranks differ by exactly 1 |
//! | `check_non_decreasing`        | ranks never fall in input order             |
//! | `check_modified_total`        | last modified rank = sum of all counts      |
//! | `check_fractional_bracketed`  | standard ≤ fractional ≤ modified            |
//!
//! A histogram that repeats a group key is last-write-wins by contract, which
//! breaks positional laws on purpose. Every check skips such input.

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    // Every strategy starts counting at 1.
    assert!(matches!(Rank::FIRST.as_whole(), Some(1)));

    // Half ranks survive: (1 + 2) / 2 is not collapsed to a whole number.
    assert!(!Rank::midpoint(Rank::whole(1), Rank::whole(2)).is_whole());
    assert!(Rank::midpoint(Rank::whole(41), Rank::whole(41)).is_whole());
};

use crate::types::{Pair, Rank, RankMap};
use std::collections::HashSet;

fn has_duplicate_keys<K: AsRef<str>, V>(pairs: &[Pair<K, V>]) -> bool {
    let mut seen = HashSet::with_capacity(pairs.len());
    !pairs.iter().all(|pair| seen.insert(pair.key().as_ref()))
}

fn ranks_in_order<'a, K: AsRef<str>, V>(
    pairs: &'a [Pair<K, V>],
    ranks: &'a RankMap,
) -> impl Iterator<Item = Rank> + 'a {
    pairs
        .iter()
        .filter_map(move |pair| ranks.get(pair.key().as_ref()).copied())
}

// ============================================================================
// FACET CONTRACTS
// ============================================================================

/// Dense ranks run 1, 2, 3, ... with no gaps.
///
/// # Panics (debug builds only)
/// Panics if the first rank is not 1 or any step is not exactly 1.
#[inline]
pub fn check_dense_steps<K: AsRef<str>, V>(pairs: &[Pair<K, V>], ranks: &RankMap) {
    if !cfg!(debug_assertions) || has_duplicate_keys(pairs) {
        return;
    }

    let mut expected = Rank::FIRST;
    for (i, rank) in ranks_in_order(pairs, ranks).enumerate() {
        debug_assert!(
            rank == expected,
            "Contract violation: dense step - position {} has rank {}, expected {}",
            i,
            rank,
            expected
        );
        expected = expected.advance(1);
    }
}

/// Ranks never decrease along the input order.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair of ranks is decreasing.
#[inline]
pub fn check_non_decreasing<K: AsRef<str>, V>(pairs: &[Pair<K, V>], ranks: &RankMap) {
    if !cfg!(debug_assertions) || has_duplicate_keys(pairs) {
        return;
    }

    let ordered: Vec<Rank> = ranks_in_order(pairs, ranks).collect();
    for (i, window) in ordered.windows(2).enumerate() {
        debug_assert!(
            window[0] <= window[1],
            "Contract violation: monotonic ranks - position {} ({}) > position {} ({})",
            i,
            window[0],
            i + 1,
            window[1]
        );
    }
}

/// The last modified-competition rank counts every document.
///
/// # Panics (debug builds only)
/// Panics if the final rank differs from the saturating sum of counts.
#[inline]
pub fn check_modified_total<K: AsRef<str>>(pairs: &[Pair<K, u64>], ranks: &RankMap) {
    if !cfg!(debug_assertions) || has_duplicate_keys(pairs) {
        return;
    }

    let Some(last) = pairs.last() else {
        return;
    };
    let total = pairs
        .iter()
        .fold(0u64, |sum, pair| sum.saturating_add(*pair.value()));
    let expected = Rank::whole(total);

    debug_assert!(
        ranks.get(last.key().as_ref()) == Some(&expected),
        "Contract violation: modified total - last rank {:?}, expected {}",
        ranks.get(last.key().as_ref()),
        expected
    );
}

/// Fractional ranks sit between the standard and modified ranks of their group.
///
/// # Panics (debug builds only)
/// Panics if any key is out of bracket or not the exact midpoint.
#[inline]
pub fn check_fractional_bracketed(standard: &RankMap, modified: &RankMap, fractional: &RankMap) {
    if !cfg!(debug_assertions) {
        return;
    }

    for (key, &rank) in fractional {
        let bracket = standard.get(key).zip(modified.get(key));
        debug_assert!(
            bracket.is_some(),
            "Contract violation: fractional key '{}' has no bracket",
            key
        );
        let Some((&low, &high)) = bracket else {
            continue;
        };
        debug_assert!(
            low <= rank && rank <= high,
            "Contract violation: fractional bracket - '{}' has {} outside [{}, {}]",
            key,
            rank,
            low,
            high
        );
        debug_assert!(
            rank == Rank::midpoint(low, high),
            "Contract violation: fractional midpoint - '{}' has {}, expected ({} + {}) / 2",
            key,
            rank,
            low,
            high
        );
    }
}
