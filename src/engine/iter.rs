// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Streaming dense ranks over an ordered hit sequence.
//!
//! `DenseRanks` wraps any iterator of `(identity, score)` already sorted by
//! score and yields `(identity, rank)`. The rank starts at 1 and steps by one
//! each time the score changes from the previous row.
//!
//! Windowing happens *after* ranking, so the rank of the first row in the
//! window still reflects every score before it:
//!
//! ```text
//! scores:   100  100  90  80
//! ranks:     1    1   2   3
//! window(2, 10)       ^^^^^^  -> c=2, d=3
//! ```

use crate::types::Rank;
use std::iter::{FusedIterator, Skip, Take};

/// Iterator adapter assigning dense ranks to a pre-sorted sequence.
#[derive(Debug, Clone)]
pub struct DenseRanks<I, S> {
    inner: I,
    previous: Option<S>,
    rank: Rank,
}

impl<I, S> DenseRanks<I, S> {
    pub fn new(inner: I) -> Self {
        DenseRanks {
            inner,
            previous: None,
            rank: Rank::FIRST,
        }
    }

    /// Skip `start` ranked rows, then take at most `rows`.
    pub fn window(self, start: usize, rows: usize) -> Take<Skip<Self>>
    where
        Self: Iterator,
    {
        self.skip(start).take(rows)
    }
}

impl<I, K, S> Iterator for DenseRanks<I, S>
where
    I: Iterator<Item = (K, S)>,
    S: PartialEq,
{
    type Item = (K, Rank);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, score) = self.inner.next()?;
        if matches!(&self.previous, Some(previous) if *previous != score) {
            self.rank = self.rank.advance(1);
        }
        self.previous = Some(score);
        Some((key, self.rank))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, K, S> ExactSizeIterator for DenseRanks<I, S>
where
    I: ExactSizeIterator<Item = (K, S)>,
    S: PartialEq,
{
}

impl<I, K, S> FusedIterator for DenseRanks<I, S>
where
    I: FusedIterator<Item = (K, S)>,
    S: PartialEq,
{
}

/// `.dense_ranks()` on any `(identity, score)` iterator.
pub trait DenseRankExt<K, S>: Iterator<Item = (K, S)> + Sized {
    fn dense_ranks(self) -> DenseRanks<Self, S> {
        DenseRanks::new(self)
    }
}

impl<I, K, S> DenseRankExt<K, S> for I where I: Iterator<Item = (K, S)> {}
