// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The rank engine: pure functions from ordered pairs to a rank map.
//!
//! Two families, split by what the caller already has:
//!
//! - **Facet-based** (`facet`): a histogram of tie-groups. Cheap, one entry per
//!   distinct value. Dense, standard, modified, fractional, and ordinal-by-group.
//! - **Position-based** (`position`): the ordered hit list. One entry per
//!   document. Ordinal-by-position and legacy dense.
//!
//! Nothing here sorts, logs, or keeps state. Inputs are borrowed for the call
//! and the returned map is the only allocation that survives it.

pub mod facet;
pub mod iter;
pub mod position;

pub use facet::{
    compute_dense_rank, compute_facet_based_rank, compute_fractional_rank, compute_modified_rank,
    compute_standard_rank,
};
pub use iter::{DenseRankExt, DenseRanks};
pub use position::{compute_legacy_dense_rank, compute_ordinal_based_rank};
