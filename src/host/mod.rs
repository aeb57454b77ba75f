// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search-server side of ranking.
//!
//! The engine is pure and knows nothing about requests or documents. This
//! module is the thin adapter a server plugin needs: resolve request
//! parameters, pull a histogram or hit list out of the response, run the
//! engine, and write a `rank` field into every returned document. Unlike the
//! engine, it logs through `tracing`.

pub mod component;
pub mod facets;
pub mod params;

pub use component::{rank_value, HostError, RankComponent, RankRequest, RANK_FIELD_TAG};
pub use facets::{document_key, field_key, hit_pairs, histogram_pairs, identity_pairs, Document};
pub use params::{parse_integer, FacetOrder, RankParams};
