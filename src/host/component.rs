// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The rank component: one request in, ranked documents out.
//!
//! Which rank map gets built, and which document field is used to look it up,
//! depends on the strategy:
//!
//! | Strategy                    | Engine input            | Lookup field    |
//! |-----------------------------|-------------------------|-----------------|
//! | `legacyDense`               | ordered hit list        | identity field  |
//! | `ordinal`                   | page documents          | identity field  |
//! | everything else             | rank-field histogram    | rank field      |
//!
//! Every document comes back with a `rank` field. A document whose key is not
//! in the map gets `rank: null` rather than being dropped.

use crate::engine::{compute_facet_based_rank, compute_legacy_dense_rank, compute_ordinal_based_rank};
use crate::error::RankError;
use crate::host::facets::{document_key, hit_pairs, histogram_pairs, identity_pairs, Document};
use crate::host::params::RankParams;
use crate::strategy::RankStrategy;
use crate::types::{Rank, RankMap};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, debug_span};

/// Field every returned document gets its rank under.
pub const RANK_FIELD_TAG: &str = "rank";

/// Everything the component needs from the host for one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankRequest {
    /// Raw request parameters, resolved through [`RankParams::from_params`].
    pub params: BTreeMap<String, String>,
    /// The page of documents being returned.
    pub docs: Vec<Document>,
    /// `(value, count)` facet counts for the rank field.
    pub facets: Option<Vec<(String, u64)>>,
    /// `(identity, score)` for at least the first `start + rows` hits, in order.
    pub hits: Option<Vec<(String, Value)>>,
}

/// Failures surfaced to the host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Rank(#[from] RankError),

    #[error("strategy '{strategy}' needs the ordered hit list, but the request has none")]
    MissingHitList { strategy: RankStrategy },

    #[error("strategy '{strategy}' needs facet counts for field '{field}', but the request has none")]
    MissingFacets { strategy: RankStrategy, field: String },
}

/// Annotates a page of documents with their rank.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankComponent;

impl RankComponent {
    pub fn new() -> Self {
        RankComponent
    }

    pub fn description(&self) -> &'static str {
        "Rank component: annotates each returned document with its rank under the requested strategy"
    }

    /// Rank every document in the request.
    pub fn process(&self, request: &RankRequest) -> Result<Vec<Document>, HostError> {
        let params = RankParams::from_params(&request.params);
        self.process_with(request, &params)
    }

    /// Rank every document in the request under already-resolved parameters.
    pub fn process_with(
        &self,
        request: &RankRequest,
        params: &RankParams,
    ) -> Result<Vec<Document>, HostError> {
        let started = Instant::now();
        let span = debug_span!("rank_component", strategy = %params.strategy);
        let _enter = span.enter();

        debug!(description = params.strategy.description(), "computing rank");
        let (ranks, lookup_field) = self.rank_map(request, params)?;

        let ranked: Vec<Document> = request
            .docs
            .iter()
            .map(|doc| {
                let rank = ranks.get(&document_key(doc, lookup_field));
                let mut doc = doc.clone();
                doc.insert(RANK_FIELD_TAG.to_string(), rank_value(rank));
                doc
            })
            .collect();

        debug!(
            docs = ranked.len(),
            ranked_keys = ranks.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "rank component finished"
        );
        Ok(ranked)
    }

    /// Build the rank map for the request and name the field to look it up by.
    pub fn rank_map<'p>(
        &self,
        request: &RankRequest,
        params: &'p RankParams,
    ) -> Result<(RankMap, &'p str), HostError> {
        match params.strategy {
            RankStrategy::LegacyDense => {
                let hits = request.hits.as_deref().ok_or(HostError::MissingHitList {
                    strategy: params.strategy,
                })?;
                let ranks = compute_legacy_dense_rank(&hit_pairs(hits), params.start, params.rows)?;
                Ok((ranks, params.id_field.as_str()))
            }
            RankStrategy::Ordinal => {
                let pairs = identity_pairs(&request.docs, &params.id_field);
                let ranks = compute_ordinal_based_rank(&pairs, params.start);
                Ok((ranks, params.id_field.as_str()))
            }
            strategy => {
                let facets =
                    request
                        .facets
                        .as_deref()
                        .ok_or_else(|| HostError::MissingFacets {
                            strategy,
                            field: params.rank_field.clone(),
                        })?;
                let pairs = histogram_pairs(facets, params.facet_order);
                let ranks = compute_facet_based_rank(&pairs, strategy)?;
                Ok((ranks, params.rank_field.as_str()))
            }
        }
    }
}

/// JSON form of a rank: integer when whole, float for half ranks, null when absent.
pub fn rank_value(rank: Option<&Rank>) -> Value {
    match rank {
        None => Value::Null,
        Some(rank) => match rank.as_whole() {
            Some(n) => Value::from(n),
            None => Value::from(rank.as_f64()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: Value) -> RankRequest {
        serde_json::from_value(value).unwrap()
    }

    fn ranks(docs: &[Document]) -> Vec<Value> {
        docs.iter().map(|doc| doc[RANK_FIELD_TAG].clone()).collect()
    }

    #[test]
    fn test_default_strategy_is_ordinal_by_page_position() {
        let req = request(json!({
            "params": {"start": "10"},
            "docs": [{"ID": "a", "SCORE": 9}, {"ID": "b", "SCORE": 9}, {"ID": "c", "SCORE": 3}]
        }));
        let docs = RankComponent::new().process(&req).unwrap();
        assert_eq!(ranks(&docs), vec![json!(11), json!(12), json!(13)]);
        assert_eq!(docs[0]["SCORE"], json!(9));
    }

    #[test]
    fn test_facet_strategy_looks_up_rank_field() {
        let req = request(json!({
            "params": {"sn.rank.strategy": "fractional"},
            "docs": [{"ID": "a", "SCORE": 100}, {"ID": "b", "SCORE": 90}, {"ID": "c", "SCORE": 90}],
            "facets": [["100", 1], ["90", 2], ["80", 1]]
        }));
        let docs = RankComponent::new().process(&req).unwrap();
        assert_eq!(ranks(&docs), vec![json!(1), json!(2.5), json!(2.5)]);
    }

    #[test]
    fn test_desc_facets_are_reversed() {
        let req = request(json!({
            "params": {"sn.rank.strategy": "standard", "sn.facet.order": "desc"},
            "docs": [{"ID": "a", "SCORE": 80}],
            "facets": [["80", 1], ["90", 2], ["100", 1]]
        }));
        let docs = RankComponent::new().process(&req).unwrap();
        assert_eq!(ranks(&docs), vec![json!(4)]);
    }

    #[test]
    fn test_legacy_dense_uses_hit_list_window() {
        let req = request(json!({
            "params": {"sn.rank.strategy": "legacyDense", "start": "2", "rows": "2"},
            "docs": [{"ID": "c"}, {"ID": "d"}],
            "hits": [["a", "100"], ["b", 100], ["c", "90"], ["d", "80"]]
        }));
        let docs = RankComponent::new().process(&req).unwrap();
        assert_eq!(ranks(&docs), vec![json!(2), json!(3)]);
    }

    #[test]
    fn test_missing_inputs_are_reported() {
        let req = request(json!({"params": {"sn.rank.strategy": "legacyDense"}}));
        assert_eq!(
            RankComponent::new().process(&req),
            Err(HostError::MissingHitList {
                strategy: RankStrategy::LegacyDense
            })
        );

        let req = request(json!({"params": {"sn.rank.strategy": "dense", "sn.rank.field": "PTS"}}));
        assert_eq!(
            RankComponent::new().process(&req),
            Err(HostError::MissingFacets {
                strategy: RankStrategy::Dense,
                field: "PTS".to_string()
            })
        );
    }

    #[test]
    fn test_unranked_document_gets_null() {
        let req = request(json!({
            "params": {"sn.rank.strategy": "dense"},
            "docs": [{"ID": "a", "SCORE": 5}, {"ID": "b", "SCORE": 6}],
            "facets": [["5", 1]]
        }));
        let docs = RankComponent::new().process(&req).unwrap();
        assert_eq!(ranks(&docs), vec![json!(1), Value::Null]);
    }

    #[test]
    fn test_engine_errors_propagate() {
        let req = request(json!({
            "params": {"sn.rank.strategy": "legacyDense"},
            "hits": [["a", "high"]]
        }));
        assert!(matches!(
            RankComponent::new().process(&req),
            Err(HostError::Rank(RankError::MalformedScore { .. }))
        ));
    }

    #[test]
    fn test_zero_count_buckets_are_not_groups() {
        let req = request(json!({
            "params": {"sn.rank.strategy": "standard"},
            "docs": [{"ID": "a", "SCORE": 90}, {"ID": "b", "SCORE": 80}],
            "facets": [["100", 0], ["90", 2], ["80", 1]]
        }));
        let docs = RankComponent::new().process(&req).unwrap();
        assert_eq!(ranks(&docs), vec![json!(1), json!(3)]);
    }

    #[test]
    fn test_integral_float_field_matches_facet_key() {
        let req = request(json!({
            "params": {"sn.rank.strategy": "dense"},
            "docs": [{"ID": "a", "SCORE": 90.0}],
            "facets": [["100", 1], ["90", 2]]
        }));
        let docs = RankComponent::new().process(&req).unwrap();
        assert_eq!(ranks(&docs), vec![json!(2)]);
    }

    #[test]
    fn test_description() {
        assert!(RankComponent::new().description().starts_with("Rank component"));
    }
}
