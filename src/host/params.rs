// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Request parameters understood by the rank component.
//!
//! | Parameter          | Default   | Notes                                   |
//! |--------------------|-----------|-----------------------------------------|
//! | `sn.rank.strategy` | `ordinal` | wire key of a [`RankStrategy`]          |
//! | `sn.rank.type`     |           | deprecated alias of `sn.rank.strategy`  |
//! | `sn.id.field`      | `ID`      | document identity field                 |
//! | `sn.rank.field`    | `SCORE`   | field the histogram was faceted on      |
//! | `start`            | `0`       | page offset                             |
//! | `rows`             | `10`      | page size (legacy dense window)         |
//! | `sn.facet.order`   | `asc`     | `desc` reverses the supplied histogram  |
//!
//! Bad values never fail a request: they fall back to the default.

use crate::strategy::RankStrategy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

pub const STRATEGY_PARAM: &str = "sn.rank.strategy";
/// Older name for [`STRATEGY_PARAM`]. Read only when the new name is absent.
pub const DEPRECATED_STRATEGY_PARAM: &str = "sn.rank.type";
pub const ID_FIELD_PARAM: &str = "sn.id.field";
pub const RANK_FIELD_PARAM: &str = "sn.rank.field";
pub const START_PARAM: &str = "start";
pub const ROWS_PARAM: &str = "rows";
pub const FACET_ORDER_PARAM: &str = "sn.facet.order";

pub const DEFAULT_ID_FIELD: &str = "ID";
pub const DEFAULT_RANK_FIELD: &str = "SCORE";
pub const DEFAULT_START: usize = 0;
pub const DEFAULT_ROWS: usize = 10;

/// Order of the histogram as the host supplies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetOrder {
    /// Already in rank order.
    #[default]
    Asc,
    /// Reverse of rank order.
    Desc,
}

impl FacetOrder {
    pub fn from_param(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(FacetOrder::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(FacetOrder::Desc)
        } else {
            None
        }
    }
}

/// Resolved configuration for one rank request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RankParams {
    pub strategy: RankStrategy,
    pub id_field: String,
    pub rank_field: String,
    pub start: usize,
    pub rows: usize,
    pub facet_order: FacetOrder,
}

impl Default for RankParams {
    fn default() -> Self {
        RankParams {
            strategy: RankStrategy::default(),
            id_field: DEFAULT_ID_FIELD.to_string(),
            rank_field: DEFAULT_RANK_FIELD.to_string(),
            start: DEFAULT_START,
            rows: DEFAULT_ROWS,
            facet_order: FacetOrder::default(),
        }
    }
}

impl RankParams {
    /// Resolve parameters from a request's name/value pairs. Later duplicates win.
    pub fn from_params<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let params: BTreeMap<String, String> = params
            .into_iter()
            .map(|(name, value)| (name.as_ref().to_owned(), value.as_ref().to_owned()))
            .collect();
        let get = |name: &str| params.get(name).map(String::as_str);

        let mut resolved = RankParams {
            strategy: resolve_strategy(get(STRATEGY_PARAM), get(DEPRECATED_STRATEGY_PARAM)),
            start: non_negative(get(START_PARAM)).unwrap_or(DEFAULT_START),
            rows: non_negative(get(ROWS_PARAM)).unwrap_or(DEFAULT_ROWS),
            ..RankParams::default()
        };
        if let Some(field) = get(ID_FIELD_PARAM).filter(|field| !field.is_empty()) {
            resolved.id_field = field.to_owned();
        }
        if let Some(field) = get(RANK_FIELD_PARAM).filter(|field| !field.is_empty()) {
            resolved.rank_field = field.to_owned();
        }
        if let Some(order) = get(FACET_ORDER_PARAM).and_then(FacetOrder::from_param) {
            resolved.facet_order = order;
        }
        resolved
    }

    pub fn with_strategy(mut self, strategy: RankStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

fn resolve_strategy(current: Option<&str>, deprecated: Option<&str>) -> RankStrategy {
    let key = match (current, deprecated) {
        (Some(key), _) => key,
        (None, Some(key)) => {
            warn!(
                param = DEPRECATED_STRATEGY_PARAM,
                replacement = STRATEGY_PARAM,
                "deprecated rank strategy parameter"
            );
            key
        }
        (None, None) => return RankStrategy::default(),
    };
    if key.is_empty() {
        return RankStrategy::default();
    }

    RankStrategy::by_key(key).unwrap_or_else(|err| {
        warn!(%err, fallback = %RankStrategy::default(), "falling back to default rank strategy");
        RankStrategy::default()
    })
}

/// Parse an integer the way the search server does: an optional leading `-`
/// followed by one or more ASCII digits, nothing else.
pub fn parse_integer(value: &str) -> Option<i64> {
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

fn non_negative(value: Option<&str>) -> Option<usize> {
    value
        .and_then(parse_integer)
        .and_then(|n| usize::try_from(n).ok())
}
