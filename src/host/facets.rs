// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning host data into engine input.
//!
//! The engine only sees `Pair`s of strings and numbers. These helpers pull
//! them out of JSON documents, facet count lists, and raw hit lists, and make
//! sure a document field is stringified the same way whether it is being fed
//! to the engine or looked up in the resulting rank map.

use crate::host::params::FacetOrder;
use crate::types::{HistogramEntry, HitEntry, Pair};
use serde_json::{Map, Number, Value};

/// A response document: field name → stored value.
pub type Document = Map<String, Value>;

/// String form of a field value, as used for group keys and identities.
///
/// Strings are taken verbatim, numbers use their JSON text, booleans are
/// `true`/`false`. A float with no fractional part is written as an integer,
/// so `90.0` and `90` share the facet key `"90"`. Multi-valued fields use
/// their first value. Null, objects and empty arrays have no key.
pub fn field_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_key(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(values) => values.first().and_then(field_key),
        Value::Null | Value::Object(_) => None,
    }
}

fn number_key(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 9.0e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

/// Key of `field` in `doc`, or the empty string when it has none.
pub fn document_key(doc: &Document, field: &str) -> String {
    doc.get(field).and_then(field_key).unwrap_or_default()
}

/// Facet counts for the rank field, put into rank order.
///
/// Zero-count buckets are dropped: no document holds that value, so it is not
/// a tie-group. Servers list them whenever the facet minimum count is 0.
pub fn histogram_pairs(facets: &[(String, u64)], order: FacetOrder) -> Vec<HistogramEntry> {
    let mut pairs: Vec<HistogramEntry> = facets
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(value, count)| Pair::new(value.clone(), *count))
        .collect();
    if order == FacetOrder::Desc {
        pairs.reverse();
    }
    pairs
}

/// One `(identity, 1)` pair per page document, in page order.
pub fn identity_pairs(docs: &[Document], id_field: &str) -> Vec<Pair<String, u64>> {
    docs.iter()
        .map(|doc| Pair::new(document_key(doc, id_field), 1))
        .collect()
}

/// The ordered hit list with scores stringified.
///
/// A score with no string form becomes empty text, which the engine reports
/// as malformed.
pub fn hit_pairs(hits: &[(String, Value)]) -> Vec<HitEntry> {
    hits.iter()
        .map(|(identity, score)| Pair::new(identity.clone(), field_key(score).unwrap_or_default()))
        .collect()
}
