// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Peg evaluations and their overall rating.
//!
//! An evaluation document carries a few header fields and one object per
//! rated criterion, keyed by criterion:
//!
//! ```json
//! { "evaluatedBy": "u1", "requestedBy": "u2", "projectId": "p1",
//!   "teamwork": { "type": "teamwork", "rating": 4, "comments": "..." } }
//! ```
//!
//! Criteria are not a fixed list, so they are kept as loose JSON and read
//! through [`PegEvaluation::criteria`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PegEvaluation {
    #[serde(default)]
    pub doc_id: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub evaluated_by: String,
    #[serde(default)]
    pub requested_by: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub peg_request_id: Option<String>,
    /// Every other field. Object values are rated criteria.
    #[serde(flatten)]
    pub entries: BTreeMap<String, Value>,
}

/// One rated criterion, borrowed from its evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PegCriterion<'a> {
    pub key: &'a str,
    pub kind: Option<&'a str>,
    /// `None` when the stored rating is missing or not numeric.
    pub rating: Option<i64>,
    pub comments: Option<&'a str>,
}

impl<'a> PegCriterion<'a> {
    fn from_entry(key: &'a str, entry: &'a Map<String, Value>) -> Self {
        Self {
            key,
            kind: entry.get("type").and_then(Value::as_str),
            rating: entry.get("rating").and_then(parse_rating),
            comments: entry.get("comments").and_then(Value::as_str),
        }
    }
}

impl PegEvaluation {
    /// Object-valued entries, in key order. Scalar extra fields are skipped.
    pub fn criteria(&self) -> impl Iterator<Item = PegCriterion<'_>> {
        self.entries.iter().filter_map(|(key, value)| {
            value
                .as_object()
                .map(|entry| PegCriterion::from_entry(key, entry))
        })
    }

    /// Mean of every criterion with a numeric rating.
    ///
    /// Returns `None` when no criterion has one.
    pub fn overall_rating(&self) -> Option<f64> {
        let (sum, count) = self
            .criteria()
            .filter_map(|criterion| criterion.rating)
            .fold((0i64, 0u32), |(sum, count), rating| (sum + rating, count + 1));
        (count > 0).then(|| sum as f64 / f64::from(count))
    }

    /// The overall rating with two decimals, as shown next to the criteria.
    pub fn overall_rating_label(&self) -> Option<String> {
        self.overall_rating().map(|rating| format!("{rating:.2}"))
    }
}

/// Whole-number part of a numeric rating. Numeric strings count too.
fn parse_rating(value: &Value) -> Option<i64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then(|| number.trunc() as i64)
}
