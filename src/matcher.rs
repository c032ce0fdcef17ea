// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Read-time matching of typed filter text against keyword sets.
//!
//! Keyword sets are usually written case-sensitive (when a profile is saved)
//! and queried case-insensitive (when a user types into a list filter). A
//! stored set is therefore only trusted when its case mode equals the
//! query's; otherwise the display name is re-indexed with the query's mode.
//! [`StoredKeywords`] carries that mode alongside the set.

use serde::{Deserialize, Serialize};

use crate::keywords::generate_keywords;
use crate::types::{CaseMode, KeywordSet};
use crate::verify::ValidatedKeywordSet;

/// A keyword set together with the case mode it was generated with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredKeywords {
    pub case: CaseMode,
    pub keywords: KeywordSet,
}

impl StoredKeywords {
    pub fn new(case: CaseMode, keywords: KeywordSet) -> Self {
        Self { case, keywords }
    }
}

impl From<ValidatedKeywordSet> for StoredKeywords {
    fn from(validated: ValidatedKeywordSet) -> Self {
        let case = validated.case();
        Self::new(case, validated.into_inner())
    }
}

/// Typed filter text, trimmed and folded once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordQuery {
    fragment: String,
    case: CaseMode,
}

impl KeywordQuery {
    pub fn new(input: &str, case: CaseMode) -> Self {
        Self {
            fragment: case.fold(input.trim()),
            case,
        }
    }

    /// Case-insensitive query, as list filters use.
    pub fn insensitive(input: &str) -> Self {
        Self::new(input, CaseMode::Insensitive)
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn case(&self) -> CaseMode {
        self.case
    }

    /// The empty query is the sentinel: it matches every keyword set.
    pub fn is_empty(&self) -> bool {
        self.fragment.is_empty()
    }

    pub fn matches(&self, keywords: &KeywordSet) -> bool {
        keywords.contains(&self.fragment)
    }

    /// Index `name` with the query's case mode and test membership.
    ///
    /// An absent or empty name never matches, not even the empty query.
    pub fn matches_name(&self, name: Option<&str>) -> bool {
        name.and_then(|name| generate_keywords(name, self.case))
            .is_some_and(|keywords| self.matches(&keywords))
    }

    /// Use `stored` when it was generated with this query's case mode,
    /// otherwise fall back to indexing `name`.
    pub fn matches_stored(&self, stored: Option<&StoredKeywords>, name: Option<&str>) -> bool {
        match stored {
            Some(stored) if stored.case == self.case => self.matches(&stored.keywords),
            _ => self.matches_name(name),
        }
    }
}
