// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core types shared by the indexer, the matcher and the profile model.

use serde::{Deserialize, Serialize};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

/// Whether generated fragments keep the original case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    #[default]
    Sensitive,
    Insensitive,
}

impl CaseMode {
    /// Apply the case policy to a piece of text.
    pub fn fold(self, text: &str) -> String {
        match self {
            CaseMode::Sensitive => text.to_string(),
            CaseMode::Insensitive => text.to_lowercase(),
        }
    }
}

/// How a name is cut into words before permuting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Split on the single space character. Consecutive spaces yield empty
    /// words, which take part in joins like any other word.
    #[default]
    Literal,
    /// Split on any whitespace run and drop empty words.
    Whitespace,
}

/// A deduplicated set of keyword fragments.
///
/// Iteration is in ascending byte order, so the `""` sentinel is always
/// yielded first. Serialized as a plain JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Create a set holding only the `""` sentinel.
    pub fn with_sentinel() -> Self {
        let mut set = Self::new();
        set.insert(String::new());
        set
    }

    /// Insert a fragment. Returns `false` if it was already present.
    pub fn insert(&mut self, fragment: String) -> bool {
        self.0.insert(fragment)
    }

    pub fn contains(&self, fragment: &str) -> bool {
        self.0.contains(fragment)
    }

    pub fn has_sentinel(&self) -> bool {
        self.0.contains("")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromIterator<String> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

impl Extend<String> for KeywordSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for KeywordSet {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for KeywordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, fragment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", fragment)?;
        }
        write!(f, "}}")
    }
}

/// Options for keyword generation.
///
/// `max_permuted_words` bounds the factorial blow-up: only the leading words
/// up to the cap are permuted, the rest follow in their original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeywordOptions {
    pub case: CaseMode,
    pub split: SplitMode,
    pub max_permuted_words: Option<usize>,
    /// Strip diacritics before splitting. Ignored without the
    /// `unicode-normalization` feature.
    pub fold_diacritics: bool,
}

/// Default cap on permuted words. 5! = 120 orderings.
pub const DEFAULT_MAX_PERMUTED_WORDS: usize = 5;

impl Default for KeywordOptions {
    fn default() -> Self {
        Self {
            case: CaseMode::default(),
            split: SplitMode::default(),
            max_permuted_words: Some(DEFAULT_MAX_PERMUTED_WORDS),
            fold_diacritics: false,
        }
    }
}

impl KeywordOptions {
    pub fn with_case(case: CaseMode) -> Self {
        Self {
            case,
            ..Self::default()
        }
    }
}
