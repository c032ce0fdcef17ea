// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword-set invariants as checked values.
//!
//! | Invariant        | Meaning                                             |
//! |------------------|-----------------------------------------------------|
//! | sentinel         | `""` is a member                                    |
//! | prefix closure   | every non-empty prefix of a member is a member      |
//! | folded           | case-insensitive sets hold no upper-case characters |

use thiserror::Error;

use crate::types::{CaseMode, KeywordSet};

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// The `""` sentinel is missing.
    #[error("keyword set has no \"\" sentinel")]
    MissingSentinel,
    /// A member's prefix is not itself a member.
    #[error("prefix {prefix:?} of keyword {keyword:?} is missing")]
    MissingPrefix { keyword: String, prefix: String },
    /// A case-insensitive set holds a member that lower-casing would change.
    #[error("keyword {keyword:?} is not lower-case in a case-insensitive set")]
    NotFolded { keyword: String },
}

/// Check every invariant of `keywords` under `case`.
///
/// Returns the first violation found, scanning members in ascending order.
pub fn verify_keyword_set(keywords: &KeywordSet, case: CaseMode) -> Result<(), InvariantError> {
    if !keywords.has_sentinel() {
        return Err(InvariantError::MissingSentinel);
    }

    for keyword in keywords.iter() {
        if case == CaseMode::Insensitive && keyword.to_lowercase() != keyword {
            return Err(InvariantError::NotFolded {
                keyword: keyword.to_string(),
            });
        }

        // Checking the immediate prefix is enough: it is checked in turn.
        if let Some((last, _)) = keyword.char_indices().next_back() {
            let prefix = &keyword[..last];
            if !prefix.is_empty() && !keywords.contains(prefix) {
                return Err(InvariantError::MissingPrefix {
                    keyword: keyword.to_string(),
                    prefix: prefix.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// A keyword set whose invariants have been checked under a known case mode.
///
/// # Invariants (enforced at construction)
/// - contains the `""` sentinel
/// - prefix-closed
/// - lower-case throughout when `case` is insensitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedKeywordSet {
    inner: KeywordSet,
    case: CaseMode,
}

impl ValidatedKeywordSet {
    pub fn new(keywords: KeywordSet, case: CaseMode) -> Result<Self, InvariantError> {
        verify_keyword_set(&keywords, case)?;
        Ok(Self {
            inner: keywords,
            case,
        })
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.inner
    }

    pub fn case(&self) -> CaseMode {
        self.case
    }

    pub fn into_inner(self) -> KeywordSet {
        self.inner
    }
}
