// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for generated keyword sets.
//!
//! Debug-mode assertions only: release builds compile these to nothing.
//!
//! ```ignore
//! // In debug builds, this panics if the set is not prefix-closed
//! check_keyword_set(&keywords, CaseMode::Insensitive);
//! ```

use crate::types::{CaseMode, KeywordSet};

/// Check that a generated keyword set satisfies every invariant.
///
/// # Panics (debug builds only)
/// Panics with the violated invariant.
#[inline]
pub fn check_keyword_set(keywords: &KeywordSet, case: CaseMode) {
    #[cfg(debug_assertions)]
    if let Err(violation) = crate::verify::verify_keyword_set(keywords, case) {
        panic!("keyword set contract violated: {}", violation);
    }
    #[cfg(not(debug_assertions))]
    let _ = (keywords, case);
}
