// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: checked keyword sets and runtime contracts.
//!
//! Two complementary approaches:
//!
//! 1. **Checked wrappers** (`ValidatedKeywordSet`) for keyword sets that come
//!    from outside, e.g. a `keywordsArrayOfDisplayName` field loaded from a
//!    profile document written by another client. Construction verifies the
//!    invariants once; afterwards the set can be trusted.
//!
//! 2. **Runtime contracts** that panic in debug builds when a freshly
//!    generated set violates an invariant. Zero-cost in release.

mod types;
pub mod contracts;

pub use types::*;
