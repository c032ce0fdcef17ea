// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix keyword sets for any-word-order name filtering.
//!
//! A display name such as `"Larisa Pargea"` is expanded at write time into
//! every prefix of every ordering of its words. A typed filter fragment then
//! matches with a single set-membership test, whatever word the user started
//! with: `"parg"`, `"larisa p"` and `"pargea lar"` all hit.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│ keywords.rs  │────▶│  matcher.rs  │
//! │ (KeywordSet,│     │ (generate_   │     │(KeywordQuery,│
//! │  CaseMode)  │     │  keywords)   │     │StoredKeywords│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │      model/ (UserProfile)   feedback.rs (lists)      │
//! └─────────────────────────────────────────────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌──────────────────────┐          ┌────────────────────────┐
//! │ verify/ (invariants, │          │ build/ (index, check,  │
//! │  debug contracts)    │          │  filter over JSON)     │
//! └──────────────────────┘          └────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use namekeys::{generate_keywords, CaseMode, KeywordQuery};
//!
//! let keywords = generate_keywords("Larisa Pargea", CaseMode::Insensitive).unwrap();
//! assert!(keywords.contains("pargea l"));
//! assert!(KeywordQuery::insensitive("  PARG ").matches(&keywords));
//! ```

pub mod build;
pub mod config;
mod error;
pub mod feedback;
mod keywords;
mod matcher;
pub mod model;
mod types;
mod utils;
pub mod verify;

pub use config::{Config, FilterConfig};
pub use error::{Error, Result};
pub use feedback::{
    Feedback, FeedbackCategory, FeedbackError, FeedbackRequest, Rating, ReceivedFeedback,
    RequestStatusFilter, ResolvedFeedbackRequest, SentFeedback, UserRef,
};
pub use keywords::{
    generate_keywords, generate_keywords_opt, generate_keywords_with, keywords_from_json,
};
pub use matcher::{KeywordQuery, StoredKeywords};
pub use model::{PegEvaluation, Role, UserProfile};
pub use types::{CaseMode, KeywordOptions, KeywordSet, SplitMode, DEFAULT_MAX_PERMUTED_WORDS};
pub use utils::{chunks, normalize, strip_diacritics, IN_QUERY_LIMIT};
pub use verify::{verify_keyword_set, InvariantError, ValidatedKeywordSet};
