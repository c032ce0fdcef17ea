// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! JSON configuration file.
//!
//! ```json
//! {
//!   "keywords": { "case": "sensitive", "split": "literal", "maxPermutedWords": 5 },
//!   "filter": { "case": "insensitive" }
//! }
//! ```
//!
//! Every field is optional. Command-line flags override file values.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::build::read_json;
use crate::error::Result;
use crate::types::{CaseMode, KeywordOptions};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Options used when keyword sets are written.
    pub keywords: KeywordOptions,
    pub filter: FilterConfig,
}

/// Options used when typed filter text is matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
    pub case: CaseMode,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            case: CaseMode::Insensitive,
        }
    }
}

impl Config {
    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config: Config = read_json(path)?;
                tracing::debug!(path = %path.display(), ?config, "loaded config");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}
