// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! File-level jobs behind the CLI: re-index profiles, check stored keyword
//! sets, and filter feedback request lists. Input and output are JSON arrays
//! of store documents.

pub mod parallel;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::feedback::{
    filter_requests_by_query, sort_requests, RequestStatusFilter, ResolvedFeedbackRequest,
};
use crate::keywords::generate_keywords_with;
use crate::matcher::KeywordQuery;
use crate::model::UserProfile;
use crate::types::{CaseMode, KeywordOptions};
use crate::verify::{verify_keyword_set, InvariantError};

pub use parallel::{reindex_profiles, IndexReport};

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `value` as pretty JSON, creating parent directories as needed.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(Error::Encode)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, json + "\n").map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Re-index every profile in `input` and write the result to `output`.
pub fn run_index(input: &Path, output: &Path, options: &KeywordOptions) -> Result<IndexReport> {
    let mut profiles: Vec<UserProfile> = read_json(input)?;
    info!(count = profiles.len(), input = %input.display(), "loaded profiles");

    let report = reindex_profiles(&mut profiles, options);
    if report.skipped() > 0 {
        warn!(skipped = report.skipped(), "profiles without a display name were not indexed");
    }

    write_json(output, &profiles)?;
    info!(
        indexed = report.indexed,
        changed = report.changed,
        output = %output.display(),
        "wrote profiles"
    );
    Ok(report)
}

/// What is wrong with a stored keyword set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViolationKind {
    #[error(transparent)]
    Invariant(#[from] InvariantError),
    /// The profile has a display name but no keyword set.
    #[error("display name is not indexed")]
    NotIndexed,
    /// The stored set differs from what the display name produces now.
    #[error("keyword set is stale for display name {0:?}")]
    Stale(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub uid: String,
    pub kind: ViolationKind,
}

/// Check every profile's stored keyword set under `options`.
pub fn check_profiles(profiles: &[UserProfile], options: &KeywordOptions) -> Vec<Violation> {
    profiles
        .iter()
        .filter_map(|profile| {
            check_profile(profile, options).err().map(|kind| Violation {
                uid: profile.uid.clone(),
                kind,
            })
        })
        .collect()
}

fn check_profile(profile: &UserProfile, options: &KeywordOptions) -> std::result::Result<(), ViolationKind> {
    let expected = profile
        .display_name
        .as_deref()
        .and_then(|name| generate_keywords_with(name, options));

    match (&profile.keywords_array_of_display_name, expected) {
        (None, None) => Ok(()),
        (None, Some(_)) => Err(ViolationKind::NotIndexed),
        (Some(stored), expected) => {
            verify_keyword_set(stored, options.case)?;
            if expected.as_ref() != Some(stored) {
                return Err(ViolationKind::Stale(
                    profile.display_name.clone().unwrap_or_default(),
                ));
            }
            Ok(())
        }
    }
}

/// Result of checking a profile export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub checked: usize,
    pub violations: Vec<Violation>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

pub fn run_check(input: &Path, options: &KeywordOptions) -> Result<CheckReport> {
    let profiles: Vec<UserProfile> = read_json(input)?;
    let violations = check_profiles(&profiles, options);
    for violation in &violations {
        warn!(uid = %violation.uid, "{}", violation.kind);
    }
    info!(
        checked = profiles.len(),
        violations = violations.len(),
        "checked keyword sets"
    );
    Ok(CheckReport {
        checked: profiles.len(),
        violations,
    })
}

/// Sort, then apply the status filter, then the user filter, as the request
/// list does.
pub fn filter_requests(
    mut requests: Vec<ResolvedFeedbackRequest>,
    user: Option<&KeywordQuery>,
    status: RequestStatusFilter,
) -> Vec<ResolvedFeedbackRequest> {
    sort_requests(&mut requests);
    let by_status: Vec<ResolvedFeedbackRequest> =
        status.apply(&requests).into_iter().cloned().collect();

    match user {
        Some(query) => filter_requests_by_query(&by_status, query)
            .into_iter()
            .cloned()
            .collect(),
        None => by_status,
    }
}

/// Load resolved requests from `input` and filter them. `case` governs how the
/// typed `user` text is matched.
pub fn run_filter(
    input: &Path,
    user: Option<&str>,
    status: RequestStatusFilter,
    case: CaseMode,
) -> Result<Vec<ResolvedFeedbackRequest>> {
    let requests: Vec<ResolvedFeedbackRequest> = read_json(input)?;
    let total = requests.len();
    let query = user.map(|user| KeywordQuery::new(user, case));
    let filtered = filter_requests(requests, query.as_ref(), status);
    debug!(total, kept = filtered.len(), status = status.label(), "filtered requests");
    Ok(filtered)
}
