// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel re-indexing of profile documents.
//!
//! Each profile's keyword set depends only on its own display name, so the
//! work is embarrassingly parallel: `par_iter_mut()` over the profiles. A
//! progress bar is drawn on stderr when it is a terminal.

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::model::UserProfile;
use crate::types::KeywordOptions;

/// Outcome of re-indexing a batch of profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexReport {
    pub profiles: usize,
    /// Profiles that now carry a keyword set.
    pub indexed: usize,
    /// Profiles whose stored keyword set changed.
    pub changed: usize,
}

impl IndexReport {
    /// Profiles without a usable display name.
    pub fn skipped(&self) -> usize {
        self.profiles - self.indexed
    }
}

#[cfg(feature = "parallel")]
fn create_progress_bar(len: usize) -> ProgressBar {
    let style = ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .map(|style| style.progress_chars("━━╸"))
    .unwrap_or_else(|_| ProgressStyle::default_bar());

    let pb = ProgressBar::new(len as u64);
    pb.set_style(style);
    pb.set_prefix("Indexing");
    pb.set_message("profiles...");
    pb
}

/// Recompute `keywordsArrayOfDisplayName` on every profile.
#[cfg(feature = "parallel")]
pub fn reindex_profiles(profiles: &mut [UserProfile], options: &KeywordOptions) -> IndexReport {
    let pb = create_progress_bar(profiles.len());
    let changed = AtomicUsize::new(0);

    profiles.par_iter_mut().for_each(|profile| {
        if profile.reindex(options) {
            changed.fetch_add(1, Ordering::Relaxed);
        }
        pb.inc(1);
    });

    pb.finish_with_message(format!("indexed {} profiles", profiles.len()));
    summarize(profiles, changed.into_inner())
}

#[cfg(not(feature = "parallel"))]
pub fn reindex_profiles(profiles: &mut [UserProfile], options: &KeywordOptions) -> IndexReport {
    let changed = profiles
        .iter_mut()
        .map(|profile| profile.reindex(options))
        .filter(|&changed| changed)
        .count();
    summarize(profiles, changed)
}

fn summarize(profiles: &[UserProfile], changed: usize) -> IndexReport {
    IndexReport {
        profiles: profiles.len(),
        indexed: profiles
            .iter()
            .filter(|p| p.keywords_array_of_display_name.is_some())
            .count(),
        changed,
    }
}
