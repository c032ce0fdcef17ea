// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the namekeys command-line interface.
//!
//! Four subcommands: `keywords` to expand one name, `index` to re-index a
//! profile export, `check` to verify stored keyword sets, and `filter` to run
//! the request-list filters over an export.

pub mod display;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use namekeys::{CaseMode, KeywordOptions, RequestStatusFilter, SplitMode};

#[derive(Parser)]
#[command(
    name = "namekeys",
    about = "Prefix keyword sets for any-word-order name filtering",
    version
)]
pub struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the keyword set of a name
    Keywords {
        /// Display name to expand
        text: String,

        #[command(flatten)]
        options: KeywordArgs,

        /// Print a JSON array (or null when not applicable)
        #[arg(long)]
        json: bool,
    },

    /// Recompute keywordsArrayOfDisplayName for every profile in a JSON export
    Index {
        /// JSON array of user profiles
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the re-indexed profiles
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        options: KeywordArgs,
    },

    /// Verify stored keyword sets against their display names
    Check {
        /// JSON array of user profiles
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        options: KeywordArgs,
    },

    /// Sort and filter a JSON export of resolved feedback requests
    Filter {
        /// JSON array of feedback requests with answeredByFull/requestedOnFull
        #[arg(short, long)]
        input: PathBuf,

        /// Typed user filter text
        #[arg(short, long)]
        user: Option<String>,

        #[arg(short, long, value_enum, default_value_t = StatusArg::All)]
        status: StatusArg,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Keyword options; unset flags keep the config file's values.
#[derive(Args, Debug, Default)]
pub struct KeywordArgs {
    /// Keep or lower-case the case of every fragment
    #[arg(long, value_enum)]
    pub case: Option<CaseArg>,

    /// How to cut the name into words
    #[arg(long, value_enum)]
    pub split: Option<SplitArg>,

    /// Permute at most this many leading words
    #[arg(long, conflicts_with = "no_cap")]
    pub max_words: Option<usize>,

    /// Permute every word, however many
    #[arg(long)]
    pub no_cap: bool,

    /// Strip diacritics before splitting
    #[arg(long)]
    pub fold_diacritics: bool,
}

impl KeywordArgs {
    pub fn apply(&self, mut options: KeywordOptions) -> KeywordOptions {
        if let Some(case) = self.case {
            options.case = case.into();
        }
        if let Some(split) = self.split {
            options.split = split.into();
        }
        if let Some(max_words) = self.max_words {
            options.max_permuted_words = Some(max_words);
        }
        if self.no_cap {
            options.max_permuted_words = None;
        }
        if self.fold_diacritics {
            options.fold_diacritics = true;
        }
        options
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CaseArg {
    Sensitive,
    Insensitive,
}

impl From<CaseArg> for CaseMode {
    fn from(arg: CaseArg) -> Self {
        match arg {
            CaseArg::Sensitive => CaseMode::Sensitive,
            CaseArg::Insensitive => CaseMode::Insensitive,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SplitArg {
    Literal,
    Whitespace,
}

impl From<SplitArg> for SplitMode {
    fn from(arg: SplitArg) -> Self {
        match arg {
            SplitArg::Literal => SplitMode::Literal,
            SplitArg::Whitespace => SplitMode::Whitespace,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StatusArg {
    All,
    NotAnsweredYet,
    Answered,
}

impl From<StatusArg> for RequestStatusFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::All => RequestStatusFilter::All,
            StatusArg::NotAnsweredYet => RequestStatusFilter::NotAnsweredYet,
            StatusArg::Answered => RequestStatusFilter::Answered,
        }
    }
}
