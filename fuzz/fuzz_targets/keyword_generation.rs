// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for keyword generation.
//!
//! Arbitrary text and options must never panic, and every generated set must
//! pass the invariant checks: sentinel, prefix closure, folding.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use namekeys::{
    generate_keywords_with, verify_keyword_set, CaseMode, KeywordOptions, SplitMode,
};

#[derive(Debug, Arbitrary)]
struct GenerateInput {
    text: String,
    insensitive: bool,
    whitespace: bool,
    fold_diacritics: bool,
    cap: Option<u8>,
}

fuzz_target!(|input: GenerateInput| {
    // Keep the word count small; generation is factorial in it.
    let text: String = input.text.chars().take(40).collect();
    let cap = input.cap.map(|cap| usize::from(cap % 5));

    let options = KeywordOptions {
        case: if input.insensitive {
            CaseMode::Insensitive
        } else {
            CaseMode::Sensitive
        },
        split: if input.whitespace {
            SplitMode::Whitespace
        } else {
            SplitMode::Literal
        },
        max_permuted_words: Some(cap.unwrap_or(4)),
        fold_diacritics: input.fold_diacritics,
    };

    match generate_keywords_with(&text, &options) {
        None => {
            // Only empty (or, when collapsing, blank) text is not applicable.
            if input.whitespace {
                assert!(text.split_whitespace().next().is_none() || input.fold_diacritics);
            } else {
                assert!(text.is_empty() || input.fold_diacritics);
            }
        }
        Some(keywords) => {
            assert!(keywords.len() >= 2);
            verify_keyword_set(&keywords, options.case).expect("generated set is well formed");
        }
    }
});
