// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for typed-text matching.
//!
//! A name must always match the typed text made of any of its word-boundary
//! prefixes, and padding around the typed text must not change the answer.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use namekeys::{generate_keywords, CaseMode, KeywordQuery};

#[derive(Debug, Arbitrary)]
struct MatchInput {
    name: String,
    typed: String,
    cut: u8,
}

fuzz_target!(|input: MatchInput| {
    let name: String = input.name.chars().take(30).collect();
    let typed: String = input.typed.chars().take(30).collect();

    let query = KeywordQuery::insensitive(&typed);
    let padded = KeywordQuery::insensitive(&format!("  {typed}\t"));
    assert_eq!(
        query.matches_name(Some(&name)),
        padded.matches_name(Some(&name))
    );

    let Some(keywords) = generate_keywords(&name, CaseMode::Insensitive) else {
        assert!(!query.matches_name(Some(&name)));
        return;
    };
    assert!(KeywordQuery::insensitive("").matches(&keywords));

    // Typed text is a prefix of the folded name itself.
    let folded = name.to_lowercase();
    let end = folded
        .char_indices()
        .map(|(idx, _)| idx)
        .nth(usize::from(input.cut))
        .unwrap_or(folded.len());
    let prefix = &folded[..end];
    if prefix.trim() == prefix {
        assert!(KeywordQuery::insensitive(prefix).matches(&keywords));
    }
});
