// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword generation for any-word-order prefix matching.
//!
//! A name like "larisa pargea patricia" is expanded into every prefix of
//! every ordering of its words:
//!
//! ```text
//! "larisa pargea patricia"  →  l, la, ..., larisa pargea patricia
//! "larisa patricia pargea"  →  ..., larisa pat, larisa patr, ...
//! "pargea larisa patricia"  →  p, pa, par, ...
//! ...                          (3! orderings)
//! ```
//!
//! A list filter can then answer "does this record match what the user has
//! typed so far?" with one set lookup, whichever word the user started with.
//! The `""` sentinel is always present so an empty filter matches everything.
//!
//! Cost is factorial in the word count, bounded by
//! [`KeywordOptions::max_permuted_words`].

use std::borrow::Cow;

use crate::verify::contracts::check_keyword_set;
use crate::types::{CaseMode, KeywordOptions, KeywordSet, SplitMode};
use crate::utils::{collapse_whitespace, strip_diacritics};

/// Generate the keyword set of `text` with default options and the given case mode.
///
/// Returns `None` for empty text: "not applicable" is distinct from an empty set.
///
/// ```
/// use namekeys::{generate_keywords, CaseMode};
///
/// let keywords = generate_keywords("Ana Pop", CaseMode::Insensitive).unwrap();
/// assert!(keywords.contains("pop a"));
/// assert!(keywords.contains(""));
/// assert!(generate_keywords("", CaseMode::Sensitive).is_none());
/// ```
pub fn generate_keywords(text: &str, case: CaseMode) -> Option<KeywordSet> {
    generate_keywords_with(text, &KeywordOptions::with_case(case))
}

/// Boundary form for values that may be absent.
pub fn generate_keywords_opt(text: Option<&str>, case: CaseMode) -> Option<KeywordSet> {
    text.and_then(|text| generate_keywords(text, case))
}

/// Boundary form for loosely typed JSON documents: anything that is not a
/// string (null, numbers, objects) is "not applicable".
pub fn keywords_from_json(value: &serde_json::Value, case: CaseMode) -> Option<KeywordSet> {
    value.as_str().and_then(|text| generate_keywords(text, case))
}

/// Generate the keyword set of `text` with explicit options.
pub fn generate_keywords_with(text: &str, options: &KeywordOptions) -> Option<KeywordSet> {
    let text = prepare(text, options);
    if text.is_empty() {
        return None;
    }

    let mut chars = text.chars();
    if let (Some(_), None) = (chars.next(), chars.next()) {
        let folded = options.case.fold(&text);
        // "İ" lower-cases to two chars; those need the general path's prefixes.
        if folded.chars().count() == 1 {
            let mut keywords = KeywordSet::with_sentinel();
            keywords.insert(folded);
            return Some(keywords);
        }
    }

    let words = split_words(&text, options.split);
    let mut keywords = KeywordSet::with_sentinel();
    for_each_ordering(&words, options.max_permuted_words, |ordering| {
        let joined = options.case.fold(&ordering.join(" "));
        push_prefixes(&mut keywords, &joined);
    });

    check_keyword_set(&keywords, options.case);
    Some(keywords)
}

/// Apply the text-level options that run before splitting.
fn prepare<'a>(text: &'a str, options: &KeywordOptions) -> Cow<'a, str> {
    let mut text = Cow::Borrowed(text);
    if options.fold_diacritics {
        text = Cow::Owned(strip_diacritics(&text));
    }
    if options.split == SplitMode::Whitespace {
        text = Cow::Owned(collapse_whitespace(&text));
    }
    text
}

fn split_words(text: &str, split: SplitMode) -> Vec<&str> {
    match split {
        SplitMode::Literal => text.split(' ').collect(),
        SplitMode::Whitespace => text.split_whitespace().collect(),
    }
}

/// Call `visit` once per distinct ordering of `words`.
///
/// Repeated words are treated as a multiset, so "ana ana" yields a single
/// ordering. Words past `cap` keep their original order after the permuted head.
fn for_each_ordering<F>(words: &[&str], cap: Option<usize>, mut visit: F)
where
    F: FnMut(&[&str]),
{
    let split_at = cap.map_or(words.len(), |cap| cap.min(words.len()));
    let (head, tail) = words.split_at(split_at);

    let mut ordering: Vec<&str> = head.to_vec();
    ordering.sort_unstable();
    ordering.extend_from_slice(tail);

    loop {
        visit(&ordering);
        if !next_permutation(&mut ordering[..split_at]) {
            break;
        }
    }
}

/// Rearrange `items` into the next lexicographically greater permutation.
///
/// Returns `false` once the last permutation has been reached. Starting from
/// sorted order, this visits every distinct permutation exactly once.
fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `pivot + 1`.
    let mut pivot = items.len() - 1;
    while pivot > 0 && items[pivot - 1] >= items[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }
    let pivot = pivot - 1;

    let mut successor = items.len() - 1;
    while items[successor] <= items[pivot] {
        successor -= 1;
    }
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

/// Insert every non-empty prefix of `joined`, cut on character boundaries.
fn push_prefixes(keywords: &mut KeywordSet, joined: &str) {
    // Prefix-closed: if the full string is in, so is every prefix.
    if keywords.contains(joined) {
        return;
    }
    for (offset, c) in joined.char_indices() {
        keywords.insert(joined[..offset + c.len_utf8()].to_string());
    }
}
