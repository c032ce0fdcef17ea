// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing and batching.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Largest number of values a document-store "in" query accepts.
pub const IN_QUERY_LIMIT: usize = 10;

/// Normalize a string for search: lowercase, strip diacritics, and collapse whitespace.
///
/// - "Pârgea" → "pargea"
/// - "  Larisa   Pargea " → "larisa pargea"
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    collapse_whitespace(&strip_diacritics(value).to_lowercase())
}

/// Lightweight normalization without unicode-normalization.
/// Just lowercases and collapses whitespace.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    collapse_whitespace(&value.to_lowercase())
}

/// Remove combining marks after NFD decomposition, keeping the case.
///
/// "Ștefan Pârgea" → "Stefan Pargea"
#[cfg(feature = "unicode-normalization")]
pub fn strip_diacritics(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn strip_diacritics(value: &str) -> String {
    value.to_string()
}

/// Join whitespace-separated words with single spaces.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Split `items` into consecutive chunks of at most `size` elements.
///
/// Used to batch id lists into queries that accept at most
/// [`IN_QUERY_LIMIT`] values. A `size` of zero yields no chunks.
pub fn chunks<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    items.chunks(size).map(<[T]>::to_vec).collect()
}
