//! Word orderings: permutation coverage, repeated words, the word cap and the
//! split modes.

use super::common::{name_strategy, prefixes};
use namekeys::{
    generate_keywords, generate_keywords_with, CaseMode, KeywordOptions, KeywordSet, SplitMode,
};
use proptest::prelude::*;

fn with_cap(cap: Option<usize>) -> KeywordOptions {
    KeywordOptions {
        max_permuted_words: cap,
        ..KeywordOptions::default()
    }
}

/// Builds the expected set by hand from a list of orderings.
fn expected_from(orderings: &[&str]) -> KeywordSet {
    orderings
        .iter()
        .flat_map(|ordering| prefixes(ordering))
        .collect()
}

#[test]
fn permutation_coverage_two_words() {
    let keywords = generate_keywords("ab cd", CaseMode::Sensitive).unwrap();
    for prefix in prefixes("ab cd").into_iter().chain(prefixes("cd ab")) {
        assert!(keywords.contains(prefix), "missing {prefix:?}");
    }
}

#[test]
fn repeated_words_yield_one_ordering() {
    let keywords = generate_keywords("ana ana", CaseMode::Sensitive).unwrap();
    assert_eq!(keywords, expected_from(&["ana ana"]));
}

#[test]
fn partially_repeated_words() {
    let keywords = generate_keywords("ana pop ana", CaseMode::Sensitive).unwrap();
    assert_eq!(
        keywords,
        expected_from(&["ana ana pop", "ana pop ana", "pop ana ana"])
    );
}

#[test]
fn cap_keeps_tail_in_place() {
    let keywords = generate_keywords_with("cc aa bb", &with_cap(Some(2))).unwrap();
    assert_eq!(keywords, expected_from(&["cc aa bb", "aa cc bb"]));
    assert!(!keywords.contains("bb"));
}

#[test]
fn cap_of_zero_keeps_original_order() {
    let keywords = generate_keywords_with("cc aa bb", &with_cap(Some(0))).unwrap();
    assert_eq!(keywords, expected_from(&["cc aa bb"]));
}

#[test]
fn default_cap_permutes_five_words() {
    let keywords = generate_keywords("e d c b a f", CaseMode::Sensitive).unwrap();
    // The sixth word never leads.
    assert!(!keywords.contains("f"));
    for lead in ["a", "b", "c", "d", "e"] {
        assert!(keywords.contains(lead));
    }
    assert!(keywords.contains("a b c d e f"));
    assert!(!keywords.contains("a b c d f"));
}

#[test]
fn uncapped_permutes_every_word() {
    let keywords = generate_keywords_with("e d c b a f", &with_cap(None)).unwrap();
    assert!(keywords.contains("f e"));
}

#[test]
fn literal_split_keeps_empty_words() {
    // Two spaces make an empty middle word, permuted like any other.
    let keywords = generate_keywords("ab  cd", CaseMode::Sensitive).unwrap();
    assert!(keywords.contains("ab  cd"));
    assert!(keywords.contains(" ab cd"));
    assert!(keywords.contains("cd ab "));
}

#[test]
fn whitespace_split_collapses_runs() {
    let options = KeywordOptions {
        split: SplitMode::Whitespace,
        ..KeywordOptions::default()
    };
    let keywords = generate_keywords_with("  ab \t cd ", &options).unwrap();
    assert_eq!(keywords, expected_from(&["ab cd", "cd ab"]));
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn diacritics_are_folded_on_request() {
    let options = KeywordOptions {
        case: CaseMode::Insensitive,
        fold_diacritics: true,
        ..KeywordOptions::default()
    };
    let keywords = generate_keywords_with("\u{218}tefan Mu\u{308}ller", &options).unwrap();
    assert!(keywords.contains("stefan m"));
    assert!(keywords.contains("muller s"));
    assert!(!keywords.contains("\u{219}"));
}

fn factorial(n: usize) -> usize {
    (1..=n).product()
}

proptest! {
    #[test]
    fn prop_every_ordering_starts_somewhere(name in name_strategy()) {
        let keywords = generate_keywords(&name, CaseMode::Sensitive).unwrap();
        for word in name.split(' ') {
            let lead = format!("{word} ");
            // Single-word names have no trailing separator.
            prop_assert!(keywords.contains(word));
            if name.contains(' ') {
                prop_assert!(keywords.contains(&lead));
            }
        }
    }

    #[test]
    fn prop_full_orderings_bounded_by_factorial(name in name_strategy()) {
        let keywords = generate_keywords(&name, CaseMode::Sensitive).unwrap();
        let len = name.chars().count();
        let full = keywords.iter().filter(|m| m.chars().count() == len).count();
        let words = name.split(' ').count();
        prop_assert!(full >= 1);
        prop_assert!(full <= factorial(words));
    }

    #[test]
    fn prop_cap_never_moves_tail(
        words in prop::collection::vec("[a-z]{2,4}", 3..6),
        cap in 0usize..3,
    ) {
        let name = words.join(" ");
        let keywords = generate_keywords_with(&name, &with_cap(Some(cap))).unwrap();
        let tail = words[cap.max(1)..].join(" ");
        let len = name.len();
        for full in keywords.iter().filter(|m| m.len() == len) {
            prop_assert!(full.ends_with(&tail), "{:?} moved tail {:?}", full, tail);
        }
    }
}
