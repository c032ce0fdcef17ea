//! Shape of a generated keyword set: sentinel, prefix closure, case folding.

use super::common::{
    assert_prefix_closed, case_strategy, name_strategy, prefixes, unicode_name_strategy,
};
use namekeys::{
    generate_keywords, generate_keywords_opt, generate_keywords_with, keywords_from_json,
    verify_keyword_set, CaseMode, KeywordOptions, KeywordSet, SplitMode,
};
use proptest::prelude::*;
use serde_json::json;

// ============================================================================
// NOT APPLICABLE
// ============================================================================

#[test]
fn null_for_invalid_input() {
    for case in [CaseMode::Sensitive, CaseMode::Insensitive] {
        assert_eq!(generate_keywords("", case), None);
        assert_eq!(generate_keywords_opt(None, case), None);
        assert_eq!(keywords_from_json(&json!(null), case), None);
        assert_eq!(keywords_from_json(&json!(123), case), None);
        assert_eq!(keywords_from_json(&json!(["ab"]), case), None);
        assert_eq!(keywords_from_json(&json!(""), case), None);
    }
}

#[test]
fn json_string_is_indexed() {
    let keywords = keywords_from_json(&json!("ab cd"), CaseMode::Sensitive).unwrap();
    assert!(keywords.contains("cd a"));
}

#[test]
fn blank_text_in_whitespace_mode_is_not_applicable() {
    let options = KeywordOptions {
        split: SplitMode::Whitespace,
        ..KeywordOptions::default()
    };
    assert_eq!(generate_keywords_with("   \t ", &options), None);
}

// ============================================================================
// EXAMPLES
// ============================================================================

#[test]
fn single_char_fast_path() {
    let expected: KeywordSet = ["", "a"].into_iter().collect();
    assert_eq!(generate_keywords("a", CaseMode::Sensitive), Some(expected.clone()));
    assert_eq!(generate_keywords("A", CaseMode::Insensitive), Some(expected));

    let upper: KeywordSet = ["", "A"].into_iter().collect();
    assert_eq!(generate_keywords("A", CaseMode::Sensitive), Some(upper));
}

#[test]
fn single_multibyte_char() {
    let keywords = generate_keywords("\u{218}", CaseMode::Insensitive).unwrap();
    assert_eq!(keywords.len(), 2);
    assert!(keywords.contains("\u{219}"));
}

#[test]
fn two_words_exact_set() {
    let keywords = generate_keywords("ab cd", CaseMode::Sensitive).unwrap();
    let expected: KeywordSet = [
        "", "a", "ab", "ab ", "ab c", "ab cd", "c", "cd", "cd ", "cd a", "cd ab",
    ]
    .into_iter()
    .collect();
    assert_eq!(keywords, expected);
}

#[test]
fn case_folding_both_ways() {
    let sensitive = generate_keywords("AB CD", CaseMode::Sensitive).unwrap();
    for member in ["A", "AB C", "CD AB"] {
        assert!(sensitive.contains(member), "missing {member:?}");
    }
    assert!(!sensitive.contains("ab"));

    let insensitive = generate_keywords("AB CD", CaseMode::Insensitive).unwrap();
    for member in ["a", "ab c", "cd ab"] {
        assert!(insensitive.contains(member), "missing {member:?}");
    }
    assert!(!insensitive.contains("AB"));
}

#[test]
fn three_word_name() {
    let keywords = generate_keywords("larisa pargea patricia", CaseMode::Sensitive).unwrap();
    for ordering in [
        "larisa pargea patricia",
        "larisa patricia pargea",
        "pargea larisa patricia",
        "pargea patricia larisa",
        "patricia larisa pargea",
        "patricia pargea larisa",
    ] {
        for prefix in prefixes(ordering) {
            assert!(keywords.contains(prefix), "missing {prefix:?}");
        }
    }
    // Not a prefix of any ordering.
    assert!(!keywords.contains("arisa"));
    assert!(!keywords.contains("larisa larisa"));
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_sentinel_always_present(name in name_strategy(), case in case_strategy()) {
        let keywords = generate_keywords(&name, case).unwrap();
        prop_assert!(keywords.contains(""));
    }

    #[test]
    fn prop_prefix_closed(name in name_strategy(), case in case_strategy()) {
        let keywords = generate_keywords(&name, case).unwrap();
        assert_prefix_closed(&keywords);
    }

    #[test]
    fn prop_prefix_closed_unicode(name in unicode_name_strategy(), case in case_strategy()) {
        let keywords = generate_keywords(&name, case).unwrap();
        assert_prefix_closed(&keywords);
        prop_assert!(verify_keyword_set(&keywords, case).is_ok());
    }

    #[test]
    fn prop_insensitive_members_are_lowercase(name in unicode_name_strategy()) {
        let keywords = generate_keywords(&name, CaseMode::Insensitive).unwrap();
        for member in keywords.iter() {
            prop_assert_eq!(member.to_lowercase(), member);
        }
    }

    #[test]
    fn prop_original_text_is_member(name in name_strategy()) {
        let keywords = generate_keywords(&name, CaseMode::Sensitive).unwrap();
        prop_assert!(keywords.contains(&name));
    }

    #[test]
    fn prop_members_bounded_by_text_length(name in name_strategy(), case in case_strategy()) {
        let keywords = generate_keywords(&name, case).unwrap();
        let max = name.chars().count();
        for member in keywords.iter() {
            prop_assert!(member.chars().count() <= max);
        }
    }

    #[test]
    fn prop_every_member_is_its_own_fragment(name in name_strategy(), case in case_strategy()) {
        let keywords = generate_keywords(&name, case).unwrap();
        for member in keywords.iter() {
            prop_assert!(keywords.contains(member));
        }
    }
}
