//! `run_index`: re-index a profile export.

use super::common::profile;
use namekeys::build::{read_json, run_index, write_json};
use namekeys::{CaseMode, Error, KeywordOptions, UserProfile};
use tempfile::TempDir;

#[test]
fn test_run_index_writes_keyword_sets() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("users.json");
    let output = temp_dir.path().join("out").join("users.json");

    let profiles = vec![
        profile("u1", Some("Larisa Pargea")),
        profile("u2", None),
        profile("u3", Some("Ana")),
    ];
    write_json(&input, &profiles).unwrap();

    let options = KeywordOptions::with_case(CaseMode::Insensitive);
    let report = run_index(&input, &output, &options).unwrap();
    assert_eq!(report.profiles, 3);
    assert_eq!(report.indexed, 2);
    assert_eq!(report.changed, 2);
    assert_eq!(report.skipped(), 1);

    let written: Vec<UserProfile> = read_json(&output).unwrap();
    let keywords = written[0].keywords_array_of_display_name.as_ref().unwrap();
    assert!(keywords.contains("pargea l"));
    assert!(written[1].keywords_array_of_display_name.is_none());
    assert_eq!(written[2].uid, "u3");
}

#[test]
fn test_run_index_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.json");
    let second = temp_dir.path().join("second.json");
    let input = temp_dir.path().join("users.json");
    write_json(&input, &vec![profile("u1", Some("Mihai Ionescu"))]).unwrap();

    let options = KeywordOptions::default();
    run_index(&input, &first, &options).unwrap();
    let report = run_index(&first, &second, &options).unwrap();
    assert_eq!(report.changed, 0);
    assert_eq!(
        std::fs::read_to_string(&first).unwrap(),
        std::fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn test_run_index_clears_stale_sets() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("users.json");
    let output = temp_dir.path().join("out.json");

    let mut user = profile("u1", Some("Ana Pop"));
    user.reindex(&KeywordOptions::default());
    user.display_name = None;
    write_json(&input, &vec![user]).unwrap();

    let report = run_index(&input, &output, &KeywordOptions::default()).unwrap();
    assert_eq!(report.changed, 1);
    let written: Vec<UserProfile> = read_json(&output).unwrap();
    assert!(written[0].keywords_array_of_display_name.is_none());
}

#[test]
fn test_run_index_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    let result = run_index(
        &temp_dir.path().join("missing.json"),
        &temp_dir.path().join("out.json"),
        &KeywordOptions::default(),
    );
    assert!(matches!(result, Err(Error::Read { .. })));
}

#[test]
fn test_run_index_invalid_json() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("users.json");
    std::fs::write(&input, "{ not json").unwrap();

    let result = run_index(&input, &temp_dir.path().join("out.json"), &KeywordOptions::default());
    let err = result.unwrap_err();
    assert!(matches!(err, Error::Json { .. }));
    assert!(err.to_string().contains("users.json"));
}

#[test]
fn test_run_index_unwritable_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("users.json");
    write_json(&input, &vec![profile("u1", Some("Ana Pop"))]).unwrap();

    // The output's parent is a regular file, so the directory cannot be created.
    let output = input.join("out.json");
    let err = run_index(&input, &output, &KeywordOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Write { .. }));
    assert!(err.to_string().starts_with("failed to write"));
}
