//! `run_filter`: sort and filter a request export.

use super::common::{doc_ids, sample_requests};
use namekeys::build::{filter_requests, run_filter, write_json};
use namekeys::{CaseMode, KeywordQuery, RequestStatusFilter};
use tempfile::TempDir;

#[test]
fn test_status_then_user_filter() {
    let query = KeywordQuery::insensitive("ana");
    let open = filter_requests(
        sample_requests(),
        Some(&query),
        RequestStatusFilter::NotAnsweredYet,
    );
    assert_eq!(doc_ids(&open), ["r2", "r3"]);

    let all = filter_requests(sample_requests(), None, RequestStatusFilter::All);
    assert_eq!(doc_ids(&all), ["r2", "r3", "r5", "r4", "r1"]);
}

#[test]
fn test_run_filter_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("requests.json");
    write_json(&input, &sample_requests()).unwrap();

    let answered = run_filter(
        &input,
        Some("  IONESCU "),
        RequestStatusFilter::Answered,
        CaseMode::Insensitive,
    )
    .unwrap();
    assert_eq!(doc_ids(&answered), ["r4", "r1"]);
}

#[test]
fn test_run_filter_sensitive_case() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("requests.json");
    write_json(&input, &sample_requests()).unwrap();

    let lower = run_filter(&input, Some("ioana"), RequestStatusFilter::All, CaseMode::Sensitive)
        .unwrap();
    assert!(lower.is_empty());

    let exact = run_filter(&input, Some("Ioana"), RequestStatusFilter::All, CaseMode::Sensitive)
        .unwrap();
    assert_eq!(doc_ids(&exact), ["r5"]);
}

#[test]
fn test_request_export_field_names() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("requests.json");
    std::fs::write(
        &input,
        r#"[{
            "docId": "q1", "createdAt": 5, "createdBy": "m", "requestedOn": "a",
            "answeredBy": "b", "completed": false,
            "answeredByFull": {"docId": "b", "displayName": "Larisa Pargea"},
            "requestedOnFull": {"docId": "a"}
        }]"#,
    )
    .unwrap();

    let hits = run_filter(&input, Some("parg"), RequestStatusFilter::All, CaseMode::Insensitive)
        .unwrap();
    assert_eq!(doc_ids(&hits), ["q1"]);
}
