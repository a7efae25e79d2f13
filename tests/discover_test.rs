//! End-to-end discovery tests
//!
//! Builds small directory trees with tempfile and runs the full pipeline:
//! walk, pre-filter, parse, detect, serialize.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use suitescout::{discover_suites, output, ScanOptions, SuiteEntry};

fn write_file(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn scan(root: &Path) -> Vec<SuiteEntry> {
    discover_suites(root, &ScanOptions::default()).expect("scan should succeed")
}

const BOOKS_SUITE: &str = r#"package books_test

import (
    "testing"

    . "github.com/onsi/ginkgo/v2"
)

func TestBooks(t *testing.T) {
    RunSpecs(t, "Books Suite")
}
"#;

#[test]
fn test_direct_call_with_literal_name() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "books_suite_test.go", BOOKS_SUITE);

    let entries = scan(temp.path());

    assert_eq!(
        entries,
        vec![SuiteEntry::new(
            "books_suite_test.go",
            "Books Suite",
            "TestBooks"
        )]
    );
}

#[test]
fn test_selector_call_is_detected() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "orders_suite_test.go",
        r#"package orders_test

import (
    "testing"

    "github.com/onsi/ginkgo/v2"
)

func TestOrders(t *testing.T) {
    ginkgo.RunSpecs(t, "Orders Suite")
}
"#,
    );

    let entries = scan(temp.path());

    assert_eq!(
        entries,
        vec![SuiteEntry::new(
            "orders_suite_test.go",
            "Orders Suite",
            "TestOrders"
        )]
    );
}

#[test]
fn test_missing_suite_name_uses_function_name() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "bar_test.go",
        r#"package bar_test

import "testing"

func TestBar(t *testing.T) {
    RunSpecs(t)
}
"#,
    );

    let entries = scan(temp.path());

    assert_eq!(
        entries,
        vec![SuiteEntry::new("bar_test.go", "TestBar", "TestBar")]
    );
}

#[test]
fn test_file_without_test_function_contributes_nothing() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "helper_test.go",
        r#"package helper_test

func setupSpecs() {
    RunSpecs(nil, "Never Reported")
}
"#,
    );

    let entries = scan(temp.path());

    assert!(entries.is_empty());
}

#[test]
fn test_non_test_files_are_never_scanned() {
    let temp = TempDir::new().unwrap();
    // same bootstrap content, but the file name misses the suffix convention
    write_file(temp.path(), "books_suite.go", BOOKS_SUITE);
    write_file(temp.path(), "books_test.txt", BOOKS_SUITE);

    let entries = scan(temp.path());

    assert!(entries.is_empty());
}

#[test]
fn test_malformed_file_is_skipped_without_aborting() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "broken_test.go",
        "package broken\n\nfunc TestBroken( {\n  RunSpecs(t \"oops\"\n",
    );
    write_file(temp.path(), "books_suite_test.go", BOOKS_SUITE);

    let entries = scan(temp.path());

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].bootstrap, "TestBooks");
}

#[test]
fn test_entries_follow_traversal_order() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "zeta/z_suite_test.go",
        "package z_test\n\nfunc TestZ(t *testing.T) {\n  RunSpecs(t, \"Z\")\n}\n",
    );
    write_file(
        temp.path(),
        "alpha/a_suite_test.go",
        "package a_test\n\nfunc TestA(t *testing.T) {\n  RunSpecs(t, \"A\")\n}\n",
    );
    write_file(
        temp.path(),
        "m_suite_test.go",
        "package m_test\n\nfunc TestM(t *testing.T) {\n  RunSpecs(t, \"M\")\n}\n",
    );

    let first = scan(temp.path());
    let second = scan(temp.path());

    assert_eq!(first, second, "repeat scans must be identical");

    let suites: Vec<_> = first.iter().map(|e| e.suite.as_str()).collect();
    assert_eq!(
        suites,
        vec!["A", "M", "Z"],
        "depth-first lexical order: alpha/ before m_suite_test.go before zeta/"
    );
}

#[test]
fn test_multiple_suites_across_files_no_dedup() {
    let temp = TempDir::new().unwrap();
    let same_name = "package a_test\n\nfunc TestOne(t *testing.T) {\n  RunSpecs(t, \"Shared\")\n}\n";
    write_file(temp.path(), "one_test.go", same_name);
    write_file(
        temp.path(),
        "two_test.go",
        "package b_test\n\nfunc TestTwo(t *testing.T) {\n  RunSpecs(t, \"Shared\")\n}\n",
    );

    let entries = scan(temp.path());

    assert_eq!(entries.len(), 2, "duplicate suite names are preserved");
    assert!(entries.iter().all(|e| e.suite == "Shared"));
}

#[test]
fn test_prefilter_never_changes_results() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "books_suite_test.go", BOOKS_SUITE);
    write_file(
        temp.path(),
        "plain_test.go",
        "package plain_test\n\nfunc TestPlain(t *testing.T) {\n  // no bootstrap here\n}\n",
    );
    write_file(
        temp.path(),
        "mention_test.go",
        "package m_test\n\n// RunSpecs is only mentioned in this comment\nfunc TestMention(t *testing.T) {}\n",
    );

    let filtered = discover_suites(temp.path(), &ScanOptions { no_prefilter: false }).unwrap();
    let unfiltered = discover_suites(temp.path(), &ScanOptions { no_prefilter: true }).unwrap();

    assert_eq!(filtered, unfiltered);
    assert_eq!(filtered.len(), 1);
}

#[test]
fn test_missing_root_fails_the_scan() {
    let err = discover_suites(
        Path::new("/nonexistent/suitescout/root"),
        &ScanOptions::default(),
    )
    .unwrap_err();

    assert!(err.to_string().contains("directory not found"));
}

#[test]
fn test_empty_tree_serializes_as_empty_array() {
    let temp = TempDir::new().unwrap();

    let entries = scan(temp.path());
    let json = output::to_json(&entries).unwrap();

    assert_eq!(json, "[]");
}

#[test]
fn test_json_shape_matches_consumers() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "books_suite_test.go", BOOKS_SUITE);

    let entries = scan(temp.path());
    let json = output::to_json(&entries).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed[0]["file"], "books_suite_test.go");
    assert_eq!(parsed[0]["suite"], "Books Suite");
    assert_eq!(parsed[0]["bootstrap"], "TestBooks");
}
