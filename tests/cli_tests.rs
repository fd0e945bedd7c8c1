//! Command-line tests for the metagraph-workflow-config binary

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("metagraph-workflow-config").unwrap()
}

#[test]
fn test_label_option_headers() {
    cmd()
        .args(["label-option", "sequence_headers"])
        .assert()
        .success()
        .stdout("--anno-header\n");
}

#[test]
fn test_label_option_file_names_json() {
    cmd()
        .args(["label-option", "sequence_file_names", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"option\": \"--anno-filename\""));
}

#[test]
fn test_label_option_invalid() {
    cmd()
        .args(["label-option", "headers"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid value of AnnotationLabelsSource: got headers",
        ));
}

#[test]
fn test_keys_tsv() {
    cmd()
        .args(["keys", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("key\tgroup\tvalue_kind\n"))
        .stdout(predicate::str::contains("tmpdir\tinput\tpath"))
        .stdout(predicate::str::contains("rules.<rule>.mem_mb\trule_overrides\tinteger"));
}

#[test]
fn test_keys_group_filter() {
    cmd()
        .args(["keys", "--group", "brwt", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("brwt_relax_arity"))
        .stdout(predicate::str::contains("max_threads").not());
}

#[test]
fn test_formats_lists_all() {
    let assert = cmd().args(["formats", "--format", "tsv"]).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    // header plus nine formats
    assert_eq!(output.lines().count(), 10);
    assert!(output.contains("relax.row_diff_brwt\ttrue\ttrue"));
    assert!(output.contains("brwt\tfalse\tfalse"));
    assert!(!output.contains("column"));
}
