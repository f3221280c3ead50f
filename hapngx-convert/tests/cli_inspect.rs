use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn inspect_lists_kinds_with_line_numbers() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hapngx-convert"));
    cmd.arg("inspect")
        .arg(fixture("fixtures/basic.cfg"))
        .assert()
        .success()
        .stdout(predicate::str::contains("   1  global-marker"))
        .stdout(predicate::str::contains("log-statement    option  httplog"))
        .stdout(predicate::str::contains("  18  server"));
}

#[test]
fn inspect_json() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hapngx-convert"));
    let assert = cmd
        .arg("inspect")
        .arg("-")
        .arg("--format")
        .arg("json")
        .write_stdin("listen stats\n  stats enable\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8");
    let entries: Value = serde_json::from_str(&stdout).expect("json");
    assert_eq!(entries[0]["kind"], "listen-stats");
    assert_eq!(entries[1]["kind"], "unrecognized");
    assert_eq!(entries[1]["line"], 2);
    assert_eq!(entries[1]["text"], "stats enable");
}

#[test]
fn mappings_prints_embedded_tables() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hapngx-convert"));
    cmd.arg("mappings")
        .assert()
        .success()
        .stdout(predicate::str::contains("mappings source=embedded"))
        .stdout(predicate::str::contains("- queue -> proxy_timeout_queue"))
        .stdout(predicate::str::contains("- path_beg -> starts_with"));
}

#[test]
fn mappings_rejects_invalid_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.toml");
    std::fs::write(
        &path,
        "timeout = []\nbalance_methods = []\n\n[[substitution]]\nfrom = \"\"\nto = \"x\"\n",
    )
    .expect("write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hapngx-convert"));
    cmd.arg("mappings")
        .arg("--mappings-file")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid mappings file"))
        .stderr(predicate::str::contains("has an empty 'from' pattern"));
}
