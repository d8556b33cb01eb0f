use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn empire_cmd() -> Command {
    Command::cargo_bin("empire").unwrap()
}

fn fixture() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/Test.empire")
}

#[test]
fn test_compile_fixture_with_properties() {
    empire_cmd()
        .arg(fixture())
        .args(["-p", "b=x", "-p", "d=y"])
        .assert()
        .success()
        .stdout("property=value\nkey=value\n");
}

#[test]
fn test_compile_from_stdin() {
    empire_cmd()
        .arg("-")
        .args(["--property", "a=b"])
        .write_stdin("bind a=a\n(a=b) {c\n}")
        .assert()
        .success()
        .stdout("c\n");
}

#[test]
fn test_properties_file_and_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"b": "x", "d": "nope"}}"#).unwrap();

    empire_cmd()
        .arg(fixture())
        .arg("--properties")
        .arg(file.path())
        .args(["-p", "d=y"])
        .assert()
        .success()
        .stdout("property=value\nkey=value\n");
}

#[test]
fn test_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");

    empire_cmd()
        .arg("-")
        .arg("-o")
        .arg(&out)
        .write_stdin("() {a}")
        .assert()
        .success()
        .stdout("");

    assert_eq!(std::fs::read_to_string(out).unwrap(), "a\n");
}

#[test]
fn test_check_only_parses() {
    empire_cmd()
        .args(["--check", "-"])
        .write_stdin("() {a}")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_syntax_error_fails() {
    empire_cmd()
        .arg("-")
        .write_stdin("(a=b {c}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Parse error"));
}

#[test]
fn test_bad_assignment_fails() {
    empire_cmd()
        .args(["-", "-p", "novalue"])
        .write_stdin("() {a}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("KEY=VALUE"));
}

#[test]
fn test_missing_source_fails() {
    empire_cmd()
        .arg("does/not/exist.empire")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: I/O error"));
}
