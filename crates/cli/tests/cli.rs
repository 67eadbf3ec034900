//! End-to-end tests of the `xwc` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn workspace(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

fn xwc(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("xwc").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("XWC_LOG")
        .arg("--color")
        .arg("never");
    cmd
}

#[test]
fn test_exclusive_words_of_two_files() {
    let dir = workspace(&[("one.txt", "a a b"), ("two.txt", "a c")]);
    xwc(&dir)
        .args(["one.txt", "two.txt"])
        .assert()
        .success()
        .stdout("\tone.txt\ttwo.txt\nb\t1\nc\t\t1\n");
}

#[test]
fn test_counts_repeated_exclusive_word() {
    let dir = workspace(&[("one.txt", "a a b\nb"), ("two.txt", "a c")]);
    xwc(&dir)
        .args(["one.txt", "two.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("b\t2\n"))
        .stdout(predicate::str::contains("a\t").not());
}

#[test]
fn test_stdin_when_no_file() {
    let dir = workspace(&[]);
    xwc(&dir)
        .write_stdin("x y x\n")
        .assert()
        .success()
        .stdout("\t\"\"\nx\t2\ny\t1\n")
        .stderr(predicate::str::contains("--- starts reading for #1 FILE"))
        .stderr(predicate::str::contains("--- ends reading for #1 FILE"));
}

#[test]
fn test_restrict_only_counts_filter_words() {
    let dir = workspace(&[("filter.txt", "cat dog bird"), ("in.txt", "cat cat fish dog")]);
    xwc(&dir)
        .args(["-r", "filter.txt", "in.txt"])
        .assert()
        .success()
        .stdout("filter.txt\tin.txt\ncat\t2\ndog\t1\n");
}

#[test]
fn test_sort_numeric_reverse() {
    let dir = workspace(&[("in.txt", "b a a c c c")]);
    xwc(&dir)
        .args(["-n", "-R", "in.txt"])
        .assert()
        .success()
        .stdout("\tin.txt\nc\t3\na\t2\nb\t1\n");
}

#[test]
fn test_sort_lexical_long_option() {
    let dir = workspace(&[("in.txt", "pear apple fig")]);
    xwc(&dir)
        .args(["--sort", "lexicographical", "in.txt"])
        .assert()
        .success()
        .stdout("\tin.txt\napple\t1\nfig\t1\npear\t1\n");
}

#[test]
fn test_lexical_sort_with_locale_collation() {
    let dir = workspace(&[("in.txt", "pear apple Fig zoo Éclair")]);
    xwc(&dir)
        .args(["-l", "in.txt"])
        .assert()
        .success()
        .stdout("\tin.txt\nFig\t1\napple\t1\npear\t1\nzoo\t1\nÉclair\t1\n");
    xwc(&dir)
        .args(["-l", "--collate", "en", "in.txt"])
        .assert()
        .success()
        .stdout("\tin.txt\napple\t1\nÉclair\t1\nFig\t1\npear\t1\nzoo\t1\n");
}

#[test]
fn test_invalid_locale_is_usage_error() {
    let dir = workspace(&[("in.txt", "a")]);
    xwc(&dir)
        .args(["-l", "--collate", "not a locale!", "in.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid locale"));
}

#[test]
fn test_punctuation_and_limit() {
    let dir = workspace(&[("in.txt", "hello, world! helicopter")]);
    xwc(&dir)
        .args(["-p", "-i", "3", "in.txt"])
        .assert()
        .success()
        .stdout("\tin.txt\nhel\t2\nwor\t1\n");
}

#[test]
fn test_json_format() {
    let dir = workspace(&[("one.txt", "a b"), ("two.txt", "a c")]);
    let output = xwc(&dir)
        .args(["--format", "json", "one.txt", "two.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["word"], "b");
    assert_eq!(rows[1]["word"], "c");
    assert_eq!(rows[1]["input"], "two.txt");
}

#[test]
fn test_missing_file_fails() {
    let dir = workspace(&[]);
    xwc(&dir)
        .arg("absent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not open file: absent.txt"));
}

#[test]
fn test_unknown_sort_value_is_usage_error() {
    let dir = workspace(&[]);
    xwc(&dir).args(["-s", "random"]).assert().failure();
}

#[test]
fn test_help_lists_options() {
    let dir = workspace(&[]);
    xwc(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--restrict"))
        .stdout(predicate::str::contains("--punctuation-as-space"));
}
