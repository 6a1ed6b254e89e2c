use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn tsv_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn expand_cmd() -> Command {
    Command::cargo_bin("tsv-expand").unwrap()
}

#[test]
fn test_expands_file() {
    let file = tsv_file("a\tb:c\td\n");

    expand_cmd()
        .arg(file.path())
        .assert()
        .success()
        .stdout("a\tb\td\na\tc\td\n");
}

#[test]
fn test_missing_argument_is_usage_error() {
    expand_cmd()
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_file() {
    expand_cmd()
        .arg("/nonexistent/input.tsv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open file"));
}

#[test]
fn test_too_many_columns_aborts_after_earlier_output() {
    let file = tsv_file("x:y\n1\t2\t3\t4\t5\t6\nnot reached\n");

    expand_cmd()
        .arg(file.path())
        .assert()
        .failure()
        .stdout("x\ny\n")
        .stderr(predicate::str::contains("6 columns"));
}

#[test]
fn test_skipped_line_warns_and_continues() {
    let file = tsv_file("0:1:2:3:4:5:6:7:8:9:10\nok\n");

    expand_cmd()
        .arg(file.path())
        .assert()
        .success()
        .stdout("ok\n")
        .stderr(predicate::str::contains("line skipped"));
}

#[test]
fn test_quiet_hides_warnings() {
    let file = tsv_file("bad\x01\nok\n");

    expand_cmd()
        .arg("--quiet")
        .arg(file.path())
        .assert()
        .success()
        .stdout("ok\n")
        .stderr("");
}

#[test]
fn test_custom_limits() {
    let file = tsv_file("a:b:c\na:b\n");

    expand_cmd()
        .args(["--max-values", "2"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("a\nb\n");
}

#[test]
fn test_reads_stdin_with_dash() {
    expand_cmd()
        .arg("-")
        .write_stdin("k\t1:2\n")
        .assert()
        .success()
        .stdout("k\t1\nk\t2\n");
}

#[test]
fn test_stats_summary() {
    let file = tsv_file("a:b\n\x7f\n");

    expand_cmd()
        .args(["--quiet", "--stats"])
        .arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            r#"{"lines_read":2,"lines_skipped":1,"rows_emitted":2}"#,
        ));
}
