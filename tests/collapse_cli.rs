use assert_cmd::Command;
use predicates::prelude::*;

fn collapse_cmd() -> Command {
    Command::cargo_bin("tsv-collapse").unwrap()
}

#[test]
fn test_collapses_stdin() {
    collapse_cmd()
        .write_stdin("k1\tv1\nk1\tv2\nk2\tv3\n")
        .assert()
        .success()
        .stdout("k1\tv1:v2\nk2\tv3\n");
}

#[test]
fn test_rejects_positional_arguments() {
    collapse_cmd().arg("input.tsv").assert().failure();
}

#[test]
fn test_group_cap_warns() {
    let input: String = (1..=11).map(|i| format!("k\tv{i}\n")).collect();

    collapse_cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout("k\tv1:v2:v3:v4:v5:v6:v7:v8:v9:v10\n")
        .stderr(predicate::str::contains("[v11] dropped"));
}

#[test]
fn test_line_cutoff_still_emits_groups() {
    let input: String = (1..=1001).map(|i| format!("k{}\tv\n", i % 3)).collect();

    collapse_cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("k1\tv:v:v:v:v:v:v:v:v:v\n"))
        .stderr(predicate::str::contains("input exceeds 1000 lines"));
}

#[test]
fn test_bad_lines_skipped() {
    collapse_cmd()
        .write_stdin("one column\nk\tv\n")
        .assert()
        .success()
        .stdout("k\tv\n")
        .stderr(predicate::str::contains("expected 2 columns, found 1"));
}

#[test]
fn test_custom_group_limit() {
    collapse_cmd()
        .args(["--max-group-values", "2", "--quiet"])
        .write_stdin("k\ta\nk\tb\nk\tc\n")
        .assert()
        .success()
        .stdout("k\ta:b\n")
        .stderr("");
}
