use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

fn cargo_bin() -> Command {
    Command::cargo_bin("braintape").unwrap()
}

#[test]
fn unmatched_open_fails_before_any_output() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("+.[")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unmatched '['"));
}

#[test]
fn unmatched_opens_are_all_reported_outermost_first() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("[[[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("0, 1"));
}

#[test]
fn unmatched_close_names_its_position() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("+-]")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unmatched ']'").and(predicate::str::contains("instruction 2")));
}

#[test]
fn moving_left_from_cell_zero_aborts() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("<")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("below cell 0"));
}

#[test]
fn output_written_before_a_runtime_abort_stands() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("+.<")
        .assert()
        .failure()
        .code(1)
        .stdout("\u{1}")
        .stderr(predicate::str::contains("below cell 0"));
}
