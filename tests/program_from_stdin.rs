use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn bare_valid_program_outputs_expected_stdout() {
    let mut cmd = Command::cargo_bin("braintape").unwrap();
    cmd.write_stdin("+++.")
        .assert()
        .success()
        .stdout("\u{3}");
}

#[test]
fn bare_empty_input_exits_clean_and_quiet() {
    let mut cmd = Command::cargo_bin("braintape").unwrap();
    cmd.write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn bare_invalid_program_prints_concise_error_and_exits_nonzero() {
    let mut cmd = Command::cargo_bin("braintape").unwrap();
    cmd.write_stdin("]")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Parse error"));
}
