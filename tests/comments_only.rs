use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn comment_only_program_succeeds_with_no_output() {
    Command::cargo_bin("braintape")
        .unwrap()
        .arg("this program is nothing but commentary!")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}
