use assert_cmd::Command;
use std::time::Duration;

const HELLO_WORLD: &str = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";

#[test]
fn hello_world_prints_exactly_and_exits_clean() {
    Command::cargo_bin("braintape")
        .unwrap()
        .timeout(Duration::from_secs(5))
        .arg(HELLO_WORLD)
        .assert()
        .success()
        .stdout("Hello World!\n");
}
