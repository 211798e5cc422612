//! rnim バイナリの入出力テスト

use assert_cmd::Command;

fn rnim() -> Command {
    Command::cargo_bin("rnim").expect("binary should build")
}

#[test]
fn test_play_from_terminal_pile() {
    rnim().arg("1").assert().success().stdout("1: MAX looses\n");
}

#[test]
fn test_play_two_stones() {
    rnim()
        .arg("2")
        .assert()
        .success()
        .stdout("2: MAX takes 1 with utility 1\n1: MIN looses\n");
}

#[test]
fn test_play_five_stones_max_loses() {
    // 5 ≡ 1 (mod 4) なので先手 MAX が負ける
    rnim().arg("5").assert().success().stdout(
        "5: MAX takes 1 with utility -1\n\
         4: MIN takes 3 with utility 1\n\
         1: MAX looses\n",
    );
}

#[test]
fn test_rejects_missing_argument() {
    rnim().assert().failure();
}

#[test]
fn test_rejects_non_integer_argument() {
    rnim().arg("twenty").assert().failure();
}

#[test]
fn test_rejects_out_of_range_argument() {
    rnim().arg("0").assert().failure();
    rnim().arg("101").assert().failure();
}
