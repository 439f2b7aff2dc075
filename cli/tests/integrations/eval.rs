use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_eval_exact_decimal_addition() {
    let mut cmd = Command::cargo_bin("decicalc").unwrap();
    cmd.arg("eval").arg("0.1").arg("add").arg("0.2");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("result = 0.3"))
        .stdout(predicate::str::contains("0.30000000000000004").not());
}

#[test]
fn test_eval_raw_output() {
    let mut cmd = Command::cargo_bin("decicalc").unwrap();
    cmd.arg("eval").arg("10").arg("DIVIDE").arg("4").arg("--raw");

    cmd.assert().success().stdout("2.5\n");
}

#[test]
fn test_eval_negative_operands() {
    let mut cmd = Command::cargo_bin("decicalc").unwrap();
    cmd.arg("eval").arg("-3").arg("multiply").arg("-1.5").arg("--raw");

    cmd.assert().success().stdout("4.5\n");
}

#[test]
fn test_eval_division_by_zero_fails() {
    let mut cmd = Command::cargo_bin("decicalc").unwrap();
    cmd.arg("eval").arg("1").arg("divide").arg("0.0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Division by zero is not allowed."));
}

#[test]
fn test_eval_unknown_operation_fails() {
    let mut cmd = Command::cargo_bin("decicalc").unwrap();
    cmd.arg("eval").arg("1").arg("mod").arg("2");

    cmd.assert().failure().stderr(predicate::str::contains(
        "Invalid operation: 'mod'. Supported operations are add, subtract, multiply, divide.",
    ));
}

#[test]
fn test_eval_invalid_operand_fails() {
    let mut cmd = Command::cargo_bin("decicalc").unwrap();
    cmd.arg("eval").arg("abc").arg("add").arg("1");

    cmd.assert().failure().stderr(predicate::str::contains(
        "Invalid input: num1 and num2 must be valid numbers.",
    ));
}

#[test]
fn test_eval_empty_operand_is_missing() {
    let mut cmd = Command::cargo_bin("decicalc").unwrap();
    cmd.arg("eval").arg("").arg("add").arg("1");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing required input(s): num1"));
}

#[test]
fn test_eval_keeps_digits_past_28() {
    let mut cmd = Command::cargo_bin("decicalc").unwrap();
    cmd.arg("eval")
        .arg("1")
        .arg("add")
        .arg("0.000000000000000000000000000011")
        .arg("--raw");

    cmd.assert()
        .success()
        .stdout("1.000000000000000000000000000011\n");
}
