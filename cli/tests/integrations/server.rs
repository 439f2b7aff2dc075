use assert_cmd::Command;

#[test]
fn test_serve_command_available() {
    let mut cmd = Command::cargo_bin("decicalc").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("serve"));
}

#[test]
fn test_serve_rejects_invalid_port() {
    let mut cmd = Command::cargo_bin("decicalc").unwrap();
    cmd.arg("serve").arg("--port").arg("not-a-port");

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("port"));
}
