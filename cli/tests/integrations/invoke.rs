use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn invoke_stdin(event: &Value) -> Value {
    let mut cmd = Command::cargo_bin("decicalc").unwrap();
    let output = cmd
        .arg("invoke")
        .write_stdin(event.to_string())
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_invoke_get_event_from_stdin() {
    let response = invoke_stdin(&json!({
        "requestContext": {"http": {"method": "GET"}},
        "queryStringParameters": {"num1": "2", "num2": "3", "operation": "add"}
    }));

    assert_eq!(response["statusCode"], json!(200));
    assert_eq!(
        response["body"],
        json!(r#"{"num1":"2","num2":"3","operation":"add","result":"5"}"#)
    );
    assert_eq!(response["headers"]["Access-Control-Allow-Origin"], json!("*"));
}

#[test]
fn test_invoke_post_event_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let event_file = temp_dir.path().join("event.json");
    fs::write(
        &event_file,
        r#"{
  "requestContext": {"http": {"method": "POST"}},
  "body": "{\"num1\": \"10\", \"num2\": \"4\", \"operation\": \"divide\"}"
}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("decicalc").unwrap();
    let output = cmd
        .arg("invoke")
        .arg("--event")
        .arg(&event_file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let response: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["statusCode"], json!(200));
    let body: Value = serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["result"], json!("2.5"));
}

#[test]
fn test_invoke_reports_client_errors_in_response() {
    let response = invoke_stdin(&json!({
        "requestContext": {"http": {"method": "POST"}},
        "body": "{\"num1\": \"1\", \"num2\": \"2\"}"
    }));

    assert_eq!(response["statusCode"], json!(400));
    assert_eq!(
        response["body"],
        json!(r#"{"error":"Missing required input(s): operation"}"#)
    );
}

#[test]
fn test_invoke_preflight() {
    let response = invoke_stdin(&json!({
        "requestContext": {"http": {"method": "OPTIONS"}},
        "body": "ignored"
    }));

    assert_eq!(response["statusCode"], json!(200));
    assert_eq!(response["body"], json!(""));
}

#[test]
fn test_invoke_malformed_event_is_internal_error() {
    let response = invoke_stdin(&json!({
        "requestContext": {"http": {"method": "GET"}},
        "queryStringParameters": ["num1", "num2"]
    }));

    assert_eq!(response["statusCode"], json!(500));
    assert_eq!(
        response["body"],
        json!(r#"{"error":"Internal server error occurred."}"#)
    );
}

#[test]
fn test_invoke_rejects_non_json_input() {
    let mut cmd = Command::cargo_bin("decicalc").unwrap();
    cmd.arg("invoke").write_stdin("not json");

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Event is not valid JSON"));
}

#[test]
fn test_invoke_missing_event_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("decicalc").unwrap();
    cmd.arg("invoke")
        .arg("--event")
        .arg(temp_dir.path().join("missing.json"));

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Failed to read event file"));
}
