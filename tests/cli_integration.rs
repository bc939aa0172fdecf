//! CLI integration tests
//!
//! Runs the built binary with a clean credential environment and checks
//! output formats and exit codes.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn checkout_pilot() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_checkout-pilot"));
    command
        .env_remove("RAZORPAY_KEY_ID")
        .env_remove("RAZORPAY_KEY_SECRET")
        .env_remove("CHECKOUT_LOG_LEVEL")
        .env_remove("CHECKOUT_LOG_JSON")
        .env_remove("RUST_LOG");
    command
}

fn run(args: &[&str]) -> Output {
    checkout_pilot()
        .args(args)
        .output()
        .expect("Failed to execute checkout-pilot")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_cli_help() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("detect"));
    assert!(stdout.contains("integrate"));
    assert!(stdout.contains("call"));
}

#[test]
fn test_detect_directory_json() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("go.mod"),
        "module shop\n\ngo 1.21\n\nrequire github.com/labstack/echo/v4 v4.11.0\n",
    )
    .unwrap();
    fs::write(dir.path().join("main.go"), "package main\n").unwrap();

    let output = run(&["detect", dir.path().to_str().unwrap(), "--format", "json"]);
    assert!(output.status.success());

    let profile = stdout_json(&output);
    assert_eq!(profile["language"], "go");
    assert_eq!(profile["framework"], "echo");
    assert_eq!(profile["packageManager"], "go-mod");
}

#[test]
fn test_detect_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let output = run(&["detect", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error"));
}

#[test]
fn test_integrate_uses_flag_credentials() {
    let output = run(&[
        "integrate",
        "--language",
        "javascript",
        "--backend",
        "express",
        "--frontend",
        "vanilla",
        "--key-id",
        "rzp_test_flag",
        "--key-secret",
        "flag-secret",
        "--format",
        "json",
    ]);
    assert!(output.status.success());

    let plan = stdout_json(&output);
    assert_eq!(plan["envVars"][0]["value"], "rzp_test_flag");
    assert_eq!(plan["envVars"][1]["value"], "flag-secret");
    assert_eq!(plan["files"][2]["action"], "insert_code");
}

#[test]
fn test_integrate_without_credentials_uses_placeholders() {
    let output = run(&[
        "integrate", "-l", "python", "-b", "flask", "--frontend", "react", "-f", "yaml",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("rzp_test_YOUR_KEY_ID"));
    assert!(stdout.contains("razorpay_routes.py"));
}

#[test]
fn test_malformed_key_id_is_rejected() {
    let output = run(&[
        "integrate", "-l", "go", "-b", "gin", "--frontend", "vue", "--key-id", "live_abc",
    ]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_malformed_log_json_is_rejected() {
    let output = checkout_pilot()
        .env("CHECKOUT_LOG_JSON", "yes")
        .args(["tools", "--format", "json"])
        .output()
        .expect("Failed to execute checkout-pilot");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("CHECKOUT_LOG_JSON"));
}

#[test]
fn test_tools_lists_both_tools() {
    let output = run(&["tools", "--format", "json"]);
    assert!(output.status.success());
    let definitions = stdout_json(&output);
    let names: Vec<&str> = definitions
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["detect_stack", "integrate_checkout"]);
}

#[test]
fn test_call_reads_arguments_from_stdin() {
    let mut child = checkout_pilot()
        .args(["call", "detect_stack", "--format", "json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"{"files": ["pubspec.yaml", "lib/main.dart"]}"#)
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let result = stdout_json(&output);
    assert_eq!(result["isError"], false);
    assert_eq!(result["content"]["framework"], "flutter");
}

#[test]
fn test_call_error_result_exits_nonzero() {
    let output = run(&["call", "integrate_checkout", "{\"language\": 1}", "--format", "json"]);
    assert_eq!(output.status.code(), Some(1));
    let result = stdout_json(&output);
    assert_eq!(result["isError"], true);
}
