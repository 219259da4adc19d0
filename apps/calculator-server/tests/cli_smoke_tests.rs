#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the calculator-server binary
//!
//! These tests verify that the CLI commands work correctly, including
//! configuration validation, help output, and serving a request end to end.

use std::io::{Read as _, Write as _};
use std::net::{TcpListener, TcpStream};
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use tempfile::TempDir;

/// Helper to run the calculator-server binary with given arguments
fn run_calculator_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_calculator-server"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute calculator-server")
}

fn write_config(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write config file");
    path.to_str().unwrap().to_owned()
}

fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

/// Kills the server process when the test ends, pass or fail.
struct ServerGuard(Child);

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

fn post_when_ready(port: u16, path: &str, body: &str) -> String {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        if let Ok(mut stream) = TcpStream::connect(("127.0.0.1", port)) {
            let request = format!(
                "POST {path} HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(request.as_bytes()).unwrap();
            let mut response = String::new();
            stream.read_to_string(&mut response).unwrap();
            return response;
        }
        assert!(Instant::now() < deadline, "server did not start in time");
        std::thread::sleep(Duration::from_millis(50));
    }
}

#[test]
fn test_cli_help_command() {
    let output = run_calculator_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
    assert!(stdout.contains("--print-config"));
}

#[test]
fn test_cli_version_command() {
    let output = run_calculator_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("calculator-server"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_invalid_command() {
    let output = run_calculator_server(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error"), "Should report an error: {stderr}");
}

#[test]
fn test_cli_config_validation_missing_file() {
    let output = run_calculator_server(&["--config", "/nonexistent/config.yaml", "check"]);

    assert!(
        !output.status.success(),
        "Should fail when config file doesn't exist"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("does not exist"),
        "Should indicate config file not found: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_invalid_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(&temp_dir, "invalid.yaml", "server: [unclosed");

    let output = run_calculator_server(&["--config", &config_path, "check"]);

    assert!(!output.status.success(), "Should fail with invalid YAML");

    let stderr = String::from_utf8_lossy(&output.stderr).to_lowercase();
    assert!(
        stderr.contains("yaml") || stderr.contains("configuration"),
        "Should mention the configuration problem: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_invalid_value() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        "bad_prefix.yaml",
        "server:\n  api_prefix: api/calculator\n",
    );

    let output = run_calculator_server(&["--config", &config_path, "check"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("api_prefix"), "{stderr}");
}

#[test]
fn test_cli_config_validation_valid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        "valid.yaml",
        r"
server:
  bind_addr: 127.0.0.1
  port: 8099
logging:
  level: warn
  format: json
",
    );

    let output = run_calculator_server(&["--config", &config_path, "check"]);

    assert!(
        output.status.success(),
        "Check should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("valid"));
    assert!(stdout.contains("127.0.0.1:8099"));
}

#[test]
fn test_cli_print_config_applies_overrides() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(&temp_dir, "base.yaml", "server:\n  port: 8099\n");

    let output = Command::new(env!("CARGO_BIN_EXE_calculator-server"))
        .args(["--config", &config_path, "--port", "8123", "--print-config"])
        .env("CALC__SERVER__API_PREFIX", "/calc")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute calculator-server");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let yaml = stdout
        .strip_prefix("Effective configuration:\n")
        .expect("Should print header");
    let value: serde_json::Value = serde_saphyr::from_str(yaml).expect("Should print YAML");

    assert_eq!(value["server"]["port"], 8123);
    assert_eq!(value["server"]["api_prefix"], "/calc");
    assert_eq!(value["logging"]["level"], "info");
}

#[test]
fn test_cli_run_serves_requests() {
    let port = free_port();
    let port_arg = port.to_string();
    let child = Command::new(env!("CARGO_BIN_EXE_calculator-server"))
        .args(["--port", &port_arg, "run"])
        .env_remove("RUST_LOG")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to start calculator-server");
    let _guard = ServerGuard(child);

    let response = post_when_ready(
        port,
        "/api/calculator/calculate",
        r#"{"firstOperand":6,"secondOperand":3,"operation":"divide"}"#,
    );
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.contains(r#""success":true"#), "{response}");

    let response = post_when_ready(
        port,
        "/api/calculator/calculate",
        r#"{"firstOperand":5,"secondOperand":0,"operation":"/"}"#,
    );
    assert!(response.starts_with("HTTP/1.1 400"), "{response}");
    assert!(response.contains("Cannot divide by zero"), "{response}");
}
