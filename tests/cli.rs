//! Command line tests that need no backend

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn chain_console(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("chain-console").unwrap();
    cmd.env("CHAIN_CONSOLE_HOME", home.path())
        .env_remove("CHAIN_CONSOLE_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_config_shows_defaults() {
    let home = TempDir::new().unwrap();

    chain_console(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:8080"))
        .stdout(predicate::str::contains(home.path().to_str().unwrap()));

    // Showing the configuration never creates a settings file
    assert!(!home.path().join("config.json").exists());
}

#[test]
fn test_config_honours_flag_and_env() {
    let home = TempDir::new().unwrap();

    chain_console(&home)
        .args(["--api-url", "http://node.test:9000/", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://node.test:9000"));

    chain_console(&home)
        .env("CHAIN_CONSOLE_API_URL", "https://env.test")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://env.test"));
}

#[test]
fn test_config_reads_settings_file() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.json"),
        r#"{"api_base_url":"http://from-file:8081"}"#,
    )
    .unwrap();

    chain_console(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://from-file:8081"));
}

#[test]
fn test_send_rejects_zero_amount_offline() {
    let home = TempDir::new().unwrap();

    // Port 9 on localhost is not expected to answer; validation must fail first
    chain_console(&home)
        .args(["--api-url", "http://127.0.0.1:9", "send", "0xa", "0xb", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be greater than 0"));
}

#[test]
fn test_send_rejects_non_numeric_amount() {
    let home = TempDir::new().unwrap();

    chain_console(&home)
        .args(["--api-url", "http://127.0.0.1:9", "send", "0xa", "0xb", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be a valid number"));
}

#[test]
fn test_invalid_api_url_fails() {
    let home = TempDir::new().unwrap();

    chain_console(&home)
        .args(["--api-url", "localhost:8080", "balance", "0xa"])
        .assert()
        .failure();
}

#[test]
fn test_send_rejects_negative_amount() {
    let home = TempDir::new().unwrap();

    chain_console(&home)
        .args(["--api-url", "http://127.0.0.1:9", "send", "0xa", "0xb", "-1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Amount must be greater than 0"));
}

#[test]
fn test_list_failure_prints_one_error() {
    let home = TempDir::new().unwrap();

    chain_console(&home)
        .args(["--api-url", "http://127.0.0.1:9", "accounts", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Failed to load accounts").not())
        .stderr(predicate::function(|err: &str| err.lines().count() == 1));
}
