//! Smoke tests for command wiring; none of these touch a database

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::NamedTempFile;

fn lightbnb() -> Command {
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    cmd.env_remove("LIGHTBNB_DEFAULT_LIMIT")
        .env_remove("LIGHTBNB_MAX_CONNECTIONS")
        .env_remove("RUST_LOG");
    cmd
}

fn dry_run(args: &[&str]) -> Value {
    let output = lightbnb()
        .arg("properties")
        .args(args)
        .arg("--dry-run")
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_help_lists_commands() {
    lightbnb()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("properties"))
        .stdout(predicate::str::contains("reservations"))
        .stdout(predicate::str::contains("add-property"));
}

#[test]
fn test_properties_help() {
    lightbnb()
        .arg("properties")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Print the SQL and parameters"));
}

#[test]
fn test_dry_run_without_filters() {
    let query = dry_run(&[]);

    assert_eq!(query["params"], json!([10]));
    let sql = query["sql"].as_str().unwrap();
    assert!(!sql.contains("WHERE"));
    assert!(sql.ends_with("LIMIT $1"));
}

#[test]
fn test_dry_run_city() {
    let query = dry_run(&["--city", "van"]);

    assert_eq!(query["params"], json!(["%van%", 10]));
    assert!(query["sql"]
        .as_str()
        .unwrap()
        .contains("WHERE city LIKE $1"));
}

#[test]
fn test_dry_run_price_and_rating() {
    let query = dry_run(&[
        "--min-price",
        "50",
        "--max-price",
        "150",
        "--min-rating",
        "4",
        "--limit",
        "5",
    ]);

    assert_eq!(query["params"], json!([5000, 15000, "4", 5]));
    let sql = query["sql"].as_str().unwrap();
    assert!(sql.contains("WHERE cost_per_night BETWEEN $1 AND $2"));
    assert!(sql.contains("AND average_rating >= $3"));
}

#[test]
fn test_dry_run_blank_city_ignored() {
    let query = dry_run(&["--city", "  "]);
    assert_eq!(query["params"], json!([10]));
}

#[test]
fn test_default_limit_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "default_limit = 3").unwrap();

    let output = lightbnb()
        .arg("--config")
        .arg(file.path())
        .args(["properties", "--owner-id", "7", "--dry-run"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let query: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(query["params"], json!([7, 3]));
}

#[test]
fn test_user_requires_email_or_id() {
    lightbnb()
        .arg("user")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--email"));
}

#[test]
fn test_add_user_rejects_invalid_email() {
    lightbnb()
        .args(["add-user", "--name", "Ada", "--email", "ada", "--password", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must contain '@'"));
}
