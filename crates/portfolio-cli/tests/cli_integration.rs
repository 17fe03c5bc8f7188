//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end against
//! content directories written to temporary folders.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command reading from the given content directory
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("portfolio").expect("Failed to find portfolio binary");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

/// Write a complete, valid content directory
fn valid_content() -> TempDir {
    let dir = TempDir::new().unwrap();
    let files = [
        (
            "personal.json",
            serde_json::json!({
                "name": "Jane Doe",
                "title": "Software Engineer",
                "description": "Builds things",
                "avatar": "",
                "about": "About Jane"
            }),
        ),
        (
            "skills.json",
            serde_json::json!([
                {"id": 1, "name": "Languages", "skills": [
                    {"name": "Rust", "level": "Advanced", "years": 5, "description": "Daily"}
                ]},
                {"id": 2, "title": "Tools", "skills": ["Git", "Docker"]}
            ]),
        ),
        (
            "experiences.json",
            serde_json::json!([
                {"id": 1, "title": "Senior Engineer", "position": "Platform", "company": "Acme",
                 "period": "2021 - Present", "description": "Payments"}
            ]),
        ),
        (
            "projects.json",
            serde_json::json!([
                {"id": 1, "title": "Portfolio", "description": "This site",
                 "technologies": ["Rust", "Dioxus"]}
            ]),
        ),
        (
            "contact.json",
            serde_json::json!({"email": "jane@example.com", "github": "janedoe"}),
        ),
    ];
    for (name, value) in files {
        fs::write(dir.path().join(name), value.to_string()).unwrap();
    }
    dir
}

// ============================================================================
// Check Command Tests
// ============================================================================

#[test]
fn test_check_valid_content() {
    let data_dir = valid_content();

    cli_cmd(&data_dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All 5 resources OK"))
        .stdout(predicate::str::contains("skills.json"));
}

#[test]
fn test_check_missing_resource_fails() {
    let data_dir = valid_content();
    fs::remove_file(data_dir.path().join("projects.json")).unwrap();

    cli_cmd(&data_dir)
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL  projects.json"))
        .stderr(predicate::str::contains("1 of 5 resources failed"));
}

#[test]
fn test_check_malformed_resource_fails() {
    let data_dir = valid_content();
    fs::write(data_dir.path().join("contact.json"), "not json").unwrap();

    cli_cmd(&data_dir)
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to decode contact.json"));
}

// ============================================================================
// Summary Command Tests
// ============================================================================

#[test]
fn test_summary_lists_content() {
    let data_dir = valid_content();

    cli_cmd(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe - Software Engineer"))
        .stdout(predicate::str::contains("Skills: 3 in 2 categories"))
        .stdout(predicate::str::contains("Tools: Git, Docker"))
        .stdout(predicate::str::contains("Senior Engineer at Acme"))
        .stdout(predicate::str::contains("Portfolio [Rust, Dioxus]"))
        .stdout(predicate::str::contains("GitHub: https://github.com/janedoe"));
}

#[test]
fn test_summary_fails_on_any_missing_resource() {
    let data_dir = valid_content();
    fs::remove_file(data_dir.path().join("personal.json")).unwrap();

    cli_cmd(&data_dir)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("personal.json"));
}

// ============================================================================
// Paths Command Tests
// ============================================================================

#[test]
fn test_paths_default_base() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains("/data/personal.json"))
        .stdout(predicate::str::contains("/data/contact.json"));
}

#[test]
fn test_paths_custom_base() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["paths", "--base", "https://cdn.example.com/site/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://cdn.example.com/site/experiences.json"));
}
