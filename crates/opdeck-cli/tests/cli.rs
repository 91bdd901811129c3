use std::fs;

use assert_cmd::Command;
use tempfile::tempdir;

const ROSTER: &str = r#"{
    "modes": [
        {
            "id": "team::TeleX",
            "interactive": { "name": "Red", "pair_key": "x" }
        },
        {
            "id": "team::AutoX",
            "autonomous": { "name": "Blue", "pair_key": "x" }
        },
        {
            "id": "team::Solo",
            "interactive": {}
        }
    ]
}"#;

#[test]
fn plans_roster_in_final_order() {
    let dir = tempdir().unwrap();
    let roster = dir.path().join("roster.json");
    fs::write(&roster, ROSTER).unwrap();

    let output = Command::cargo_bin("opdeck-cli")
        .unwrap()
        .arg("--roster")
        .arg(&roster)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Red (team::TeleX)");
    assert_eq!(lines[1], "Blue (team::AutoX)");
    assert_eq!(lines[2], "Solo (team::Solo)");
    assert!(lines[3].starts_with("name table:"));
}

#[test]
fn json_report_lists_entries_and_diagnostics() {
    let dir = tempdir().unwrap();
    let roster = dir.path().join("roster.json");
    fs::write(&roster, ROSTER).unwrap();

    let output = Command::cargo_bin("opdeck-cli")
        .unwrap()
        .arg("--roster")
        .arg(&roster)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["entries"].as_array().unwrap().len(), 3);
    assert_eq!(report["entries"][0]["name"], "Red");
    assert!(report["diagnostics"].as_array().unwrap().is_empty());
}

#[test]
fn missing_roster_is_a_hard_error() {
    Command::cargo_bin("opdeck-cli")
        .unwrap()
        .arg("--roster")
        .arg("/nonexistent/roster.json")
        .assert()
        .failure();
}

#[test]
fn deny_prefix_excludes_matching_ids() {
    let dir = tempdir().unwrap();
    let roster = dir.path().join("roster.json");
    fs::write(&roster, ROSTER).unwrap();

    let output = Command::cargo_bin("opdeck-cli")
        .unwrap()
        .arg("--roster")
        .arg(&roster)
        .arg("--deny")
        .arg("team::Auto")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("Blue"));
    assert!(stdout.contains("Red"));
}
