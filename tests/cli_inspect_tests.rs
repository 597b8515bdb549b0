//! End-to-end tests for `animhash inspect` and `animhash config`.

use std::process::Command;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn inspect_lists_parameters_and_layers() {
    let dir = TempDir::new().unwrap();
    let path = write_player_controller(dir.path());

    let output = Command::new(animhash_bin())
        .args(["inspect", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Controller: Player"));
    assert!(stdout.contains("walkSpeed"));
    assert!(stdout.contains("trigger"));
    assert!(stdout.contains("[0] Base Layer"));
    assert!(stdout.contains("[1] Upper Body"));
}

#[test]
fn inspect_json_structure() {
    let dir = TempDir::new().unwrap();
    let path = write_player_controller(dir.path());

    let output = Command::new(animhash_bin())
        .args(["inspect", path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON output");
    assert_eq!(value["name"], "Player");
    assert_eq!(value["parameters"].as_array().unwrap().len(), 4);
    assert_eq!(value["layers"].as_array().unwrap().len(), 2);
}

#[test]
fn inspect_missing_file_fails() {
    let output = Command::new(animhash_bin())
        .args(["inspect", "/nonexistent/Foo.controller"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn config_show_reports_presets() {
    let config_dir = TempDir::new().unwrap();

    let output = isolated_command(&["config", "show"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Config file:"));
    assert!(stdout.contains("Default"));
}

#[test]
fn config_init_writes_file_once() {
    let config_dir = TempDir::new().unwrap();

    let first = isolated_command(&["config", "init"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(first.status.code(), Some(0));
    assert!(config_dir.path().join("config.toml").exists());

    let second = isolated_command(&["config", "init"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(second.status.code(), Some(1));

    let forced = isolated_command(&["config", "init", "--force"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(forced.status.code(), Some(0));
}

#[test]
fn config_show_json_structure() {
    let config_dir = TempDir::new().unwrap();

    let output = isolated_command(&["config", "show", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON output");
    assert!(value["preset"].is_array());
}
