//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Path to the animhash binary built for this test run.
pub fn animhash_bin() -> String {
    std::env::var("CARGO_BIN_EXE_animhash").unwrap_or_else(|_| "target/debug/animhash".to_string())
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to share config state between multiple commands
/// in one test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(animhash_bin());
    cmd.env("ANIMHASH_CONFIG_DIR", config_dir);
    cmd.args(args);
    cmd
}

/// Writes a Unity-style `.controller` fixture file.
///
/// `params` pairs names with Unity type codes (1=float, 3=int, 4=bool,
/// 9=trigger); `layers` lists layer names in order.
pub fn write_controller_file(
    dir: &Path,
    name: &str,
    params: &[(&str, i64)],
    layers: &[&str],
) -> PathBuf {
    let mut content = String::new();
    content.push_str("%YAML 1.1\n");
    content.push_str("%TAG !u! tag:unity3d.com,2011:\n");
    content.push_str("--- !u!91 &9100000\n");
    content.push_str("AnimatorController:\n");
    content.push_str("  m_ObjectHideFlags: 0\n");
    let _ = writeln!(content, "  m_Name: {name}");
    content.push_str("  serializedVersion: 5\n");

    content.push_str("  m_AnimatorParameters:\n");
    for (param_name, type_code) in params {
        let _ = writeln!(content, "  - m_Name: {param_name}");
        let _ = writeln!(content, "    m_Type: {type_code}");
        content.push_str("    m_DefaultFloat: 0\n");
    }
    if params.is_empty() {
        // Unity writes an empty flow sequence for parameterless controllers
        content.truncate(content.len() - "  m_AnimatorParameters:\n".len());
        content.push_str("  m_AnimatorParameters: []\n");
    }

    content.push_str("  m_AnimatorLayers:\n");
    for layer_name in layers {
        content.push_str("  - serializedVersion: 5\n");
        let _ = writeln!(content, "    m_Name: {layer_name}");
        content.push_str("    m_DefaultWeight: 1\n");
    }
    if layers.is_empty() {
        content.truncate(content.len() - "  m_AnimatorLayers:\n".len());
        content.push_str("  m_AnimatorLayers: []\n");
    }

    // Trailing state machine document, as real controller files have
    content.push_str("--- !u!1107 &1107000001\n");
    content.push_str("AnimatorStateMachine:\n");
    content.push_str("  m_Name: Base Layer\n");

    let path = dir.join(format!("{name}.controller"));
    fs::write(&path, content).expect("Failed to write controller fixture");
    path
}

/// Writes a typical player controller fixture (one of each parameter type).
pub fn write_player_controller(dir: &Path) -> PathBuf {
    write_controller_file(
        dir,
        "Player",
        &[
            ("walk", 9),
            ("isWalking", 4),
            ("walkSpeed", 1),
            ("walkVariation", 3),
        ],
        &["Base Layer", "Upper Body"],
    )
}
