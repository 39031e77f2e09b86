//! End-to-end tests for `zmklens legend` command.

use std::process::Command;

/// Path to the zmklens binary
fn zmklens_bin() -> &'static str {
    env!("CARGO_BIN_EXE_zmklens")
}

#[test]
fn test_legend_single_expression() {
    let output = Command::new(zmklens_bin())
        .args(["legend", "&kp GRAVE"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Legend should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("&kp GRAVE  ->  `"));
}

#[test]
fn test_legend_reports_key_codes() {
    let output = Command::new(zmklens_bin())
        .args(["legend", "&kp A"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("&kp A  ->  A (code 30)"));
}

#[test]
fn test_legend_json_entries() {
    let output = Command::new(zmklens_bin())
        .args(["legend", "--json", "&kp TAB", "&trans", "&mo 1"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    let entries = result.as_array().expect("Should be a JSON array");
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0]["expression"], "&kp TAB");
    assert_eq!(entries[0]["legend"], "TAB");
    assert_eq!(entries[0]["key_code"], 15);

    assert_eq!(entries[1]["legend"], "▽");
    assert!(
        entries[1].get("key_code").is_none(),
        "Absent codes should be omitted from JSON"
    );

    assert_eq!(entries[2]["legend"], "MO1");
}

#[test]
fn test_legend_bluetooth_family() {
    let output = Command::new(zmklens_bin())
        .args(["legend", "&bt BT_SEL 2", "&bt BT_CLR"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("BT 2"));
    assert!(stdout.contains("BT CLR"));
}

#[test]
fn test_legend_unknown_behavior_uppercases() {
    let output = Command::new(zmklens_bin())
        .args(["legend", "&tog 2"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("&tog 2  ->  TOG 2"));
}

#[test]
fn test_legend_fixed_literals() {
    let output = Command::new(zmklens_bin())
        .args(["legend", "&bootloader", "&sys_reset"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("BOOT"));
    assert!(stdout.contains("RESET"));
}

#[test]
fn test_legend_requires_an_expression() {
    let output = Command::new(zmklens_bin())
        .arg("legend")
        .output()
        .expect("Failed to execute command");

    // Usage errors are reported by the argument parser.
    assert_eq!(output.status.code(), Some(2));
}
