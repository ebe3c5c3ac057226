//! End-to-end tests for `wardrobe validate` and `wardrobe init`.

use std::fs;

mod fixtures;
use fixtures::*;

const ASYMMETRIC_FIXED: &str = r#"{
    "classifications": {"hat": ["cap"], "accessory": ["belt"]},
    "compatibility": {"red": ["blue"], "blue": [], "gray": ["gray"]},
    "palettes": {"neutral": ["gray"], "warm": ["red"]},
    "weather": ["hot", "cold"],
    "uses": {}
}"#;

// ============================================================================
// Validate Command Tests
// ============================================================================

#[test]
fn test_validate_starter_data_is_clean() {
    let workspace = Workspace::with_sample_wardrobe();
    let report = workspace.run_json(&["validate", "--json"]);

    assert_eq!(report["valid"], true);
    assert_eq!(report["repairs"], serde_json::json!([]));
    assert_eq!(report["warnings"], serde_json::json!([]));
    assert_eq!(report["articles"], 7);
    assert_eq!(report["outfits"], 0);
}

#[test]
fn test_validate_repairs_and_persists_symmetry() {
    let workspace = Workspace::empty();
    fs::write(workspace.fixed_path(), ASYMMETRIC_FIXED).unwrap();

    let report = workspace.run_json(&["validate", "--json"]);
    let repairs = report["repairs"].as_array().unwrap();
    assert_eq!(repairs.len(), 1);
    assert_eq!(repairs[0]["color"], "red");
    assert_eq!(repairs[0]["missing_from"], "blue");

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(workspace.fixed_path()).unwrap()).unwrap();
    assert_eq!(written["compatibility"]["blue"], serde_json::json!(["red"]));

    // nothing left to repair the second time
    let report = workspace.run_json(&["validate", "--json"]);
    assert_eq!(report["repairs"], serde_json::json!([]));
}

#[test]
fn test_validate_reports_warnings() {
    let workspace = Workspace::empty();
    let fixed = ASYMMETRIC_FIXED.replace(r#""uses": {}"#, r#""uses": {"formal": ["tie"]}"#);
    fs::write(workspace.fixed_path(), fixed).unwrap();

    let output = workspace.run(&["validate"]);
    assert_success(&output);
    let stdout = stdout(&output);
    assert!(stdout.contains("tie"), "stdout: {stdout}");
    assert!(stdout.contains("repaired 1"));
}

#[test]
fn test_validate_dangling_color_is_io_error() {
    let workspace = Workspace::empty();
    fs::write(
        workspace.fixed_path(),
        r#"{"classifications": {}, "compatibility": {"red": ["green"]}, "palettes": {}}"#,
    )
    .unwrap();

    let output = workspace.run(&["validate"]);
    assert_exit_code(&output, 2);
    assert!(stderr(&output).contains("green"));
}

#[test]
fn test_validate_malformed_wardrobe_is_io_error() {
    let workspace = Workspace::empty();
    fs::write(workspace.data_path(), r#"{"hat": [{"id": "nope"}]}"#).unwrap();

    let output = workspace.run(&["validate"]);
    assert_exit_code(&output, 2);
}

// ============================================================================
// Init Command Tests
// ============================================================================

#[test]
fn test_init_creates_files() {
    let workspace = Workspace::empty();
    fs::remove_file(workspace.fixed_path()).unwrap();

    let output = workspace.run(&["init"]);
    assert_success(&output);
    assert!(workspace.fixed_path().exists());

    let document = workspace.wardrobe_json();
    assert_eq!(document["hat"], serde_json::json!([]));
    assert_eq!(document["outfit_history"], serde_json::json!([]));

    // the new files are immediately usable
    assert_success(&workspace.run(&["validate"]));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let workspace = Workspace::with_sample_wardrobe();
    let before = workspace.wardrobe_json();

    let output = workspace.run(&["init"]);
    assert_exit_code(&output, 1);
    assert!(stderr(&output).contains("--force"));
    assert_eq!(workspace.wardrobe_json(), before);
}

#[test]
fn test_init_force_resets_wardrobe() {
    let workspace = Workspace::with_sample_wardrobe();

    assert_success(&workspace.run(&["init", "--force"]));
    let listed = workspace.run_json(&["list", "--json"]);
    assert_eq!(listed["count"], 0);
}
