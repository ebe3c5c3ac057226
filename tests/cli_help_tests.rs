//! End-to-end tests for `wardrobe help`.

mod fixtures;
use fixtures::*;

#[test]
fn test_help_list_all_topics() {
    let workspace = Workspace::empty();
    let output = workspace.bare_command(&["help"]).output().unwrap();

    assert_success(&output);
    let stdout = stdout(&output);
    assert!(stdout.contains("Available Help Topics"));
    for topic in ["overview", "articles", "generate", "data_files"] {
        assert!(stdout.contains(topic), "missing topic {topic}");
    }
}

#[test]
fn test_help_show_topic() {
    let workspace = Workspace::empty();
    let output = workspace.bare_command(&["help", "generate"]).output().unwrap();

    assert_success(&output);
    let stdout = stdout(&output);
    assert!(stdout.contains("Generating Outfits"));
    assert!(stdout.contains("color:PALETTE"));
}

#[test]
fn test_help_topic_dashes_are_normalized() {
    let workspace = Workspace::empty();
    let output = workspace.bare_command(&["help", "data-files"]).output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains("Data Files"));
}

#[test]
fn test_help_invalid_topic_fails() {
    let workspace = Workspace::empty();
    let output = workspace.bare_command(&["help", "nonexistent"]).output().unwrap();

    assert_exit_code(&output, 1);
    assert!(stderr(&output).contains("Unknown help topic"));
}

#[test]
fn test_help_needs_no_data_files() {
    let workspace = Workspace::empty();
    std::fs::remove_file(workspace.fixed_path()).unwrap();
    assert_success(&workspace.run(&["help"]));
}
