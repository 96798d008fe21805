//! Integration tests for preview mode (`--list`)

use clap::Parser;
use stencil::cli::{Cli, RunContext};
use tempfile::TempDir;

fn run(parent: &TempDir, args: &[&str]) -> String {
    let cli = Cli::try_parse_from(args).unwrap();
    RunContext::new(parent.path().to_path_buf())
        .execute(&cli)
        .unwrap()
}

#[test]
fn test_list_creates_nothing_on_disk() {
    let parent = TempDir::new().unwrap();
    run(&parent, &["stencil", "demo", "--list"]);

    assert_eq!(std::fs::read_dir(parent.path()).unwrap().count(), 0);
}

#[test]
fn test_list_enumerates_full_layout() {
    let parent = TempDir::new().unwrap();
    let output = run(&parent, &["stencil", "demo", "--list"]);

    assert!(output.contains("Would create directories:"));
    assert!(output.contains("  - src/components/common/Button\n"));
    assert!(output.contains("Would create files:"));
    assert!(output.contains("  - src/App.tsx\n"));
    assert!(output.contains("Run 'stencil demo' to create the scaffold."));
}

#[test]
fn test_list_json_output() {
    let parent = TempDir::new().unwrap();
    let output = run(&parent, &["stencil", "demo", "--list", "--format", "json"]);

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["project_name"], "demo");
    assert_eq!(parsed["directories"].as_array().unwrap().len(), 24);
    assert_eq!(parsed["files"].as_array().unwrap().len(), 40);
    assert_eq!(std::fs::read_dir(parent.path()).unwrap().count(), 0);
}
