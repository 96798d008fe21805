//! Integration tests for the scaffold command

use crate::integration::{collect_declared_files, collect_fs_entries};
use clap::Parser;
use std::collections::BTreeSet;
use std::fs;
use stencil::cli::{Cli, RunContext};
use stencil::template;
use stencil::tree::node::Entry;
use tempfile::TempDir;

fn run(parent: &TempDir, args: &[&str]) -> String {
    let cli = Cli::try_parse_from(args).unwrap();
    RunContext::new(parent.path().to_path_buf())
        .execute(&cli)
        .unwrap()
}

#[test]
fn test_scaffold_creates_exact_entry_set() {
    let parent = TempDir::new().unwrap();
    run(&parent, &["stencil", "demo"]);

    let (fs_dirs, fs_files) = collect_fs_entries(&parent.path().join("demo"));

    let mut expected_dirs = BTreeSet::new();
    let mut expected_files = BTreeSet::new();
    for entry in template::project_tree().entries() {
        let path = entry.path().to_string_lossy().to_string();
        match entry {
            Entry::Directory { .. } => expected_dirs.insert(path),
            Entry::File { .. } => expected_files.insert(path),
        };
    }

    // No extra and no missing entries
    assert_eq!(fs_dirs, expected_dirs);
    assert_eq!(fs_files, expected_files);
    assert_eq!(fs_dirs.len(), 24);
    assert_eq!(fs_files.len(), 40);
}

#[test]
fn test_written_files_are_byte_identical_to_declared_content() {
    let parent = TempDir::new().unwrap();
    run(&parent, &["stencil", "demo"]);

    let root = parent.path().join("demo");
    for (path, declared) in collect_declared_files(&template::project_tree()) {
        let written = fs::read(root.join(&path)).unwrap();
        assert_eq!(written, declared.as_bytes(), "content mismatch at {}", path);
    }
}

#[test]
fn test_default_output_root_is_fluentfox() {
    let parent = TempDir::new().unwrap();
    run(&parent, &["stencil"]);

    assert!(parent.path().join("fluentfox/src/main.tsx").is_file());
}

#[test]
fn test_named_output_root() {
    let parent = TempDir::new().unwrap();
    run(&parent, &["stencil", "demo"]);

    assert!(parent.path().join("demo").is_dir());
    assert!(!parent.path().join("fluentfox").exists());
    // The scaffold lands under the project root, not the parent itself
    assert!(!parent.path().join("src").exists());
}

#[test]
fn test_second_invocation_succeeds() {
    let parent = TempDir::new().unwrap();
    run(&parent, &["stencil", "demo"]);
    let output = run(&parent, &["stencil", "demo"]);

    assert!(output.contains("created successfully"));
}

#[test]
fn test_second_invocation_restores_canonical_content() {
    let parent = TempDir::new().unwrap();
    run(&parent, &["stencil", "demo"]);

    let hook = parent.path().join("demo/src/hooks/useAuth.ts");
    fs::write(&hook, "my local edits").unwrap();

    run(&parent, &["stencil", "demo"]);
    assert_eq!(
        fs::read_to_string(&hook).unwrap(),
        "// Custom authentication hook"
    );
}

#[test]
fn test_favicon_is_zero_byte_file() {
    let parent = TempDir::new().unwrap();
    run(&parent, &["stencil", "demo"]);

    let favicon = parent.path().join("demo/public/favicon.ico");
    let metadata = fs::metadata(&favicon).unwrap();
    assert!(metadata.is_file());
    assert_eq!(metadata.len(), 0);
}

#[test]
fn test_robots_txt_content() {
    let parent = TempDir::new().unwrap();
    run(&parent, &["stencil", "demo"]);

    assert_eq!(
        fs::read_to_string(parent.path().join("demo/public/robots.txt")).unwrap(),
        "User-agent: *\nDisallow:"
    );
}

#[test]
fn test_json_summary_reports_counts() {
    let parent = TempDir::new().unwrap();
    let output = run(&parent, &["stencil", "demo", "--format", "json"]);

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["project_name"], "demo");
    // 24 subdirectories plus the project root itself
    assert_eq!(parsed["directories_created"], 25);
    assert_eq!(parsed["directories_reused"], 0);
    assert_eq!(parsed["files_written"], 40);
}

#[test]
fn test_json_summary_counts_reuse_on_rerun() {
    let parent = TempDir::new().unwrap();
    run(&parent, &["stencil", "demo"]);
    let output = run(&parent, &["stencil", "demo", "--format", "json"]);

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["directories_created"], 0);
    assert_eq!(parsed["directories_reused"], 25);
    assert_eq!(parsed["files_written"], 40);
}
