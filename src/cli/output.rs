//! CLI output: error mapping and result presentation.

use crate::error::ScaffoldError;
use crate::template::DIRECTORY_SUMMARY;
use crate::tree::materializer::MaterializeReport;
use crate::tree::node::{Entry, Node};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Map domain errors to a string for CLI output.
/// Keeps the route thin; extend with stable categories if needed.
pub fn map_error(e: &ScaffoldError) -> String {
    e.to_string()
}

/// Result of one scaffold invocation, for presentation.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldSummary {
    pub project_name: String,
    pub directories_created: usize,
    pub directories_reused: usize,
    pub files_written: usize,
}

impl ScaffoldSummary {
    pub fn new(project_name: &str, report: &MaterializeReport) -> Self {
        Self {
            project_name: project_name.to_string(),
            directories_created: report.directories_created,
            directories_reused: report.directories_reused,
            files_written: report.files_written,
        }
    }
}

/// Preview of what a scaffold invocation would create.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldPreview {
    pub project_name: String,
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

impl ScaffoldPreview {
    /// Enumerate the tree without touching the filesystem.
    pub fn from_tree(project_name: &str, tree: &Node) -> Self {
        let mut directories = Vec::new();
        let mut files = Vec::new();
        for entry in tree.entries() {
            let path = entry.path().to_string_lossy().to_string();
            match entry {
                Entry::Directory { .. } => directories.push(path),
                Entry::File { .. } => files.push(path),
            }
        }
        Self {
            project_name: project_name.to_string(),
            directories,
            files,
        }
    }
}

pub fn format_scaffold_summary(summary: &ScaffoldSummary) -> String {
    let mut output = format!(
        "{}\n\n",
        format!(
            "Modular React structure created successfully in '{}/' directory!",
            summary.project_name
        )
        .green()
    );

    output.push_str("Created directories:\n");
    for (path, description) in DIRECTORY_SUMMARY {
        output.push_str(&format!("  - {} - {}\n", path, description));
    }
    output.push('\n');

    output.push_str(&format!(
        "Directories created: {}, reused: {}, files written: {}\n",
        summary.directories_created, summary.directories_reused, summary.files_written
    ));
    output
}

pub fn format_scaffold_preview(preview: &ScaffoldPreview) -> String {
    let mut output = format!("Scaffold preview for '{}/':\n\n", preview.project_name);

    output.push_str("Would create directories:\n");
    for dir in &preview.directories {
        output.push_str(&format!("  - {}\n", dir));
    }
    output.push('\n');

    output.push_str("Would create files:\n");
    for file in &preview.files {
        output.push_str(&format!("  - {}\n", file));
    }
    output.push('\n');

    output.push_str(&format!(
        "Run 'stencil {}' to create the scaffold.\n",
        preview.project_name
    ));
    output
}
