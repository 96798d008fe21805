//! CLI route: run context resolving the output root and dispatching to the
//! materializer and presentation.

use crate::cli::output::{
    format_scaffold_preview, format_scaffold_summary, ScaffoldPreview, ScaffoldSummary,
};
use crate::cli::parse::Cli;
use crate::error::ScaffoldError;
use crate::template;
use crate::tree::materializer::Materializer;
use std::path::PathBuf;

/// Runtime context for CLI execution: the directory the project root is
/// created under (the current directory for the binary).
pub struct RunContext {
    output_parent: PathBuf,
}

impl RunContext {
    pub fn new(output_parent: PathBuf) -> Self {
        Self { output_parent }
    }

    /// Execute the scaffold command, returning the formatted output.
    pub fn execute(&self, cli: &Cli) -> Result<String, ScaffoldError> {
        if cli.format != "text" && cli.format != "json" {
            return Err(invalid_format(&cli.format));
        }

        let tree = template::project_tree();

        if cli.list {
            let preview = ScaffoldPreview::from_tree(&cli.project_name, &tree);
            if cli.format == "json" {
                to_json(&preview)
            } else {
                Ok(format_scaffold_preview(&preview))
            }
        } else {
            let project_root = self.output_parent.join(&cli.project_name);
            let report = Materializer::new(project_root).materialize(&tree)?;
            let summary = ScaffoldSummary::new(&cli.project_name, &report);
            if cli.format == "json" {
                to_json(&summary)
            } else {
                Ok(format_scaffold_summary(&summary))
            }
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ScaffoldError> {
    serde_json::to_string_pretty(value).map_err(|e| ScaffoldError::Config(e.to_string()))
}

fn invalid_format(format: &str) -> ScaffoldError {
    ScaffoldError::Config(format!(
        "Invalid format: '{}'. Must be 'text' or 'json'.",
        format
    ))
}
