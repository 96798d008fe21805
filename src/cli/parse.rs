//! CLI parse: clap types for Stencil. No behavior; definitions only.

use crate::template::DEFAULT_PROJECT_NAME;
use clap::Parser;

/// Stencil CLI - Project scaffolding generator
#[derive(Parser)]
#[command(name = "stencil")]
#[command(about = "Generate a modular front-end project scaffold")]
pub struct Cli {
    /// Project name; the scaffold is created under ./<PROJECT_NAME>
    #[arg(default_value = DEFAULT_PROJECT_NAME)]
    pub project_name: String,

    /// List entries that would be created, without writing anything
    #[arg(long)]
    pub list: bool,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}
