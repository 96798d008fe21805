//! Stencil CLI Binary
//!
//! Command-line interface for the Stencil project scaffolding generator.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use stencil::cli::{Cli, RunContext};
use stencil::logging::{init_logging, LoggingConfig};
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args and env vars
    let logging_config = build_logging_config(&cli);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Stencil CLI starting");

    let context = RunContext::new(PathBuf::from("."));

    match context.execute(&cli) {
        Ok(output) => {
            info!("Scaffold command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Scaffold command failed: {}", e);
            eprintln!("{}", stencil::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args.
/// Precedence: explicit --log-level overrides --quiet overrides --verbose.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig::default();

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if cli.quiet {
        config.level = "off".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
