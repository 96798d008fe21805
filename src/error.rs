//! Error types for the Stencil scaffolding generator.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by scaffold generation
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScaffoldError {
    /// Wrap an `io::Error` with the path it occurred at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            path: path.into(),
            source,
        }
    }
}
