//! Materializer: writes a scaffold tree to the filesystem

use crate::error::ScaffoldError;
use crate::tree::node::Node;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument, trace};

/// Counts of work performed by one materialization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Directories newly created (including the root when it was absent)
    pub directories_created: usize,
    /// Directories that already existed and were reused
    pub directories_reused: usize,
    /// Files written (existing files are overwritten and counted here)
    pub files_written: usize,
}

/// Materializer for scaffold trees
///
/// A pure traversal parameterized by a base path: directories are created
/// before their children are visited, files are written as leaves are
/// reached. The first I/O failure aborts the remaining traversal; entries
/// already written stay on disk.
pub struct Materializer {
    base: PathBuf,
}

impl Materializer {
    /// Create a new materializer rooted at the given base path.
    ///
    /// The base path need not exist yet; it is created as the root directory
    /// node of the tree.
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Write the tree to disk under the base path.
    #[instrument(skip(self, node), fields(base = %self.base.display()))]
    pub fn materialize(&self, node: &Node) -> Result<MaterializeReport, ScaffoldError> {
        let start = Instant::now();
        info!("Starting scaffold materialization");

        let mut report = MaterializeReport::default();
        self.materialize_at(&self.base, node, &mut report)?;

        info!(
            directories_created = report.directories_created,
            directories_reused = report.directories_reused,
            files_written = report.files_written,
            duration_ms = start.elapsed().as_millis(),
            "Materialization completed"
        );

        Ok(report)
    }

    fn materialize_at(
        &self,
        path: &Path,
        node: &Node,
        report: &mut MaterializeReport,
    ) -> Result<(), ScaffoldError> {
        match node {
            Node::Directory(dir) => {
                if path.is_dir() {
                    trace!(path = %path.display(), "Directory already exists, reusing");
                    report.directories_reused += 1;
                } else {
                    std::fs::create_dir_all(path)
                        .map_err(|e| ScaffoldError::io(path, e))?;
                    debug!(path = %path.display(), "Created directory");
                    report.directories_created += 1;
                }

                for (name, child) in &dir.children {
                    self.materialize_at(&path.join(name), child, report)?;
                }
            }
            Node::File(file) => {
                std::fs::write(path, &file.content)
                    .map_err(|e| ScaffoldError::io(path, e))?;
                debug!(path = %path.display(), bytes = file.content.len(), "Wrote file");
                report.files_written += 1;
            }
        }

        Ok(())
    }
}
