//! CLI domain: parse, route, and output only.
//! No domain logic; the route resolves the output root and dispatches to the
//! materializer and presentation.

mod output;
mod parse;
mod route;

pub use output::{
    format_scaffold_preview, format_scaffold_summary, map_error, ScaffoldPreview, ScaffoldSummary,
};
pub use parse::Cli;
pub use route::RunContext;
