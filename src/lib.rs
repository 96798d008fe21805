//! Stencil: Project Scaffolding Generator
//!
//! Materializes a fixed directory tree of placeholder files representing a
//! modular front-end application layout. The desired structure is declared as
//! static data and written to disk in a single depth-first pass.

pub mod cli;
pub mod error;
pub mod logging;
pub mod template;
pub mod tree;
