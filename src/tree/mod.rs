//! Scaffold Tree
//!
//! Represents the desired project layout as a tree, where each node is either
//! a directory with ordered children or a file with literal placeholder
//! content, and provides the traversal that writes the tree to disk.

pub mod materializer;
pub mod node;
