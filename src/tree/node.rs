//! Node model for the scaffold tree

use std::path::PathBuf;

/// A single node in the scaffold tree: a directory with ordered children or a
/// file with literal content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory(DirectoryNode),
    File(FileNode),
}

/// Directory node with ordered `(name, child)` pairs.
///
/// Insertion order defines creation order. Sibling names must be unique; the
/// descriptor is authored statically, so uniqueness is asserted by tests
/// rather than enforced at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryNode {
    pub children: Vec<(String, Node)>,
}

/// File node holding literal textual content, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub content: String,
}

/// Flat enumeration element: one path the tree describes, relative to the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A directory entry with its relative path
    Directory { path: PathBuf },
    /// A file entry with its relative path
    File { path: PathBuf },
}

impl Entry {
    /// The relative path of this entry.
    pub fn path(&self) -> &PathBuf {
        match self {
            Entry::Directory { path } | Entry::File { path } => path,
        }
    }
}

impl Node {
    /// Create a directory node from `(name, child)` pairs.
    pub fn dir(children: Vec<(String, Node)>) -> Self {
        Node::Directory(DirectoryNode { children })
    }

    /// Create a file node with the given literal content.
    pub fn file(content: impl Into<String>) -> Self {
        Node::File(FileNode {
            content: content.into(),
        })
    }

    /// Enumerate every path this tree describes, in pre-order.
    ///
    /// Paths are relative to the tree root; the root itself is not listed.
    /// No filesystem access takes place.
    pub fn entries(&self) -> Vec<Entry> {
        let mut entries = Vec::new();
        if let Node::Directory(dir) = self {
            collect_entries(dir, PathBuf::new(), &mut entries);
        }
        entries
    }
}

fn collect_entries(dir: &DirectoryNode, prefix: PathBuf, entries: &mut Vec<Entry>) {
    for (name, child) in &dir.children {
        let path = prefix.join(name);
        match child {
            Node::Directory(subdir) => {
                entries.push(Entry::Directory { path: path.clone() });
                collect_entries(subdir, path, entries);
            }
            Node::File(_) => {
                entries.push(Entry::File { path });
            }
        }
    }
}
