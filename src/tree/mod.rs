//! In-memory directory tree and the filesystem scanner that builds it.

mod scan;

use hashlink::LinkedHashMap;
use std::path::{Component, Path, PathBuf};

pub use scan::{scan, ScanError, TreeScanner, WalkdirScanner};

/// The contents of one directory.
///
/// A node never knows its own name: the parent supplies it as the key in
/// `children`, and the root's name comes from whoever renders it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    /// Leaf entry names, in listing order.
    pub files: Vec<String>,
    /// Subdirectories keyed by bare name, in the order they were encountered.
    pub children: LinkedHashMap<String, TreeNode>,
}

/// One renderable entry of a node: files come first, then subdirectories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    File(&'a str),
    Dir(&'a str, &'a TreeNode),
}

impl TreeNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_file(&mut self, name: impl Into<String>) {
        self.files.push(name.into());
    }

    /// Insert a subdirectory. Re-inserting an existing name replaces its
    /// subtree but keeps its original position.
    pub fn insert_child(&mut self, name: impl Into<String>, node: TreeNode) {
        self.children.replace(name.into(), node);
    }

    /// Builder form of [`TreeNode::push_file`].
    pub fn with_file(mut self, name: impl Into<String>) -> Self {
        self.push_file(name);
        self
    }

    /// Builder form of [`TreeNode::insert_child`].
    pub fn with_child(mut self, name: impl Into<String>, node: TreeNode) -> Self {
        self.insert_child(name, node);
        self
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Number of entries rendered directly under this node.
    pub fn entry_count(&self) -> usize {
        self.file_count() + self.child_count()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Entries in render order: every file, then every subdirectory.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.files
            .iter()
            .map(|f| Entry::File(f.as_str()))
            .chain(
                self.children
                    .iter()
                    .map(|(name, node)| Entry::Dir(name.as_str(), node)),
            )
    }
}

/// Display name for a scanned root: its final path component, or the whole
/// path when there is none (e.g. `/`).
pub fn root_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Absolute form of `path` relative to `cwd`, with `.` and `..` removed as
/// text. Symlinks are left alone so the root keeps the name it was given.
pub fn expand_path(path: &Path, cwd: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in cwd.join(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
