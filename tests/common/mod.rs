#![allow(dead_code)]

use boxtree::{IgnoreSet, TreeNode};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    populate(tmp.path(), paths);
    tmp
}

/// Like `create_fixture`, but builds the structure inside a named
/// subdirectory so the rendered root name is predictable.
pub fn create_named_fixture(name: &str, paths: &[&str]) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join(name);
    fs::create_dir_all(&root).unwrap();
    populate(&root, paths);
    (tmp, root)
}

fn populate(root: &Path, paths: &[&str]) {
    for p in paths {
        let full = root.join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
}

/// Node holding only the given files.
pub fn files(names: &[&str]) -> TreeNode {
    names
        .iter()
        .fold(TreeNode::new(), |node, name| node.with_file(*name))
}

/// Ignore set from a list of names.
pub fn ignoring(names: &[&str]) -> IgnoreSet {
    names.iter().map(|n| n.to_string()).collect()
}

/// Sorted copy of a node's file names (scan order is unspecified).
pub fn sorted_files(node: &TreeNode) -> Vec<String> {
    let mut names = node.files.clone();
    names.sort();
    names
}

/// Sorted copy of a node's subdirectory names.
pub fn sorted_children(node: &TreeNode) -> Vec<String> {
    let mut names: Vec<String> = node.children.keys().cloned().collect();
    names.sort();
    names
}
