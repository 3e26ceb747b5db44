use snafu::{ensure, Snafu};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::TreeNode;

#[derive(Debug, Snafu)]
pub enum ScanError {
    /// The requested root does not exist or is not a directory.
    #[snafu(display("Directory Not Found: {}", path.display()))]
    NotFound { path: PathBuf },
}

/// Abstraction over tree construction so it can be swapped or mocked.
pub trait TreeScanner {
    fn scan(&self, root: &Path) -> Result<TreeNode, ScanError>;
}

/// Default `TreeScanner` that lists directories with walkdir.
pub struct WalkdirScanner;

impl TreeScanner for WalkdirScanner {
    fn scan(&self, root: &Path) -> Result<TreeNode, ScanError> {
        scan(root)
    }
}

/// Scan `root` into a [`TreeNode`] with a single depth-first walk.
///
/// Entries keep the order the directory listing yields; nothing is sorted.
/// Symlinked directories are descended into. A link back to one of its own
/// ancestors is reported by walkdir and kept as an empty directory.
pub fn scan(root: &Path) -> Result<TreeNode, ScanError> {
    ensure!(root.is_dir(), NotFoundSnafu { path: root });
    Ok(build_tree(root))
}

/// Open directories from the root down to the entry being visited. Index `d`
/// holds the directory at walk depth `d`; the root's name is never used.
type DirStack = Vec<(String, TreeNode)>;

fn build_tree(root: &Path) -> TreeNode {
    debug!(path = %root.display(), "scanning tree");
    let mut stack: DirStack = vec![(String::new(), TreeNode::new())];

    let walker = WalkDir::new(root).follow_links(true).min_depth(1);

    for entry_result in walker {
        match entry_result {
            Ok(entry) => {
                unwind(&mut stack, entry.depth());
                let name = entry.file_name().to_string_lossy().into_owned();
                if entry.file_type().is_dir() {
                    debug!(path = %entry.path().display(), "entering directory");
                    stack.push((name, TreeNode::new()));
                } else if let Some((_, parent)) = stack.last_mut() {
                    parent.push_file(name);
                }
            }
            Err(e) => {
                let depth = e.depth();
                let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                let name = path.file_name().map(|n| n.to_string_lossy().into_owned());

                if e.loop_ancestor().is_some() {
                    warn!(path = %path.display(), "symlink loop, not descending");
                    unwind(&mut stack, depth);
                    if let (Some(name), Some((_, parent))) = (name, stack.last_mut()) {
                        parent.insert_child(name, TreeNode::new());
                    }
                } else if depth == 0 || path.is_dir() {
                    // Listing failed; the directory itself is already in the tree.
                    warn!(path = %path.display(), error = %e, "cannot read directory");
                } else {
                    warn!(path = %path.display(), error = %e, "cannot inspect entry");
                    unwind(&mut stack, depth);
                    if let (Some(name), Some((_, parent))) = (name, stack.last_mut()) {
                        parent.push_file(name);
                    }
                }
            }
        }
    }

    unwind(&mut stack, 1);
    stack.pop().map(|(_, node)| node).unwrap_or_default()
}

/// Close finished directories until the top of the stack is the parent of an
/// entry at `depth`, moving each closed node into its parent.
fn unwind(stack: &mut DirStack, depth: usize) {
    while stack.len() > depth.max(1) {
        if let Some((name, node)) = stack.pop() {
            if let Some((_, parent)) = stack.last_mut() {
                parent.insert_child(name, node);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_root_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let err = scan(&missing).unwrap_err();
        assert!(matches!(err, ScanError::NotFound { ref path } if *path == missing));
        assert!(err.to_string().starts_with("Directory Not Found: "));
    }

    #[test]
    fn file_root_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        assert!(matches!(scan(&file), Err(ScanError::NotFound { .. })));
    }

    #[test]
    fn nested_directories_become_children() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a/b")).unwrap();
        fs::write(tmp.path().join("a/b/leaf.txt"), "").unwrap();

        let tree = scan(tmp.path()).unwrap();
        assert!(tree.files.is_empty());
        let a = tree.children.get("a").unwrap();
        let b = a.children.get("b").unwrap();
        assert_eq!(b.files, vec!["leaf.txt"]);
        assert!(b.children.is_empty());
    }

    #[test]
    fn siblings_after_deep_subtree_attach_to_root() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a/b/c")).unwrap();
        fs::write(tmp.path().join("a/b/c/deep.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("z")).unwrap();
        fs::write(tmp.path().join("top.txt"), "").unwrap();

        let tree = scan(tmp.path()).unwrap();
        assert_eq!(tree.files, vec!["top.txt"]);
        assert_eq!(tree.child_count(), 2);
        assert!(tree.children.get("z").unwrap().is_empty());
        let c = &tree.children.get("a").unwrap().children.get("b").unwrap().children;
        assert_eq!(c.get("c").unwrap().files, vec!["deep.txt"]);
    }

    #[test]
    fn unwind_moves_closed_dirs_into_parents() {
        let mut stack: DirStack = vec![
            (String::new(), TreeNode::new()),
            ("a".to_string(), TreeNode::new()),
            ("b".to_string(), TreeNode::new().with_file("x")),
        ];
        unwind(&mut stack, 1);
        assert_eq!(stack.len(), 1);
        let root = &stack[0].1;
        let b = root.children.get("a").unwrap().children.get("b").unwrap();
        assert_eq!(b.files, vec!["x"]);
    }

    #[test]
    #[cfg(unix)]
    fn symlink_to_ancestor_is_an_empty_directory() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("a")).unwrap();
        std::os::unix::fs::symlink(tmp.path(), tmp.path().join("a/up")).unwrap();

        let tree = scan(tmp.path()).unwrap();
        let a = tree.children.get("a").unwrap();
        assert!(a.children.get("up").unwrap().is_empty());
    }

    #[test]
    fn mock_scanner_via_trait() {
        struct Fixed(TreeNode);
        impl TreeScanner for Fixed {
            fn scan(&self, _root: &Path) -> Result<TreeNode, ScanError> {
                Ok(self.0.clone())
            }
        }
        let fixed = Fixed(TreeNode::new().with_file("only"));
        let tree = fixed.scan(Path::new("/anywhere")).unwrap();
        assert_eq!(tree.files, vec!["only"]);
    }
}
