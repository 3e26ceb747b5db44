//! Box-drawing rendering of a scanned [`TreeNode`].

mod layout;
mod width;

use std::path::Path;

use crate::ignore::IgnoreSet;
use crate::tree::{root_name, Entry, ScanError, TreeNode, TreeScanner};

pub use layout::Connector;
pub use width::display_width;

use layout::CONTINUATION_BAR;

/// Terminator appended to every rendered line.
pub const LINE_END: &str = "\n";

/// Render `node` under `name` as a box-drawing diagram.
///
/// The first entry shares the `"<name>/ "` header line; later lines are
/// indented by the header's display width. A node whose name is in `ignore`
/// renders as the bare header line, whatever it contains.
pub fn render(node: &TreeNode, name: &str, ignore: &IgnoreSet) -> String {
    let header = format!("{name}/ ");
    let mut out = header.clone();

    if ignore.contains(name) || node.is_empty() {
        out.push_str(LINE_END);
        return out;
    }

    let indent = display_width(&header);
    let total = node.entry_count();

    for (index, entry) in node.entries().enumerate() {
        let connector = Connector::select(index, total);
        match entry {
            Entry::File(file) => {
                push_branch(&mut out, index, indent, connector, file);
                out.push_str(LINE_END);
            }
            Entry::Dir(dir_name, child) => {
                let block = render(child, dir_name, ignore);
                let mut lines = block.split_inclusive(LINE_END);
                if let Some(first) = lines.next() {
                    push_branch(&mut out, index, indent, connector, first);
                }
                for line in lines {
                    push_continuation(&mut out, indent, connector, line);
                }
            }
        }
    }

    // A pass-through directory gets a blank line to match multi-entry spacing.
    if node.file_count() == 0 && node.child_count() == 1 {
        out.push_str(LINE_END);
    }

    out
}

/// Scan `path` with `scanner` and render it under its final path component.
pub fn render_dir<S: TreeScanner>(
    scanner: &S,
    path: &Path,
    ignore: &IgnoreSet,
) -> Result<String, ScanError> {
    let tree = scanner.scan(path)?;
    Ok(render(&tree, &root_name(path), ignore))
}

fn push_branch(out: &mut String, index: usize, indent: usize, connector: Connector, text: &str) {
    // The first entry continues the header line.
    if index > 0 {
        push_spaces(out, indent);
    }
    out.push_str(connector.glyph());
    out.push_str(text);
}

fn push_continuation(out: &mut String, indent: usize, connector: Connector, line: &str) {
    if connector.continues_trunk() {
        push_spaces(out, indent);
        out.push_str(CONTINUATION_BAR);
    } else {
        push_spaces(out, indent + 2);
    }
    out.push_str(line);
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}
