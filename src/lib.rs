#![forbid(unsafe_code)]
//! boxtree — render a directory as a box-drawing tree diagram.

pub mod cli;
pub mod ignore;
pub mod logging;
pub mod output;
pub mod render;
pub mod tree;

pub use ignore::IgnoreSet;
pub use render::{render, render_dir};
pub use tree::{scan, ScanError, TreeNode};
