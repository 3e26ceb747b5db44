//! Sinks for the rendered diagram: the terminal and the output file.

use snafu::{ResultExt, Snafu};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::render::LINE_END;

/// Output file used when none is given on the command line.
pub const DEFAULT_OUTPUT_FILE: &str = "directory_structure.txt";

#[derive(Debug, Snafu)]
pub enum OutputError {
    #[snafu(display("Failed to write {}", path.display()))]
    Write { path: PathBuf, source: io::Error },
}

/// Write the diagram verbatim, replacing any existing file.
pub fn write_structure(path: &Path, structure: &str) -> Result<(), OutputError> {
    fs::write(path, structure).context(WriteSnafu { path })
}

/// Print the diagram, adding a final terminator only if it lacks one.
pub fn print_structure<W: Write>(writer: &mut W, structure: &str) -> io::Result<()> {
    writer.write_all(structure.as_bytes())?;
    if !structure.ends_with(LINE_END) {
        writer.write_all(LINE_END.as_bytes())?;
    }
    writer.flush()
}
