use clap::Parser;
use std::path::PathBuf;

use crate::output::DEFAULT_OUTPUT_FILE;

const EXAMPLES: &str = "\
Examples:
  boxtree                          Render the current directory
  boxtree ~/src/app                Render a project into directory_structure.txt
  boxtree ~/src/app tree.txt       Choose the output file
  boxtree -I target -I .git .      Collapse target/ and .git/
  boxtree --stdout-only .          Print without writing a file";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "boxtree",
    version,
    about = "Render a directory as a box-drawing tree diagram",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Directory to render (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// File the diagram is written to
    #[arg(default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Directory names whose contents are collapsed (repeatable)
    #[arg(short = 'I', long = "ignore", action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Ignore list, one directory name per line (default: ~/.treeignore)
    #[arg(long = "ignore-file", env = "BOXTREE_IGNORE_FILE")]
    pub ignore_file: Option<PathBuf>,

    /// Do not read any ignore file
    #[arg(long = "no-ignore-file")]
    pub no_ignore_file: bool,

    /// Print the diagram without writing the output file
    #[arg(long = "stdout-only")]
    pub stdout_only: bool,

    /// Do not print the diagram (the output file is still written)
    #[arg(short = 'q', long = "quiet", conflicts_with = "stdout_only")]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }
}
