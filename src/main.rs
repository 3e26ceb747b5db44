#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use boxtree::cli::Args;
use boxtree::output::{print_structure, write_structure};
use boxtree::tree::{expand_path, WalkdirScanner};
use boxtree::{logging, render_dir, IgnoreSet};
use clap::Parser;
use tracing::info;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("boxtree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    logging::init(args.verbose);

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let path = expand_path(&args.path, &cwd);
    let ignore = ignore_set(&args)?;

    let structure = render_dir(&WalkdirScanner, &path, &ignore)?;
    info!(
        path = %path.display(),
        lines = structure.lines().count(),
        ignored = ignore.len(),
        "rendered tree"
    );

    if !args.quiet {
        let mut stdout = std::io::stdout().lock();
        print_structure(&mut stdout, &structure).context("failed to print tree")?;
    }

    if !args.stdout_only {
        write_structure(&args.output, &structure)?;
        info!(output = %args.output.display(), "wrote tree");
    }

    Ok(())
}

fn ignore_set(args: &Args) -> Result<IgnoreSet> {
    let mut ignore = if args.no_ignore_file {
        IgnoreSet::new()
    } else {
        IgnoreSet::load(args.ignore_file.as_deref())?
    };
    ignore.extend(args.ignore.iter().cloned());
    Ok(ignore)
}
