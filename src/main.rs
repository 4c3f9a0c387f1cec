use anyhow::{ensure, Result};
use clap::Parser;
use std::{fs, path::PathBuf};

use babiprep::convert;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the raw bAbI task files
    #[arg(short, long)]
    source_dir: PathBuf,

    /// Directory the converted dataset is written to
    #[arg(short, long)]
    target_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    ensure!(
        args.source_dir.is_dir(),
        "source directory not found: {}",
        args.source_dir.display()
    );

    // Collect a vector of all file paths in the source directory.
    let mut paths = fs::read_dir(&args.source_dir)?
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect::<Vec<_>>();
    paths.sort();

    let summary = convert(&paths, &args.target_dir)?;
    println!(
        "converted {} files into {} stories ({} vocabulary entries)",
        summary.files, summary.stories, summary.vocab_size
    );
    Ok(())
}
