use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "suitescout")]
#[command(about = "Find the Test functions that bootstrap Ginkgo suites", long_about = None)]
pub struct Args {
    /// Directory to scan for *_test.go files
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub dir: PathBuf,

    /// Parse every candidate file instead of pre-filtering by substring
    #[arg(long)]
    pub no_prefilter: bool,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_dir(&self.dir)
    }
}

pub fn validate_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Directory does not exist: {}", path.display());
    }
    if !path.is_dir() {
        anyhow::bail!("Not a directory: {}", path.display());
    }
    Ok(())
}
