use anyhow::{Context, Result};
use clap::Parser;

use suitescout::cli::Args;
use suitescout::logging::{self, Verbosity};
use suitescout::{discover_suites, output, ScanOptions};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let options = ScanOptions {
        no_prefilter: args.no_prefilter,
    };

    let entries = discover_suites(&args.dir, &options)
        .with_context(|| format!("Failed to scan {}", args.dir.display()))?;

    let json = output::to_json(&entries)?;

    match args.output_file {
        Some(path) => std::fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(())
}
