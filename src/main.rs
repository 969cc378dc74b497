mod averager;
mod error;
mod record;
mod stats;

use crate::averager::LineAverager;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// Log file with one space-separated record per line.
    file: PathBuf,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let mut averager = LineAverager::new();
    averager
        .add_file(&args.file)
        .with_context(|| format!("failed to average {:?}", args.file))?;

    let summary = averager.summary().context("failed to compute averages")?;
    log::info!("averaged {} records", summary.n_records);
    println!("{summary}");

    Ok(())
}
