use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use partflow::System;

/// Route parts through workflows and print the summed ratings of accepted parts
#[derive(Parser, Debug)]
#[command(name = "partflow")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the input file: workflows, a blank line, then parts
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let system = System::from_file(&cli.input)
        .with_context(|| format!("failed to load input file: {}", cli.input.display()))?;
    info!(%system, "loaded input");

    let total = system
        .total_accepted()
        .context("failed to evaluate parts")?;

    println!("{total}");
    Ok(())
}
