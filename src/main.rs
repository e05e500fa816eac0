use anyhow::bail;
use clap::Parser;

use crate::config::WorkloadConfig;

pub mod config;
pub mod worker;

const DEFAULT_LOAD: i64 = 10;

/// Simulates a fixed amount of work on a single worker thread
#[derive(Parser, Debug)]
struct Cli {
    /// Number of 500ms pauses the worker performs before finishing.
    /// Overrides the value from `.workload.toml`. E.g. `workload --load 3`
    #[arg(short, long, allow_negative_numbers = true)]
    load: Option<i64>,
}

// Precedence is CLI flag, then config file, then the built-in default.
// Negative values are rejected here, before any thread is spawned
fn resolve_load(cli_load: Option<i64>, config: &WorkloadConfig) -> Result<u64, anyhow::Error> {
    let load = cli_load.or(config.load).unwrap_or(DEFAULT_LOAD);
    if load < 0 {
        bail!("load must be non-negative, got {}", load);
    }

    Ok(load as u64)
}

fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();

    let config = WorkloadConfig::new()?;
    let load = resolve_load(args.load, &config)?;

    worker::run(load)
}
