//! healthmap — command console for the healthcare registry.
//!
//! Reads one command per line from stdin (or `--script`), applies it to a
//! single in-memory `Registry`, and prints results to stdout.  Diagnostics
//! go to stderr through `tracing`; set `RUST_LOG=debug` to see them.

mod command;
mod config;
mod session;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hm_registry::Registry;

/// In-memory directory of healthcare professionals and a road network of
/// localities.
#[derive(Parser, Debug)]
#[command(name = "healthmap")]
#[command(about = "Find nearby professionals and the nearest reachable hospital", long_about = None)]
struct Args {
    /// JSON configuration file (`max_localities`, `nearby_radius`)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read commands from this file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Maximum number of localities (overrides the config file)
    #[arg(long)]
    max_localities: Option<usize>,

    /// Default radius for `nearby` searches (overrides the config file)
    #[arg(long)]
    radius: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = config::resolve(
        args.config.as_deref(),
        config::Overrides {
            max_localities: args.max_localities,
            nearby_radius:  args.radius,
        },
    )?;
    info!(?config, "configuration resolved");

    let mut registry = Registry::new(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening script {}", path.display()))?;
            session::run(&mut registry, BufReader::new(file), &mut out)?;
        }
        None => session::run(&mut registry, io::stdin().lock(), &mut out)?,
    }

    registry.shutdown();
    Ok(())
}
