//! Batch point-in-polygon encoder.
//!
//! Reads polygons and query points in the line format described in
//! `geoencode::input` and writes the containing polygon id for every point.

mod config;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use geoencode::input;

use crate::config::Config;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "encode")]
#[command(about = "Find the polygon containing each query point")]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Optional TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Close every ring by repeating its first vertex when needed
    #[arg(long)]
    close_rings: bool,

    /// Log filter used when RUST_LOG is not set (e.g. "info", "debug")
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    config.apply_overrides(args.close_rings, args.log_level.as_deref());

    // Initialize logging; stdout carries results, so logs go to stderr
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.run.log_level))
        .context("Invalid log level")?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Ring closure: {}", config.run.ring_closure);

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            info!("Reading {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            Box::new(BufReader::with_capacity(64 * 4096, file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    let stats = input::run(reader, writer, config.run.ring_closure)
        .context("Failed to classify input")?;
    stats.log_summary();

    Ok(())
}
