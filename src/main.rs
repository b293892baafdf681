//! Headless cascade runner (default binary).
//!
//! Deals a seeded board, runs the countdown, then lets a greedy autoplayer
//! tap through swaps until the clock or the swap limit runs out.
//! Set `RUST_LOG=debug` to watch individual cascade passes.

use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tile_cascade::cli::{parse_args, run_autoplay};
use tile_cascade::engine::SessionConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = parse_args(&args, SessionConfig::from_env())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_autoplay(&opts, &mut out)?;
    Ok(())
}
