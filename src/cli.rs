use std::io::Write;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::core::productive_swaps;
use crate::engine::{PuzzleSession, SessionConfig, SessionSummary, TapOutcome};
use crate::types::{Position, TICK_MS};

/// Simulated time between two swaps of the autoplayer
pub const THINK_MS: u32 = 480;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub config: SessionConfig,
    /// Stop after this many swaps even if time remains
    pub max_swaps: u32,
    /// Emit one JSON object per line instead of text
    pub json: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config: SessionConfig::default(),
            max_swaps: 30,
            json: false,
        }
    }
}

/// One swap as reported by the runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapReport {
    pub swap: u32,
    pub a: Position,
    pub b: Position,
    pub gained: u32,
    pub chain: u32,
    pub removed: u32,
    pub score: u32,
    pub time_remaining_ms: u32,
    pub board_hash: u64,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Line<'a> {
    Swap(&'a SwapReport),
    Summary(&'a SessionSummary),
}

/// Parse command-line flags on top of `base` (usually [`SessionConfig::from_env`]).
pub fn parse_args(args: &[String], base: SessionConfig) -> Result<RunOptions> {
    let mut opts = RunOptions {
        config: base,
        ..RunOptions::default()
    };

    fn value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
        let v = args
            .get(i)
            .ok_or_else(|| anyhow!("missing value for {}", flag))?;
        v.parse::<T>()
            .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
    }

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                opts.config.seed = value(args, i, "--seed")?;
            }
            "--size" => {
                i += 1;
                opts.config.grid_size = value(args, i, "--size")?;
            }
            "--colors" => {
                i += 1;
                opts.config.color_count = value(args, i, "--colors")?;
            }
            "--duration-ms" => {
                i += 1;
                opts.config.duration_ms = value(args, i, "--duration-ms")?;
            }
            "--swaps" => {
                i += 1;
                opts.max_swaps = value(args, i, "--swaps")?;
            }
            "--json" => opts.json = true,
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }

    opts.config
        .validate()
        .context("invalid session configuration")?;
    Ok(opts)
}

/// Pick the next swap: the first productive one, else the top-left pair.
fn choose_swap(session: &PuzzleSession) -> (Position, Position) {
    productive_swaps(session.engine().board())
        .into_iter()
        .next()
        .unwrap_or((Position::new(0, 0), Position::new(0, 1)))
}

/// Play a seeded session headlessly, writing one report per swap to `out`.
pub fn run_autoplay(opts: &RunOptions, out: &mut impl Write) -> Result<SessionSummary> {
    let mut session = PuzzleSession::new(opts.config.clone())?;

    while session.countdown_display().is_some() {
        session.tick(TICK_MS);
    }

    while !session.is_over() && session.swaps() < opts.max_swaps {
        let (a, b) = choose_swap(&session);
        debug!(%a, %b, "autoplay move");
        session.tap(a)?;
        let TapOutcome::Swapped(res) = session.tap(b)? else {
            return Err(anyhow!("tap {} after {} did not swap", b, a));
        };

        let report = SwapReport {
            swap: session.swaps(),
            a,
            b,
            gained: res.accumulated_score,
            chain: res.chain_count(),
            removed: res.total_removed,
            score: session.score(),
            time_remaining_ms: session.time_remaining_ms(),
            board_hash: session.snapshot().board_hash,
        };
        if opts.json {
            writeln!(out, "{}", serde_json::to_string(&Line::Swap(&report))?)?;
        } else {
            writeln!(
                out,
                "#{:<3} {} <-> {}  +{:<5} chain {}  score {}",
                report.swap, a, b, report.gained, report.chain, report.score
            )?;
        }

        let mut waited = 0;
        while waited < THINK_MS && !session.is_over() {
            session.tick(TICK_MS);
            waited += TICK_MS;
        }
    }

    let summary = session.summary();
    info!(
        seed = summary.seed,
        score = summary.score,
        swaps = summary.swaps,
        best_chain = summary.best_chain,
        "autoplay finished"
    );
    if opts.json {
        writeln!(out, "{}", serde_json::to_string(&Line::Summary(&summary))?)?;
    } else {
        write!(out, "{}", session.engine().board())?;
        writeln!(
            out,
            "final score {} in {} swaps (best chain {}, {} tiles)",
            summary.score, summary.swaps, summary.best_chain, summary.tiles_cleared
        )?;
    }
    Ok(summary)
}
