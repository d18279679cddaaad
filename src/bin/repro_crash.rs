//! Reproduce AFL crashes without AFL instrumentation
//!
//! Usage: cargo run --bin repro_crash -- <crash_file> [--verbose]
//!
//! Replays the operation script step by step, logging each op and the
//! sequence before and after it. Set `RUST_LOG=debug` or pass `--verbose`
//! to see every step.

use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use posrange::harness::{Op, Script};

static START_TIME: OnceLock<Instant> = OnceLock::new();

#[derive(Parser)]
#[command(name = "repro_crash")]
#[command(about = "Replay a fuzz input against the algorithm models")]
struct Args {
    /// Crash file written by the AFL harness.
    crash_file: PathBuf,

    /// Log every op and the sequence around it.
    #[arg(short, long)]
    verbose: bool,
}

/// Log to stderr as `[HH:MM:SS] LEVEL: message`, elapsed since startup.
fn init_logger(verbose: bool) {
    START_TIME.set(Instant::now()).ok();

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format(|buf, record| {
            let elapsed = START_TIME.get().map(|t| t.elapsed()).unwrap_or_default();
            let secs = elapsed.as_secs();
            writeln!(
                buf,
                "[{:02}:{:02}:{:02}] {}: {}",
                secs / 3600,
                (secs % 3600) / 60,
                secs % 60,
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let data = std::fs::read(&args.crash_file)
        .with_context(|| format!("failed to read {}", args.crash_file.display()))?;
    info!("Input: {} bytes", data.len());
    debug!(
        "Hex: {}",
        data.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(" ")
    );

    let mut script = Script::new();
    let mut remaining = &data[..];
    while let Some((op, rest)) = Op::from_bytes(remaining) {
        remaining = rest;
        let step = script.applied();
        debug!("Op {}: {:?}", step, op);
        debug!("  Before: len={} {:?}", script.sequence().len(), script.sequence());

        script
            .apply(&op)
            .with_context(|| format!("op {} broke an invariant", step))?;

        debug!("  After: len={} {:?}", script.sequence().len(), script.sequence());
    }

    if !remaining.is_empty() {
        info!("Ignored {} trailing bytes", remaining.len());
    }
    info!(
        "All {} ops passed; final length {}",
        script.applied(),
        script.sequence().len()
    );
    return Ok(());
}
