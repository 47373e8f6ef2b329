//! Self-play game generation CLI.
//!
//! Plays games between registered agents and outputs records as JSONL.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N          Number of games to play (default: 10)
//!   --threads N        Number of parallel threads (default: 4)
//!   --seed N           Random seed, 0 for entropy (default: 0)
//!   --mrx-ai NAME      Agent playing Mr X (default: greedy)
//!   --detective-ai NAME Agent playing the detectives (default: greedy)
//!   --detectives N     Number of detectives, 1-5 (default: 5)
//!   --rounds N         Mr X turns, at most 24 (default: 24)
//!   --movetime MS      Time budget per move in ms (default: 100)
//!   --board FILE       Board description (default: bundled demo board)
//!   --output FILE      Output file path (default: stdout)
//!   --quiet            Suppress progress and summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::process;
use std::str::FromStr;
use std::time::Instant;

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use manhunt::selfplay::{self, SelfPlayConfig};

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Reads the value following flag `args[*i]`, exiting with usage on failure.
fn value<T: FromStr>(args: &[String], i: &mut usize) -> T {
    let flag = &args[*i];
    *i += 1;
    match args.get(*i).map(|v| v.parse::<T>()) {
        Some(Ok(v)) => v,
        _ => {
            eprintln!("invalid or missing value for {}", flag);
            print_usage();
            process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => config.num_games = value(&args, &mut i),
            "--threads" => config.threads = value(&args, &mut i),
            "--seed" => config.seed = value(&args, &mut i),
            "--mrx-ai" => config.mr_x_ai = value(&args, &mut i),
            "--detective-ai" => config.detective_ai = value(&args, &mut i),
            "--detectives" => config.detectives = value(&args, &mut i),
            "--rounds" => config.rounds = value(&args, &mut i),
            "--movetime" => config.movetime_ms = value(&args, &mut i),
            "--board" => config.graph_path = Some(value(&args, &mut i)),
            "--output" => output_path = Some(value(&args, &mut i)),
            "--quiet" => config.quiet = true,
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    init_tracing(if config.quiet { "warn" } else { "info" });
    info!(
        games = config.num_games,
        threads = config.threads,
        mr_x = %config.mr_x_ai,
        detectives = %config.detective_ai,
        "starting self-play"
    );

    let start = Instant::now();
    let games = match selfplay::run_self_play(&config) {
        Ok(g) => g,
        Err(e) => {
            error!(error = %e, "self-play failed");
            process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    if !config.quiet {
        info!(
            "Completed {} games in {:.1}s ({:.1} games/s)",
            games.len(),
            elapsed.as_secs_f64(),
            games.len() as f64 / elapsed.as_secs_f64().max(1e-9)
        );
        selfplay::print_summary(&games);
    }

    let written = match &output_path {
        Some(path) => File::create(path)
            .and_then(|file| selfplay::write_jsonl(&games, &mut BufWriter::new(file))),
        None => {
            let stdout = io::stdout();
            selfplay::write_jsonl(&games, &mut BufWriter::new(stdout.lock()))
        }
    };
    if let Err(e) = written {
        error!(error = %e, "failed to write output");
        process::exit(1);
    }
    if let Some(path) = output_path {
        info!("Wrote {} games to {}", games.len(), path);
    }
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N            Number of games to play (default: 10)");
    eprintln!("  --threads N          Number of parallel threads (default: 4)");
    eprintln!("  --seed N             Random seed, 0 for entropy (default: 0)");
    eprintln!("  --mrx-ai NAME        Agent playing Mr X (default: greedy)");
    eprintln!("  --detective-ai NAME  Agent playing the detectives (default: greedy)");
    eprintln!("  --detectives N       Number of detectives, 1-5 (default: 5)");
    eprintln!("  --rounds N           Mr X turns, at most 24 (default: 24)");
    eprintln!("  --movetime MS        Time budget per move in ms (default: 100)");
    eprintln!("  --board FILE         Board description (default: bundled demo board)");
    eprintln!("  --output FILE        Output file path (default: stdout)");
    eprintln!("  --quiet              Suppress progress and summary output");
    eprintln!("  --help               Show this help");
}
