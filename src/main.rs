//! Manhunt -- a hidden-movement pursuit game engine.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG` to change the
//! level (default `warn`).

use std::io::{self, BufRead};

use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use manhunt::engine::{Engine, EngineError};
use manhunt::protocol::parser::{parse_command, Command};

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Runs the main protocol loop, reading commands from stdin and writing
/// responses to stdout.
fn main() {
    init_tracing("warn");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let Some(cmd) = parse_command(&line) else {
            continue;
        };

        let result = match cmd {
            Command::Manhunt => engine.handle_manhunt(&mut out).map_err(EngineError::from),
            Command::IsReady => engine.handle_isready(&mut out).map_err(EngineError::from),
            Command::SetOption { name, value } => {
                engine.set_option(name, value);
                Ok(())
            }
            Command::LoadBoard { path } => engine.load_board(&path),
            Command::NewGame => engine.new_game(),
            Command::Moves => engine.handle_moves(&mut out),
            Command::Play { notation } => engine.handle_play(&notation, &mut out),
            Command::Go => engine.handle_go(&mut out),
            Command::Status => engine.handle_status(&mut out),
            Command::Log => engine.handle_log(&mut out),
            Command::Quit => break,
        };

        match result {
            Ok(()) => {}
            Err(EngineError::Io(e)) => {
                error!(error = %e, "output failed");
                break;
            }
            Err(e) => warn!(command = %line.trim(), error = %e, "command failed"),
        }
    }
}
