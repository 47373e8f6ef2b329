//! Command parser.
//!
//! Parses incoming command-loop lines from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

use tracing::warn;

/// A parsed command-loop command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Protocol handshake.
    Manhunt,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Load a board description from disk.
    LoadBoard { path: String },

    /// Start a new game on the current board.
    NewGame,

    /// List the legal moves of the current position.
    Moves,

    /// Apply a move given in notation.
    Play { notation: String },

    /// Ask the configured agent for a move and apply it.
    Go,

    /// Report whose turn it is, or the winners.
    Status,

    /// Print Mr X's travel log.
    Log,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let first = *tokens.first()?;

    match first {
        "manhunt" => Some(Command::Manhunt),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "moves" => Some(Command::Moves),
        "go" => Some(Command::Go),
        "status" => Some(Command::Status),
        "log" => Some(Command::Log),

        "setoption" => parse_setoption(&tokens),
        "loadboard" => parse_loadboard(trimmed),
        "play" => parse_play(&tokens),

        other => {
            warn!(command = other, "unknown command");
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let (name, value) = match tokens.iter().position(|&t| t == "value") {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                warn!("malformed setoption: empty name");
                return None;
            }
            let value = (!value_parts.is_empty()).then(|| value_parts.join(" "));
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `loadboard <path>`. The path is everything after the keyword.
fn parse_loadboard(line: &str) -> Option<Command> {
    let path = line.strip_prefix("loadboard").unwrap_or("").trim();
    if path.is_empty() {
        warn!("malformed loadboard: expected 'loadboard <path>'");
        return None;
    }
    Some(Command::LoadBoard {
        path: path.to_string(),
    })
}

/// Parses `play <move notation>`.
fn parse_play(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        warn!("malformed play: expected 'play <move>'");
        return None;
    }
    Some(Command::Play {
        notation: tokens[1..].join(" "),
    })
}
