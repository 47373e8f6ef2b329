//! Integration tests for the manhunt engine binary.
//!
//! Tests full protocol sessions by spawning the engine process, sending
//! commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the engine and collects stdout lines.
fn run_engine(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_manhunt");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start manhunt");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

/// Lines between a `moves` command and its `end` marker.
fn move_list(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .take_while(|l| *l != "end")
        .cloned()
        .collect()
}

#[test]
fn handshake_lists_options() {
    let lines = run_engine(&["manhunt", "quit"]);

    assert!(lines.iter().any(|l| l == "id name manhunt"));
    assert_eq!(lines.last().map(String::as_str), Some("manhuntok"));
    let options: Vec<&String> = lines.iter().filter(|l| l.starts_with("option ")).collect();
    assert!(!options.is_empty());
    for opt in options {
        assert!(opt.contains("type "), "option line missing type: {}", opt);
    }
}

#[test]
fn isready_response() {
    let lines = run_engine(&["isready", "quit"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}

#[test]
fn unknown_and_empty_lines_are_ignored() {
    let lines = run_engine(&["foobar", "", "  ", "isready", "quit"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}

#[test]
fn commands_before_newgame_produce_no_output() {
    let lines = run_engine(&["moves", "go", "status", "play mrx 1 taxi 2", "isready", "quit"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}

#[test]
fn newgame_then_status_and_moves() {
    let lines = run_engine(&[
        "setoption name Seed value 21",
        "setoption name Detectives value 3",
        "newgame",
        "status",
        "moves",
        "quit",
    ]);

    assert_eq!(lines[0], "turn mrx");
    let moves = move_list(&lines[1..]);
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.starts_with("mrx ")));
    assert_eq!(lines.last().map(String::as_str), Some("end"));
}

#[test]
fn play_first_listed_move() {
    let setup = [
        "setoption name Seed value 8",
        "setoption name Detectives value 2",
        "newgame",
        "moves",
    ];
    let listed = run_engine(&setup);
    let first = listed[0].clone();

    let mut session: Vec<&str> = setup[..3].to_vec();
    let play = format!("play {}", first);
    session.extend([play.as_str(), "status", "log", "quit"]);
    let lines = run_engine(&session);

    assert_eq!(lines[0], "event move_made");
    assert_eq!(lines[1], "turn red green");
    // Round 1 is hidden in the standard schedule.
    assert!(lines[2].starts_with("1 ") && lines[2].ends_with(" hidden"));
    assert_eq!(lines.last().map(String::as_str), Some("end"));
}

#[test]
fn illegal_play_is_ignored() {
    let lines = run_engine(&[
        "setoption name Seed value 8",
        "newgame",
        "play red 1 taxi 2",
        "play not a move",
        "status",
        "quit",
    ]);
    assert_eq!(lines, vec!["turn mrx".to_string()]);
}

#[test]
fn go_plays_game_to_completion() {
    let mut session = vec![
        "setoption name Seed value 5",
        "setoption name Detectives value 2",
        "setoption name Rounds value 4",
        "setoption name Ai value random",
        "newgame",
    ];
    session.extend(std::iter::repeat("go").take(40));
    session.extend(["status", "quit"]);
    let lines = run_engine(&session);

    let bestmoves = lines.iter().filter(|l| l.starts_with("bestmove ")).count();
    let events = lines.iter().filter(|l| l.starts_with("event ")).count();
    assert!(bestmoves > 0);
    assert_eq!(bestmoves, events);
    assert_eq!(
        lines.iter().filter(|l| *l == "event game_over").count(),
        1
    );
    assert!(lines.last().unwrap().starts_with("winner "));
}

#[test]
fn loadboard_with_bad_path_keeps_demo_board() {
    let lines = run_engine(&[
        "loadboard /nonexistent/board.txt",
        "setoption name Seed value 3",
        "newgame",
        "status",
        "quit",
    ]);
    assert_eq!(lines, vec!["turn mrx".to_string()]);
}

#[test]
fn eof_exits_cleanly() {
    let lines = run_engine(&["manhunt", "isready"]);
    assert!(lines.iter().any(|l| l == "manhuntok"));
    assert!(lines.iter().any(|l| l == "readyok"));
}
