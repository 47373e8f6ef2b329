//! Self-play game generation.
//!
//! Plays full games between registered agents, one agent driving Mr X and
//! another driving every detective. Each game is seeded from the base seed
//! plus its index, so results do not depend on the thread count. Agents are
//! held to their contract: a move outside the legal set aborts that game.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::ai::{AiRegistry, RegistryError};
use crate::board::{new_game, StartError, Station, StationGraph, ALL_PIECES};
use crate::model::Model;
use crate::protocol::{load_graph, parse_graph, GraphError};
use crate::resolve::AdvanceError;

const DEMO_BOARD: &str = include_str!("../data/demo.txt");

/// Configuration for self-play game generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Base random seed (0 = use entropy).
    pub seed: u64,
    /// Registered agent name playing Mr X.
    pub mr_x_ai: String,
    /// Registered agent name playing all detectives.
    pub detective_ai: String,
    /// Number of detectives (1-5).
    pub detectives: usize,
    /// Mr X turns; the standard schedule is cut to this length.
    pub rounds: usize,
    /// Time budget handed to agents per move (milliseconds).
    pub movetime_ms: u64,
    /// Board description file. `None` plays on the bundled demo board.
    pub graph_path: Option<String>,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            threads: 4,
            seed: 0,
            mr_x_ai: "greedy".to_string(),
            detective_ai: "greedy".to_string(),
            detectives: 5,
            rounds: 24,
            movetime_ms: 100,
            graph_path: None,
            quiet: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SelfPlayError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Start(#[from] StartError),

    /// The agent answered with no move or a move outside the legal set.
    #[error("game {game_id}: agent '{agent}' answered '{answer}', which is not a legal move")]
    ContractViolation {
        game_id: usize,
        agent: String,
        answer: String,
    },

    #[error(transparent)]
    Advance(#[from] AdvanceError),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// A complete self-play game record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    /// Winning piece names.
    pub winner: Vec<String>,
    /// Mr X turns played.
    pub rounds: usize,
    pub mr_x_start: Station,
    pub detective_starts: Vec<Station>,
    /// Every move in notation, in play order.
    pub moves: Vec<String>,
}

impl GameRecord {
    pub fn mr_x_won(&self) -> bool {
        self.winner.iter().any(|w| w == "mrx")
    }
}

/// Loads the configured board, or the bundled demo board.
pub fn load_board(config: &SelfPlayConfig) -> Result<Arc<StationGraph>, SelfPlayError> {
    let graph = match &config.graph_path {
        Some(path) => load_graph(path)?,
        None => parse_graph(DEMO_BOARD)?,
    };
    Ok(Arc::new(graph))
}

/// Per-game rng: `seed + game_id` when seeded, entropy otherwise.
pub fn game_rng(seed: u64, game_id: usize) -> SmallRng {
    if seed != 0 {
        SmallRng::seed_from_u64(seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Plays a single self-play game and returns the game record.
pub fn play_game(
    config: &SelfPlayConfig,
    graph: &Arc<StationGraph>,
    registry: &AiRegistry,
    game_id: usize,
    rng: &mut SmallRng,
) -> Result<GameRecord, SelfPlayError> {
    let mut mr_x_ai = registry.create(&config.mr_x_ai, rng.gen())?;
    let mut detective_ai = registry.create(&config.detective_ai, rng.gen())?;
    let state = new_game(graph.clone(), config.detectives, config.rounds, rng)?;
    let mr_x_start = state.mr_x().location();
    let detective_starts = state.detectives().iter().map(|d| d.location()).collect();

    let timeout = Duration::from_millis(config.movetime_ms);
    let mut model = Model::new(state);
    let mut moves = Vec::new();
    mr_x_ai.on_start();
    detective_ai.on_start();

    while !model.current_board().is_game_over() {
        let board = model.current_board();
        let agent = if board.remaining().iter().any(|p| p.is_mr_x()) {
            &mut mr_x_ai
        } else {
            &mut detective_ai
        };

        let answer = agent.pick_move(board, timeout);
        let mv = match answer {
            Some(mv) if board.is_legal(&mv) => mv,
            _ => {
                return Err(SelfPlayError::ContractViolation {
                    game_id,
                    agent: agent.name().to_string(),
                    answer: answer.map_or_else(|| "none".to_string(), |m| m.to_string()),
                })
            }
        };
        debug!(game_id, %mv, "move");
        moves.push(mv.to_string());
        model.choose_move(mv)?;
    }

    mr_x_ai.on_terminate();
    detective_ai.on_terminate();

    let board = model.current_board();
    Ok(GameRecord {
        game_id,
        winner: board.winner().iter().map(|p| p.name().to_string()).collect(),
        rounds: board.travel_log().len(),
        mr_x_start,
        detective_starts,
        moves,
    })
}

/// Runs self-play generation, producing multiple game records.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_self_play(config: &SelfPlayConfig) -> Result<Vec<GameRecord>, SelfPlayError> {
    let mut games = Vec::with_capacity(config.num_games);
    run_self_play_with_callback(config, |game| {
        games.push(game);
    })?;
    games.sort_by_key(|g| g.game_id);
    Ok(games)
}

/// Runs self-play generation, calling `on_game` with each completed game
/// record. Games that fail are logged and skipped.
pub fn run_self_play_with_callback<F>(
    config: &SelfPlayConfig,
    on_game: F,
) -> Result<(), SelfPlayError>
where
    F: FnMut(GameRecord) + Send,
{
    let graph = load_board(config)?;
    let registry = AiRegistry::with_builtins();
    for name in [&config.mr_x_ai, &config.detective_ai] {
        if !registry.contains(name) {
            return Err(RegistryError::Unknown(name.clone()).into());
        }
    }

    if config.threads > 1 {
        run_self_play_parallel(config, graph, registry, on_game)
    } else {
        run_self_play_sequential(config, &graph, &registry, on_game);
        Ok(())
    }
}

fn report(
    config: &SelfPlayConfig,
    n: usize,
    result: &Result<GameRecord, SelfPlayError>,
    elapsed: f64,
) {
    match result {
        Ok(game) if !config.quiet => {
            info!(
                "Game {}/{}: {} wins after {} rounds ({:.2}s)",
                n,
                config.num_games,
                game.winner.join("+"),
                game.rounds,
                elapsed
            );
        }
        Ok(_) => {}
        Err(e) => warn!(error = %e, "game aborted"),
    }
}

/// Sequential self-play: plays games one at a time.
fn run_self_play_sequential<F>(
    config: &SelfPlayConfig,
    graph: &Arc<StationGraph>,
    registry: &AiRegistry,
    mut on_game: F,
) where
    F: FnMut(GameRecord),
{
    for i in 0..config.num_games {
        let game_start = Instant::now();
        let mut rng = game_rng(config.seed, i);
        let result = play_game(config, graph, registry, i, &mut rng);
        report(config, i + 1, &result, game_start.elapsed().as_secs_f64());
        if let Ok(game) = result {
            on_game(game);
        }
    }
}

/// Parallel self-play: plays games concurrently using rayon.
/// Uses a channel to deliver completed games to the callback from worker threads.
fn run_self_play_parallel<F>(
    config: &SelfPlayConfig,
    graph: Arc<StationGraph>,
    registry: AiRegistry,
    mut on_game: F,
) -> Result<(), SelfPlayError>
where
    F: FnMut(GameRecord) + Send,
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let (tx, rx) = mpsc::channel::<GameRecord>();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    let config_clone = config.clone();
    let handle = std::thread::spawn(move || {
        let completed = AtomicUsize::new(0);
        pool.install(|| {
            (0..config_clone.num_games)
                .into_par_iter()
                .for_each_with(tx, |tx, i| {
                    let game_start = Instant::now();
                    let mut rng = game_rng(config_clone.seed, i);
                    let result = play_game(&config_clone, &graph, &registry, i, &mut rng);
                    let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    report(&config_clone, n, &result, game_start.elapsed().as_secs_f64());
                    if let Ok(game) = result {
                        let _ = tx.send(game);
                    }
                });
        });
    });

    // Receive completed games on the calling thread and pass to callback.
    for game in rx {
        on_game(game);
    }

    if handle.join().is_err() {
        error!("selfplay worker thread panicked");
    }
    Ok(())
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Prints a summary of self-play results to stderr.
pub fn print_summary(games: &[GameRecord]) {
    let total = games.len();
    let mr_x_wins = games.iter().filter(|g| g.mr_x_won()).count();
    let total_rounds: usize = games.iter().map(|g| g.rounds).sum();
    let total_moves: usize = games.iter().map(|g| g.moves.len()).sum();

    eprintln!("=== Self-Play Summary ===");
    eprintln!("Games: {}", total);
    eprintln!(
        "Avg rounds/game: {:.1}",
        total_rounds as f64 / total.max(1) as f64
    );
    eprintln!(
        "Avg moves/game: {:.1}",
        total_moves as f64 / total.max(1) as f64
    );
    eprintln!("Win distribution:");
    for piece in ALL_PIECES {
        let wins = games
            .iter()
            .filter(|g| g.winner.iter().any(|w| w == piece.name()))
            .count();
        if wins == 0 && piece.is_detective() {
            continue;
        }
        let pct = 100.0 * wins as f64 / total.max(1) as f64;
        eprintln!("  {:>8}: {} ({:.1}%)", piece.name(), wins, pct);
    }
    eprintln!(
        "  {:>8}: {} ({:.1}%)",
        "seekers",
        total - mr_x_wins,
        100.0 * (total - mr_x_wins) as f64 / total.max(1) as f64
    );
}
