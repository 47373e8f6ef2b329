//! Engine state management.
//!
//! Holds the current board, the running game model, engine options, and the
//! configured agent, and answers the command-loop commands. Responses go to
//! the supplied writer; failures are returned to the caller for logging.

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::ai::{Ai, AiRegistry, RegistryError};
use crate::board::{
    new_game, GameState, Move, Piece, StartError, StationGraph, DETECTIVE_COUNT, STANDARD_ROUNDS,
};
use crate::model::{Event, Model, ModelError, Observer};
use crate::protocol::{load_graph, parse_graph, parse_move, GraphError, NotationError};
use crate::resolve::AdvanceError;

/// Board used until `loadboard` is given.
const DEMO_BOARD: &str = include_str!("../data/demo.txt");

const DEFAULT_MOVETIME_MS: u64 = 1000;
const DEFAULT_AI: &str = "greedy";

/// Failures of a single command. None of them end the session except `Io`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("no game in progress")]
    NoGame,

    #[error("no board loaded")]
    NoBoard,

    #[error("invalid value '{value}' for option {name}")]
    BadOption { name: &'static str, value: String },

    #[error("agent returned no move")]
    NoMove,

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Start(#[from] StartError),

    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Advance(#[from] AdvanceError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Observer that queues events for the command loop to print.
#[derive(Default)]
struct EventQueue {
    events: Mutex<Vec<Event>>,
}

impl Observer for EventQueue {
    fn on_model_changed(&self, _board: &GameState, event: Event) {
        if let Ok(mut q) = self.events.lock() {
            q.push(event);
        }
    }
}

impl EventQueue {
    fn drain(&self) -> Vec<Event> {
        self.events
            .lock()
            .map(|mut q| std::mem::take(&mut *q))
            .unwrap_or_default()
    }
}

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub graph: Option<Arc<StationGraph>>,
    pub model: Option<Model>,
    pub options: HashMap<String, String>,
    registry: AiRegistry,
    agent: Option<Box<dyn Ai>>,
    events: Arc<EventQueue>,
    rng: SmallRng,
}

impl Engine {
    /// Creates an engine on the bundled demo board with no game running.
    pub fn new() -> Self {
        let graph = match parse_graph(DEMO_BOARD) {
            Ok(g) => Some(Arc::new(g)),
            Err(e) => {
                warn!(error = %e, "bundled board failed to load");
                None
            }
        };
        Engine {
            graph,
            model: None,
            options: HashMap::new(),
            registry: AiRegistry::with_builtins(),
            agent: None,
            events: Arc::new(EventQueue::default()),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Sets an engine option.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        self.options.insert(name, value.unwrap_or_default());
    }

    fn option_u64(&self, name: &'static str, default: u64) -> Result<u64, EngineError> {
        match self.options.get(name) {
            None => Ok(default),
            Some(v) => v.parse().map_err(|_| EngineError::BadOption {
                name,
                value: v.clone(),
            }),
        }
    }

    fn movetime(&self) -> Result<Duration, EngineError> {
        Ok(Duration::from_millis(self.option_u64("MoveTime", DEFAULT_MOVETIME_MS)?))
    }

    /// Replaces the board. Any running game is dropped.
    pub fn load_board(&mut self, path: &str) -> Result<(), EngineError> {
        let graph = load_graph(path)?;
        info!(path, stations = graph.node_count(), edges = graph.edge_count(), "board loaded");
        self.graph = Some(Arc::new(graph));
        self.model = None;
        self.agent = None;
        Ok(())
    }

    /// Starts a new game on the current board using the configured options.
    pub fn new_game(&mut self) -> Result<(), EngineError> {
        let graph = self.graph.clone().ok_or(EngineError::NoBoard)?;
        let detectives = self.option_u64("Detectives", DETECTIVE_COUNT as u64)? as usize;
        let rounds = self.option_u64("Rounds", STANDARD_ROUNDS as u64)? as usize;
        let seed = self.option_u64("Seed", 0)?;
        let ai = self
            .options
            .get("Ai")
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_AI)
            .to_string();

        if seed != 0 {
            self.rng = SmallRng::seed_from_u64(seed);
        }
        let mut agent = self.registry.create(&ai, self.rng.gen())?;
        let state = new_game(graph, detectives, rounds, &mut self.rng)?;

        let mut model = Model::new(state);
        model.register_observer(self.events.clone())?;
        agent.on_start();
        self.events.drain();

        info!(agent = agent.name(), detectives, rounds, "new game");
        self.model = Some(model);
        self.agent = Some(agent);
        Ok(())
    }

    fn board(&self) -> Result<&GameState, EngineError> {
        self.model
            .as_ref()
            .map(Model::current_board)
            .ok_or(EngineError::NoGame)
    }

    /// Handles the handshake: writes id, options, and `manhuntok`.
    pub fn handle_manhunt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name manhunt")?;
        writeln!(out, "id author manhunt")?;
        writeln!(out, "option name Seed type spin default 0")?;
        writeln!(
            out,
            "option name Detectives type spin default {} min 1 max {}",
            DETECTIVE_COUNT, DETECTIVE_COUNT
        )?;
        writeln!(
            out,
            "option name Rounds type spin default {} min 1 max {}",
            STANDARD_ROUNDS, STANDARD_ROUNDS
        )?;
        writeln!(
            out,
            "option name MoveTime type spin default {} min 1 max 60000",
            DEFAULT_MOVETIME_MS
        )?;
        let names: Vec<&str> = self.registry.names().collect();
        writeln!(
            out,
            "option name Ai type combo default {} var {}",
            DEFAULT_AI,
            names.join(" var ")
        )?;
        writeln!(out, "manhuntok")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Lists the legal moves, one per line, then `end`.
    pub fn handle_moves<W: Write>(&self, out: &mut W) -> Result<(), EngineError> {
        for mv in self.board()?.available_moves() {
            writeln!(out, "{}", mv)?;
        }
        writeln!(out, "end")?;
        out.flush()?;
        Ok(())
    }

    /// Applies a move given in notation.
    pub fn handle_play<W: Write>(
        &mut self,
        notation: &str,
        out: &mut W,
    ) -> Result<(), EngineError> {
        let mv = parse_move(notation)?;
        self.apply(mv, out)
    }

    /// Asks the agent for a move, reports it, and applies it.
    pub fn handle_go<W: Write>(&mut self, out: &mut W) -> Result<(), EngineError> {
        let timeout = self.movetime()?;
        let board = self.board()?.clone();
        let agent = self.agent.as_mut().ok_or(EngineError::NoGame)?;
        let mv = agent.pick_move(&board, timeout).ok_or(EngineError::NoMove)?;
        debug!(agent = agent.name(), %mv, "agent picked");
        if !board.is_legal(&mv) {
            return Err(AdvanceError::Illegal(mv).into());
        }
        writeln!(out, "bestmove {}", mv)?;
        self.apply(mv, out)
    }

    fn apply<W: Write>(&mut self, mv: Move, out: &mut W) -> Result<(), EngineError> {
        let model = self.model.as_mut().ok_or(EngineError::NoGame)?;
        model.choose_move(mv)?;
        for event in self.events.drain() {
            writeln!(out, "event {}", event)?;
        }
        if model.current_board().is_game_over() {
            if let Some(agent) = self.agent.as_mut() {
                agent.on_terminate();
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Writes `turn <pieces>` while running, `winner <pieces>` once decided.
    pub fn handle_status<W: Write>(&self, out: &mut W) -> Result<(), EngineError> {
        let board = self.board()?;
        let (label, pieces) = if board.is_game_over() {
            ("winner", board.winner())
        } else {
            ("turn", board.remaining())
        };
        let names: Vec<&str> = pieces.iter().copied().map(Piece::name).collect();
        writeln!(out, "{} {}", label, names.join(" "))?;
        out.flush()?;
        Ok(())
    }

    /// Writes Mr X's travel log, one entry per line, then `end`.
    pub fn handle_log<W: Write>(&self, out: &mut W) -> Result<(), EngineError> {
        for (i, entry) in self.board()?.travel_log().iter().enumerate() {
            match entry.location() {
                Some(station) => writeln!(out, "{} {} {}", i + 1, entry.ticket().name(), station)?,
                None => writeln!(out, "{} {} hidden", i + 1, entry.ticket().name())?,
            }
        }
        writeln!(out, "end")?;
        out.flush()?;
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
