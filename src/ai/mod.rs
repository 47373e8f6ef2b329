//! Decision-making agents.
//!
//! An agent is handed a read-only snapshot and a time budget and returns one
//! of the snapshot's legal moves. The engine does not enforce the budget or
//! validate the answer; callers do.

pub mod greedy;
pub mod random;
pub mod registry;

pub use greedy::GreedyAi;
pub use random::RandomAi;
pub use registry::{AiFactory, AiRegistry, RegistryError};

use std::time::Duration;

use crate::board::{GameState, Move};

/// A move-picking agent.
pub trait Ai: Send {
    fn name(&self) -> &str;

    /// Called once before the first move of a game.
    fn on_start(&mut self) {}

    /// Picks a move for whichever pieces are to act in `board`.
    ///
    /// Must return a member of `board.available_moves()`. `None` is only
    /// valid when that set is empty.
    fn pick_move(&mut self, board: &GameState, timeout: Duration) -> Option<Move>;

    /// Called once after the game ends.
    fn on_terminate(&mut self) {}
}
