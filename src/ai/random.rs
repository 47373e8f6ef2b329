//! Uniform random agent.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::Ai;
use crate::board::{GameState, Move};
use crate::movegen::random_move;

/// Picks uniformly among the legal moves.
pub struct RandomAi {
    rng: SmallRng,
}

impl RandomAi {
    pub fn new(seed: u64) -> Self {
        RandomAi {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn boxed(seed: u64) -> Box<dyn Ai> {
        Box::new(Self::new(seed))
    }
}

impl Ai for RandomAi {
    fn name(&self) -> &str {
        "random"
    }

    fn pick_move(&mut self, board: &GameState, _timeout: Duration) -> Option<Move> {
        random_move(board.available_moves(), &mut self.rng)
    }
}
