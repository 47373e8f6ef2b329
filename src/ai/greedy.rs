//! Distance-greedy agent.
//!
//! Scores each legal move by graph hop distance. Mr X maximises the distance
//! from his destination to the nearest detective. Detectives minimise the
//! distance to Mr X's last revealed station, and move at random until one
//! has been revealed. Ties are broken at random.

use std::collections::HashMap;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::Ai;
use crate::board::{GameState, Move, Station};
use crate::movegen::random_move;

pub struct GreedyAi {
    rng: SmallRng,
}

impl GreedyAi {
    pub fn new(seed: u64) -> Self {
        GreedyAi {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn boxed(seed: u64) -> Box<dyn Ai> {
        Box::new(Self::new(seed))
    }

    fn pick_best(&mut self, moves: &[Move], score: impl Fn(&Move) -> i64) -> Option<Move> {
        let best = moves.iter().map(&score).max()?;
        let ties: Vec<Move> = moves.iter().copied().filter(|m| score(m) == best).collect();
        random_move(&ties, &mut self.rng)
    }
}

impl Ai for GreedyAi {
    fn name(&self) -> &str {
        "greedy"
    }

    fn pick_move(&mut self, board: &GameState, _timeout: Duration) -> Option<Move> {
        let moves = board.available_moves();
        let graph = &board.setup().graph;

        if board.remaining().iter().any(|p| p.is_mr_x()) {
            let fields: Vec<HashMap<Station, u32>> = board
                .detectives()
                .iter()
                .map(|d| graph.distances_from(d.location()))
                .collect();
            return self.pick_best(moves, |m| {
                let nearest = fields
                    .iter()
                    .map(|f| hops(f, m.destination()))
                    .min()
                    .unwrap_or(i64::MAX);
                // Prefer keeping double tickets when the distance is equal.
                let single_bonus = i64::from(matches!(m, Move::Single(_)));
                nearest.saturating_mul(2).saturating_add(single_bonus)
            });
        }

        let Some(target) = last_revealed(board) else {
            return random_move(moves, &mut self.rng);
        };
        let field = graph.distances_from(target);
        self.pick_best(moves, |m| -hops(&field, m.destination()))
    }
}

/// Most recent revealed station in the travel log.
fn last_revealed(board: &GameState) -> Option<Station> {
    board.travel_log().iter().rev().find_map(|e| e.location())
}

fn hops(field: &HashMap<Station, u32>, station: Station) -> i64 {
    field.get(&station).map_or(i64::from(u32::MAX), |&d| i64::from(d))
}
