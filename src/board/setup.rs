//! Game setup: the board graph plus Mr X's reveal schedule.
//!
//! Also holds the standard-game constants: reveal rounds and the start
//! station pools of the standard board.

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::graph::{Station, StationGraph};

/// Rounds (1-based) on which Mr X surfaces in a standard game.
pub const REVEAL_ROUNDS: [usize; 5] = [3, 8, 13, 18, 24];

/// Length of a standard game.
pub const STANDARD_ROUNDS: usize = 24;

/// Start stations for detectives on the standard board.
pub const DETECTIVE_LOCATIONS: [Station; 14] =
    [26, 29, 50, 53, 91, 94, 103, 112, 117, 123, 138, 141, 155, 174];

/// Start stations for Mr X on the standard board.
pub const MR_X_LOCATIONS: [Station; 12] = [35, 45, 51, 71, 78, 104, 106, 127, 132, 166, 170, 172];

/// Returns the standard reveal schedule truncated to `rounds` entries.
pub fn standard_schedule(rounds: usize) -> Vec<bool> {
    (1..=rounds.min(STANDARD_ROUNDS))
        .map(|r| REVEAL_ROUNDS.contains(&r))
        .collect()
}

/// Draws `n` mutually distinct start stations from `pool`.
///
/// Returns `None` if the pool is too small.
pub fn draw_locations(pool: &[Station], n: usize, rng: &mut impl Rng) -> Option<Vec<Station>> {
    if n > pool.len() {
        return None;
    }
    Some(pool.choose_multiple(rng, n).copied().collect())
}

/// Seeded draw of distinct detective start stations from the standard pool.
pub fn generate_detective_locations(seed: u64, n: usize) -> Option<Vec<Station>> {
    draw_locations(&DETECTIVE_LOCATIONS, n, &mut SmallRng::seed_from_u64(seed))
}

/// Seeded draw of a Mr X start station from the standard pool.
pub fn generate_mr_x_location(seed: u64) -> Station {
    let mut rng = SmallRng::seed_from_u64(seed);
    MR_X_LOCATIONS[rng.gen_range(0..MR_X_LOCATIONS.len())]
}

/// The immutable rules of one game.
///
/// The graph sits behind an `Arc` so every snapshot of a game shares it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSetup {
    pub graph: Arc<StationGraph>,
    /// One flag per Mr X turn: `true` reveals his station in the log.
    pub moves: Arc<[bool]>,
}

impl GameSetup {
    pub fn new(graph: impl Into<Arc<StationGraph>>, moves: impl Into<Arc<[bool]>>) -> Self {
        GameSetup {
            graph: graph.into(),
            moves: moves.into(),
        }
    }

    /// Number of Mr X turns in the game.
    pub fn rounds(&self) -> usize {
        self.moves.len()
    }

    /// Whether the Mr X turn at log index `round` is a reveal round.
    pub fn is_reveal(&self, round: usize) -> bool {
        self.moves.get(round).copied().unwrap_or(false)
    }
}
