//! Opening positions for fresh games.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use super::graph::{Station, StationGraph};
use super::piece::{Piece, ALL_DETECTIVES, DETECTIVE_COUNT};
use super::player::{Player, DEFAULT_DETECTIVE_TICKETS, DEFAULT_MR_X_TICKETS};
use super::setup::{
    draw_locations, standard_schedule, GameSetup, DETECTIVE_LOCATIONS, MR_X_LOCATIONS,
};
use super::state::{GameState, SetupError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StartError {
    #[error("detective count must be between 1 and 5, got {0}")]
    DetectiveCount(usize),

    #[error("board has {stations} stations, need at least {needed}")]
    TooFewStations { stations: usize, needed: usize },

    #[error(transparent)]
    Setup(#[from] SetupError),
}

/// Draws distinct start stations for Mr X and `detectives` detectives.
///
/// Uses the standard start pools when the board holds every pool station,
/// otherwise draws from all stations.
pub fn random_start(
    graph: &StationGraph,
    detectives: usize,
    rng: &mut impl Rng,
) -> Result<(Station, Vec<Station>), StartError> {
    let standard = DETECTIVE_LOCATIONS
        .iter()
        .chain(&MR_X_LOCATIONS)
        .all(|&s| graph.contains(s));

    if standard {
        let mr_x = MR_X_LOCATIONS.choose(rng).copied();
        let dets = draw_locations(&DETECTIVE_LOCATIONS, detectives, rng);
        if let (Some(mr_x), Some(dets)) = (mr_x, dets) {
            return Ok((mr_x, dets));
        }
    }

    let nodes: Vec<Station> = graph.stations().collect();
    let mut drawn = draw_locations(&nodes, detectives + 1, rng).ok_or(StartError::TooFewStations {
        stations: nodes.len(),
        needed: detectives + 1,
    })?;
    let mr_x = drawn.remove(0);
    Ok((mr_x, drawn))
}

/// Builds an opening state with default tickets, the standard schedule cut
/// to `rounds`, and randomly drawn start stations. Detectives are taken in
/// piece order.
pub fn new_game(
    graph: Arc<StationGraph>,
    detectives: usize,
    rounds: usize,
    rng: &mut impl Rng,
) -> Result<GameState, StartError> {
    if detectives == 0 || detectives > DETECTIVE_COUNT {
        return Err(StartError::DetectiveCount(detectives));
    }
    let (mr_x_at, det_at) = random_start(&graph, detectives, rng)?;

    let mr_x = Player::new(Piece::MrX, DEFAULT_MR_X_TICKETS, mr_x_at);
    let dets = ALL_DETECTIVES
        .iter()
        .zip(det_at)
        .map(|(&d, at)| Player::new(Piece::Detective(d), DEFAULT_DETECTIVE_TICKETS, at))
        .collect();

    let setup = GameSetup::new(graph, standard_schedule(rounds));
    Ok(GameState::new(setup, mr_x, dets)?)
}
