//! Legal move generation.
//!
//! Generates the legal moves for whichever pieces are still to act in the
//! current rotation: Mr X alone, or some subset of the detectives.

pub mod double;
pub mod single;

pub use double::double_moves;
pub use single::single_moves;

use std::collections::BTreeSet;

use rand::Rng;

use crate::board::{GameSetup, Move, Piece, Player, Station};

/// Stations held by detectives. Nobody may move onto these.
pub fn occupied_stations(detectives: &[Player]) -> Vec<Station> {
    detectives.iter().map(Player::location).collect()
}

/// Every legal move for Mr X with `log_len` rounds already logged.
///
/// Mr X has no moves once the travel log is full.
pub fn mr_x_moves(
    setup: &GameSetup,
    mr_x: &Player,
    detectives: &[Player],
    log_len: usize,
) -> Vec<Move> {
    if log_len >= setup.rounds() {
        return Vec::new();
    }
    let occupied = occupied_stations(detectives);
    let source = mr_x.location();

    let singles = single_moves(&setup.graph, &occupied, mr_x, source);
    let doubles = double_moves(&setup.graph, &occupied, mr_x, source, log_len, setup.rounds());

    singles
        .into_iter()
        .map(Move::Single)
        .chain(doubles.into_iter().map(Move::Double))
        .collect()
}

/// Every legal move for one detective. Other detectives block entry.
pub fn detective_moves(setup: &GameSetup, detective: &Player, detectives: &[Player]) -> Vec<Move> {
    let occupied = occupied_stations(detectives);
    single_moves(&setup.graph, &occupied, detective, detective.location())
        .into_iter()
        .map(Move::Single)
        .collect()
}

/// Every legal move for the detectives among `pieces`.
pub fn detectives_moves(
    setup: &GameSetup,
    detectives: &[Player],
    pieces: &BTreeSet<Piece>,
) -> Vec<Move> {
    detectives
        .iter()
        .filter(|d| pieces.contains(&d.piece()))
        .flat_map(|d| detective_moves(setup, d, detectives))
        .collect()
}

/// The full legal move set for the pieces in `remaining`, sorted and
/// deduplicated.
pub fn legal_moves(
    setup: &GameSetup,
    mr_x: &Player,
    detectives: &[Player],
    remaining: &BTreeSet<Piece>,
    log_len: usize,
) -> Vec<Move> {
    let mut moves = if remaining.contains(&Piece::MrX) {
        mr_x_moves(setup, mr_x, detectives, log_len)
    } else {
        detectives_moves(setup, detectives, remaining)
    };
    moves.sort_unstable();
    moves.dedup();
    moves
}

/// Picks a uniformly random move, or `None` if there are none.
pub fn random_move(moves: &[Move], rng: &mut impl Rng) -> Option<Move> {
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.gen_range(0..moves.len())])
}
