//! State transition.
//!
//! `advance` validates a move against the cached legal set, then rebuilds
//! the changed players, log, and rotation and hands them to
//! `GameState::from_parts`, which derives moves and winners from scratch.

use std::collections::BTreeSet;

use tracing::debug;

use crate::board::{GameState, LogEntry, Move, Piece, Player, SingleMove, TicketError};
use crate::movegen::detectives_moves;

/// Errors returned by [`advance`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdvanceError {
    #[error("illegal move: {0}")]
    Illegal(Move),

    /// A legal move could not be paid for. Move generation never offers
    /// unaffordable moves, so this signals a broken invariant.
    #[error("ticket accounting failed: {0}")]
    Ticket(#[from] TicketError),
}

/// Applies `mv` to `state` and returns the next snapshot.
pub fn advance(state: &GameState, mv: Move) -> Result<GameState, AdvanceError> {
    if !state.is_legal(&mv) {
        return Err(AdvanceError::Illegal(mv));
    }
    debug!(%mv, round = state.travel_log().len(), "applying move");

    match mv.commenced_by() {
        Piece::MrX => advance_mr_x(state, mv),
        Piece::Detective(_) => match mv {
            Move::Single(m) => advance_detective(state, m),
            Move::Double(_) => Err(AdvanceError::Illegal(mv)),
        },
    }
}

/// Mr X moved: log each leg, pay, relocate, and hand the turn to every
/// detective.
fn advance_mr_x(state: &GameState, mv: Move) -> Result<GameState, AdvanceError> {
    let setup = state.setup();
    let legs: Vec<SingleMove> = match mv {
        Move::Single(m) => vec![m],
        Move::Double(m) => m.legs().to_vec(),
    };

    let mut log = state.travel_log().to_vec();
    for leg in &legs {
        let entry = if setup.is_reveal(log.len()) {
            LogEntry::reveal(leg.ticket, leg.destination)
        } else {
            LogEntry::hidden(leg.ticket)
        };
        log.push(entry);
    }

    let mr_x = state.mr_x().use_all(mv.tickets())?.at(mv.destination());
    let remaining: BTreeSet<Piece> = state.detectives().iter().map(Player::piece).collect();

    Ok(GameState::from_parts(
        setup.clone(),
        mr_x,
        state.detectives().to_vec(),
        log,
        remaining,
    ))
}

/// A detective moved: pay, relocate, pass the ticket to Mr X, and strike the
/// detective off the rotation. The rotation returns to Mr X once no
/// remaining detective can move, or once the travel log is full.
fn advance_detective(state: &GameState, mv: SingleMove) -> Result<GameState, AdvanceError> {
    let setup = state.setup();
    let mut detectives = state.detectives().to_vec();
    let Some(slot) = detectives.iter_mut().find(|d| d.piece() == mv.piece) else {
        return Err(AdvanceError::Illegal(Move::Single(mv)));
    };
    *slot = slot.use_ticket(mv.ticket)?.at(mv.destination);

    let mr_x = state.mr_x().give(mv.ticket);

    let mut remaining = state.remaining().clone();
    remaining.remove(&mv.piece);
    let log_full = state.travel_log().len() >= setup.rounds();
    if log_full || detectives_moves(setup, &detectives, &remaining).is_empty() {
        debug!(remaining = remaining.len(), "rotation returns to mr x");
        remaining = BTreeSet::from([Piece::MrX]);
    }

    Ok(GameState::from_parts(
        setup.clone(),
        mr_x,
        detectives,
        state.travel_log().to_vec(),
        remaining,
    ))
}
