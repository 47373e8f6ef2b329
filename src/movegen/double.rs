//! Double-leg move generation for Mr X.

use crate::board::{DoubleMove, Player, Station, StationGraph, Ticket};

use super::single::single_moves;

/// Generates every legal double move for `player` from `source`.
///
/// Requires a double ticket and room for two more entries in a travel log
/// currently `log_len` long out of `rounds`. The second leg is generated
/// after spending the first leg's ticket, against the same `occupied` set:
/// detectives do not move during Mr X's turn.
pub fn double_moves(
    graph: &StationGraph,
    occupied: &[Station],
    player: &Player,
    source: Station,
    log_len: usize,
    rounds: usize,
) -> Vec<DoubleMove> {
    if !player.has(Ticket::Double) || log_len + 2 > rounds {
        return Vec::new();
    }

    let mut moves = Vec::new();
    for first in single_moves(graph, occupied, player, source) {
        let Ok(spent) = player.use_ticket(first.ticket) else {
            continue;
        };
        for second in single_moves(graph, occupied, &spent, first.destination) {
            moves.push(DoubleMove::from_legs(first, second));
        }
    }
    moves
}
