//! Single-leg move generation.

use crate::board::{Player, SingleMove, Station, StationGraph, Ticket};

/// Generates every legal single-leg move for `player` from `source`.
///
/// A move exists for each neighbouring mode whose ticket the player holds,
/// plus a secret move to every neighbour when the player holds a secret
/// ticket. Stations in `occupied` are never entered. The result is sorted
/// and free of duplicates (a ferry edge and a secret ticket yield the same
/// move).
///
/// # Panics
///
/// Panics if `source` is not a station of `graph`; setup validation keeps
/// every player on the board.
pub fn single_moves(
    graph: &StationGraph,
    occupied: &[Station],
    player: &Player,
    source: Station,
) -> Vec<SingleMove> {
    assert!(
        graph.contains(source),
        "move generation from unknown station {}",
        source
    );

    let piece = player.piece();
    let secret = player.has(Ticket::Secret);
    let mut moves = Vec::new();

    for (dest, modes) in graph.adjacent(source) {
        if occupied.contains(&dest) {
            continue;
        }
        for mode in modes.iter() {
            let ticket = mode.required_ticket();
            if player.has(ticket) {
                moves.push(SingleMove::new(piece, source, ticket, dest));
            }
        }
        if secret {
            moves.push(SingleMove::new(piece, source, Ticket::Secret, dest));
        }
    }

    moves.sort_unstable();
    moves.dedup();
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Detective, Piece, StationGraphBuilder, TicketBoard, Transport};

    fn graph() -> StationGraph {
        let mut b = StationGraphBuilder::new();
        for s in 1..=5 {
            b.add_station(s);
        }
        b.add_edge(1, 2, Transport::Taxi);
        b.add_edge(1, 2, Transport::Bus);
        b.add_edge(1, 3, Transport::Underground);
        b.add_edge(1, 4, Transport::Ferry);
        b.add_edge(4, 5, Transport::Taxi);
        b.build()
    }

    #[test]
    fn one_move_per_affordable_mode() {
        let p = Player::new(Piece::MrX, TicketBoard::new(1, 1, 0, 0, 0), 1);
        let moves = single_moves(&graph(), &[], &p, 1);
        assert_eq!(
            moves,
            vec![
                SingleMove::new(Piece::MrX, 1, Ticket::Taxi, 2),
                SingleMove::new(Piece::MrX, 1, Ticket::Bus, 2),
            ]
        );
    }

    #[test]
    fn secret_reaches_every_neighbour_once() {
        let p = Player::new(Piece::MrX, TicketBoard::new(0, 0, 0, 0, 1), 1);
        let moves = single_moves(&graph(), &[], &p, 1);
        let dests: Vec<Station> = moves.iter().map(|m| m.destination).collect();
        assert_eq!(dests, vec![2, 3, 4]);
        assert!(moves.iter().all(|m| m.ticket == Ticket::Secret));
    }

    #[test]
    fn occupied_stations_are_skipped() {
        let p = Player::new(Piece::MrX, TicketBoard::new(5, 5, 5, 0, 5), 1);
        let moves = single_moves(&graph(), &[2, 3], &p, 1);
        assert!(moves.iter().all(|m| m.destination == 4));
    }

    #[test]
    fn detective_without_tickets_has_no_moves() {
        let p = Player::new(Piece::Detective(Detective::Red), TicketBoard::default(), 1);
        assert!(single_moves(&graph(), &[], &p, 1).is_empty());
    }

    #[test]
    #[should_panic(expected = "unknown station")]
    fn unknown_source_panics() {
        let p = Player::new(Piece::MrX, TicketBoard::new(1, 0, 0, 0, 0), 99);
        single_moves(&graph(), &[], &p, 99);
    }
}
