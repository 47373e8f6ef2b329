//! Win detection.

use std::collections::BTreeSet;

use crate::board::{GameSetup, Move, Piece, Player};

/// Decides the winners of a position.
///
/// `moves` is the legal move set for `remaining` before any winner is
/// applied. Rules, first match wins:
///
/// 1. A detective stands on Mr X's station: the detectives win.
/// 2. Mr X is to act and the travel log is full: Mr X wins.
/// 3. Mr X is to act and cannot move: the detectives win.
/// 4. Detectives are to act and none of them can move: Mr X wins.
///
/// Otherwise the game is still running and the result is empty.
pub fn evaluate_winner(
    setup: &GameSetup,
    mr_x: &Player,
    detectives: &[Player],
    remaining: &BTreeSet<Piece>,
    log_len: usize,
    moves: &[Move],
) -> BTreeSet<Piece> {
    let detective_pieces = || detectives.iter().map(Player::piece).collect::<BTreeSet<_>>();

    if detectives.iter().any(|d| d.location() == mr_x.location()) {
        return detective_pieces();
    }

    if remaining.contains(&Piece::MrX) {
        if log_len >= setup.rounds() {
            return BTreeSet::from([Piece::MrX]);
        }
        if moves.is_empty() {
            return detective_pieces();
        }
    } else if moves.is_empty() {
        return BTreeSet::from([Piece::MrX]);
    }

    BTreeSet::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Detective, SingleMove, StationGraphBuilder, Ticket, TicketBoard, Transport};

    fn setup(rounds: usize) -> GameSetup {
        let mut b = StationGraphBuilder::new();
        b.add_station(1);
        b.add_station(2);
        b.add_edge(1, 2, Transport::Taxi);
        GameSetup::new(b.build(), vec![false; rounds])
    }

    fn mr_x(at: u32) -> Player {
        Player::new(Piece::MrX, TicketBoard::new(1, 0, 0, 0, 0), at)
    }

    fn red(at: u32) -> Player {
        Player::new(Piece::Detective(Detective::Red), TicketBoard::new(1, 0, 0, 0, 0), at)
    }

    fn some_move() -> Vec<Move> {
        vec![Move::Single(SingleMove::new(Piece::MrX, 1, Ticket::Taxi, 2))]
    }

    fn mr_x_only() -> BTreeSet<Piece> {
        BTreeSet::from([Piece::MrX])
    }

    #[test]
    fn capture_beats_everything() {
        let w = evaluate_winner(&setup(1), &mr_x(1), &[red(1)], &mr_x_only(), 1, &some_move());
        assert_eq!(w, BTreeSet::from([Piece::Detective(Detective::Red)]));
    }

    #[test]
    fn full_log_on_mr_x_turn() {
        let w = evaluate_winner(&setup(2), &mr_x(1), &[red(2)], &mr_x_only(), 2, &[]);
        assert_eq!(w, mr_x_only());
    }

    #[test]
    fn stuck_mr_x() {
        let w = evaluate_winner(&setup(2), &mr_x(1), &[red(2)], &mr_x_only(), 0, &[]);
        assert_eq!(w, BTreeSet::from([Piece::Detective(Detective::Red)]));
    }

    #[test]
    fn stuck_detectives() {
        let remaining = BTreeSet::from([Piece::Detective(Detective::Red)]);
        let w = evaluate_winner(&setup(2), &mr_x(1), &[red(2)], &remaining, 1, &[]);
        assert_eq!(w, mr_x_only());
    }

    #[test]
    fn running_game_has_no_winner() {
        let w = evaluate_winner(&setup(2), &mr_x(1), &[red(2)], &mr_x_only(), 0, &some_move());
        assert!(w.is_empty());
    }
}
