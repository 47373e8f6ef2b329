//! Game state snapshots.
//!
//! A `GameState` is an immutable point-in-time view of a game: setup, Mr X,
//! the detectives, the travel log, the pieces still to act this rotation,
//! and the derived legal moves and winners. The derived fields are computed
//! once, by the same code path for the initial state and for every state
//! produced by [`GameState::advance`].

use std::collections::BTreeSet;

use super::graph::Station;
use super::log::LogEntry;
use super::moves::Move;
use super::piece::{Detective, Piece};
use super::player::{Player, TicketBoard};
use super::setup::GameSetup;
use super::ticket::{Ticket, ALL_TICKETS};
use crate::movegen::legal_moves;
use crate::resolve::{advance, evaluate_winner, AdvanceError};

/// Reasons a game cannot be set up. Checked in declaration order; the first
/// violation is reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("Mr X player holds the {0} piece")]
    NotMrX(Piece),

    #[error("detective list holds the {0} piece")]
    NotDetective(Piece),

    #[error("no detectives supplied")]
    NoDetectives,

    #[error("detective {piece} holds a {} ticket", .ticket.name())]
    ReservedTicket { piece: Piece, ticket: Ticket },

    #[error("detective {0} appears more than once")]
    DuplicateDetective(Piece),

    #[error("two detectives start at station {0}")]
    DuplicateLocation(Station),

    #[error("board graph has no stations")]
    EmptyGraph,

    #[error("reveal schedule is empty")]
    EmptySchedule,

    #[error("{piece} stands at station {station}, which is not on the board")]
    UnknownStation { piece: Piece, station: Station },
}

/// An immutable game snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    setup: GameSetup,
    mr_x: Player,
    detectives: Vec<Player>,
    log: Vec<LogEntry>,
    remaining: BTreeSet<Piece>,
    moves: Vec<Move>,
    winner: BTreeSet<Piece>,
}

impl GameState {
    /// Validates the players and setup and returns the opening state, with
    /// Mr X to move.
    pub fn new(
        setup: GameSetup,
        mr_x: Player,
        detectives: Vec<Player>,
    ) -> Result<Self, SetupError> {
        validate(&setup, &mr_x, &detectives)?;
        Ok(Self::from_parts(
            setup,
            mr_x,
            detectives,
            Vec::new(),
            BTreeSet::from([Piece::MrX]),
        ))
    }

    /// Builds a snapshot and derives its legal moves and winners.
    ///
    /// Winners and moves are mutually exclusive: a decided game offers no
    /// moves.
    pub(crate) fn from_parts(
        setup: GameSetup,
        mr_x: Player,
        detectives: Vec<Player>,
        log: Vec<LogEntry>,
        remaining: BTreeSet<Piece>,
    ) -> Self {
        let candidates = legal_moves(&setup, &mr_x, &detectives, &remaining, log.len());
        let winner =
            evaluate_winner(&setup, &mr_x, &detectives, &remaining, log.len(), &candidates);
        let moves = if winner.is_empty() { candidates } else { Vec::new() };
        GameState {
            setup,
            mr_x,
            detectives,
            log,
            remaining,
            moves,
            winner,
        }
    }

    /// Applies a move from [`available_moves`](Self::available_moves) and
    /// returns the resulting state. `self` is left untouched.
    pub fn advance(&self, mv: Move) -> Result<GameState, AdvanceError> {
        advance(self, mv)
    }

    pub fn setup(&self) -> &GameSetup {
        &self.setup
    }

    /// Every piece in the game, in piece order.
    pub fn players(&self) -> BTreeSet<Piece> {
        std::iter::once(self.mr_x.piece())
            .chain(self.detectives.iter().map(Player::piece))
            .collect()
    }

    pub fn mr_x(&self) -> &Player {
        &self.mr_x
    }

    /// Detectives in the order they were supplied.
    pub fn detectives(&self) -> &[Player] {
        &self.detectives
    }

    /// Returns the player holding `piece`, if it is in the game.
    pub fn player(&self, piece: Piece) -> Option<&Player> {
        if piece.is_mr_x() {
            return Some(&self.mr_x);
        }
        self.detectives.iter().find(|d| d.piece() == piece)
    }

    /// Station of `detective`; `None` if it is not in the game.
    pub fn detective_location(&self, detective: Detective) -> Option<Station> {
        self.player(Piece::Detective(detective)).map(Player::location)
    }

    /// Ticket board of `piece`; `None` if it is not in the game.
    pub fn player_tickets(&self, piece: Piece) -> Option<&TicketBoard> {
        self.player(piece).map(Player::tickets)
    }

    pub fn travel_log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Pieces still owed a move this rotation.
    pub fn remaining(&self) -> &BTreeSet<Piece> {
        &self.remaining
    }

    /// Winning pieces; empty while the game is running.
    pub fn winner(&self) -> &BTreeSet<Piece> {
        &self.winner
    }

    /// Legal moves, sorted; empty once the game is decided.
    pub fn available_moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn is_legal(&self, mv: &Move) -> bool {
        self.moves.binary_search(mv).is_ok()
    }

    pub fn is_game_over(&self) -> bool {
        !self.winner.is_empty()
    }
}

fn validate(setup: &GameSetup, mr_x: &Player, detectives: &[Player]) -> Result<(), SetupError> {
    if !mr_x.is_mr_x() {
        return Err(SetupError::NotMrX(mr_x.piece()));
    }
    if let Some(d) = detectives.iter().find(|d| !d.is_detective()) {
        return Err(SetupError::NotDetective(d.piece()));
    }
    if detectives.is_empty() {
        return Err(SetupError::NoDetectives);
    }

    for d in detectives {
        if let Some(ticket) = ALL_TICKETS
            .into_iter()
            .find(|t| t.is_reserved() && d.has(*t))
        {
            return Err(SetupError::ReservedTicket {
                piece: d.piece(),
                ticket,
            });
        }
    }

    let mut pieces = BTreeSet::new();
    for d in detectives {
        if !pieces.insert(d.piece()) {
            return Err(SetupError::DuplicateDetective(d.piece()));
        }
    }

    let mut stations = BTreeSet::new();
    for d in detectives {
        if !stations.insert(d.location()) {
            return Err(SetupError::DuplicateLocation(d.location()));
        }
    }

    if setup.graph.is_empty() {
        return Err(SetupError::EmptyGraph);
    }
    if setup.moves.is_empty() {
        return Err(SetupError::EmptySchedule);
    }

    for p in std::iter::once(mr_x).chain(detectives) {
        if !setup.graph.contains(p.location()) {
            return Err(SetupError::UnknownStation {
                piece: p.piece(),
                station: p.location(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::graph::{StationGraph, StationGraphBuilder};
    use crate::board::player::{DEFAULT_DETECTIVE_TICKETS, DEFAULT_MR_X_TICKETS};
    use crate::board::ticket::Transport;

    fn graph() -> StationGraph {
        let mut b = StationGraphBuilder::new();
        for s in 1..=6 {
            b.add_station(s);
        }
        for (a, c) in [(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 1)] {
            b.add_edge(a, c, Transport::Taxi);
        }
        b.build()
    }

    fn setup() -> GameSetup {
        GameSetup::new(graph(), vec![false, false, true, false])
    }

    fn mr_x(at: Station) -> Player {
        Player::new(Piece::MrX, DEFAULT_MR_X_TICKETS, at)
    }

    fn det(d: Detective, at: Station) -> Player {
        Player::new(Piece::Detective(d), DEFAULT_DETECTIVE_TICKETS, at)
    }

    #[test]
    fn opening_state_has_mr_x_to_move() {
        let state = GameState::new(setup(), mr_x(1), vec![det(Detective::Red, 4)]).unwrap();
        assert_eq!(state.remaining(), &BTreeSet::from([Piece::MrX]));
        assert!(state.winner().is_empty());
        assert!(!state.available_moves().is_empty());
        assert!(state.available_moves().iter().all(|m| m.commenced_by() == Piece::MrX));
        assert!(state.travel_log().is_empty());
    }

    #[test]
    fn accessors_report_players() {
        let state = GameState::new(
            setup(),
            mr_x(1),
            vec![det(Detective::Red, 4), det(Detective::Blue, 3)],
        )
        .unwrap();
        assert_eq!(
            state.players(),
            BTreeSet::from([
                Piece::MrX,
                Piece::Detective(Detective::Red),
                Piece::Detective(Detective::Blue)
            ])
        );
        assert_eq!(state.detective_location(Detective::Blue), Some(3));
        assert_eq!(state.detective_location(Detective::Green), None);
        assert_eq!(
            state.player_tickets(Piece::MrX).map(|t| t.count(Ticket::Secret)),
            Some(5)
        );
        assert!(state.player_tickets(Piece::Detective(Detective::Yellow)).is_none());
    }

    #[test]
    fn rejects_swapped_roles() {
        let err = GameState::new(setup(), det(Detective::Blue, 1), vec![det(Detective::Red, 2)])
            .unwrap_err();
        assert_eq!(err, SetupError::NotMrX(Piece::Detective(Detective::Blue)));

        let err = GameState::new(setup(), mr_x(1), vec![mr_x(2)]).unwrap_err();
        assert_eq!(err, SetupError::NotDetective(Piece::MrX));
    }

    #[test]
    fn rejects_missing_detectives() {
        let err = GameState::new(setup(), mr_x(1), vec![]).unwrap_err();
        assert_eq!(err, SetupError::NoDetectives);
    }

    #[test]
    fn rejects_reserved_tickets() {
        let blue = Piece::Detective(Detective::Blue);
        let secret = Player::new(blue, TicketBoard::new(1, 1, 1, 0, 1), 2);
        let err = GameState::new(setup(), mr_x(1), vec![secret]).unwrap_err();
        assert!(matches!(err, SetupError::ReservedTicket { ticket: Ticket::Secret, .. }));

        let double = Player::new(blue, TicketBoard::new(1, 1, 1, 1, 0), 2);
        let err = GameState::new(setup(), mr_x(1), vec![double]).unwrap_err();
        assert!(matches!(err, SetupError::ReservedTicket { ticket: Ticket::Double, .. }));
    }

    #[test]
    fn rejects_duplicates() {
        let err = GameState::new(
            setup(),
            mr_x(1),
            vec![det(Detective::Blue, 2), det(Detective::Blue, 3)],
        )
        .unwrap_err();
        assert_eq!(err, SetupError::DuplicateDetective(Piece::Detective(Detective::Blue)));

        let err = GameState::new(
            setup(),
            mr_x(1),
            vec![det(Detective::Blue, 2), det(Detective::Green, 2)],
        )
        .unwrap_err();
        assert_eq!(err, SetupError::DuplicateLocation(2));
    }

    #[test]
    fn rejects_empty_graph_and_schedule() {
        let empty_graph = GameSetup::new(StationGraph::default(), vec![true]);
        let err = GameState::new(empty_graph, mr_x(1), vec![det(Detective::Red, 2)]).unwrap_err();
        assert_eq!(err, SetupError::EmptyGraph);

        let empty_moves = GameSetup::new(graph(), Vec::new());
        let err = GameState::new(empty_moves, mr_x(1), vec![det(Detective::Red, 2)]).unwrap_err();
        assert_eq!(err, SetupError::EmptySchedule);
    }

    #[test]
    fn rejects_off_board_station() {
        let err = GameState::new(setup(), mr_x(1), vec![det(Detective::Red, 99)]).unwrap_err();
        assert_eq!(
            err,
            SetupError::UnknownStation {
                piece: Piece::Detective(Detective::Red),
                station: 99
            }
        );
    }

    #[test]
    fn first_violation_wins() {
        // Reserved ticket is checked before the duplicate station.
        let a = Player::new(Piece::Detective(Detective::Red), TicketBoard::new(1, 0, 0, 0, 1), 2);
        let b = det(Detective::Green, 2);
        let err = GameState::new(setup(), mr_x(1), vec![a, b]).unwrap_err();
        assert!(matches!(err, SetupError::ReservedTicket { .. }));
    }

    #[test]
    fn setup_is_shared_not_copied() {
        let state = GameState::new(setup(), mr_x(1), vec![det(Detective::Red, 4)]).unwrap();
        let mv = state.available_moves()[0];
        let next = state.advance(mv).unwrap();
        assert!(std::sync::Arc::ptr_eq(&state.setup().graph, &next.setup().graph));
    }
}
