//! Players and ticket boards.
//!
//! A `Player` is a plain `Copy` value: piece, station, and a fixed-size
//! ticket board indexed by `Ticket as usize`. Every mutation returns a new
//! value and leaves the original untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::graph::Station;
use super::piece::Piece;
use super::ticket::{Ticket, ALL_TICKETS, TICKET_COUNT};

/// Errors raised by ticket accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TicketError {
    #[error("no {} ticket remaining", .0.name())]
    Insufficient(Ticket),
}

/// Per-ticket counts for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TicketBoard {
    counts: [u32; TICKET_COUNT],
}

impl TicketBoard {
    /// Creates a board from counts in ticket order: taxi, bus, underground,
    /// double, secret.
    pub const fn new(taxi: u32, bus: u32, underground: u32, double: u32, secret: u32) -> Self {
        TicketBoard {
            counts: [taxi, bus, underground, double, secret],
        }
    }

    pub const fn count(&self, ticket: Ticket) -> u32 {
        self.counts[ticket as usize]
    }

    /// Total number of tickets of every kind.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Iterates (ticket, count) pairs in ticket order.
    pub fn iter(&self) -> impl Iterator<Item = (Ticket, u32)> + '_ {
        ALL_TICKETS.iter().map(|t| (*t, self.counts[*t as usize]))
    }
}

/// Default tickets for Mr X.
pub const DEFAULT_MR_X_TICKETS: TicketBoard = TicketBoard::new(4, 3, 3, 2, 5);

/// Default tickets for a detective.
pub const DEFAULT_DETECTIVE_TICKETS: TicketBoard = TicketBoard::new(11, 8, 4, 0, 0);

/// An immutable game participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    piece: Piece,
    tickets: TicketBoard,
    location: Station,
}

impl Player {
    pub const fn new(piece: Piece, tickets: TicketBoard, location: Station) -> Self {
        Player { piece, tickets, location }
    }

    pub const fn piece(&self) -> Piece {
        self.piece
    }

    pub const fn tickets(&self) -> &TicketBoard {
        &self.tickets
    }

    pub const fn location(&self) -> Station {
        self.location
    }

    pub const fn is_mr_x(&self) -> bool {
        self.piece.is_mr_x()
    }

    pub const fn is_detective(&self) -> bool {
        self.piece.is_detective()
    }

    /// Returns true if at least one `ticket` remains.
    pub const fn has(&self, ticket: Ticket) -> bool {
        self.tickets.count(ticket) != 0
    }

    pub const fn has_at_least(&self, ticket: Ticket, count: u32) -> bool {
        self.tickets.count(ticket) >= count
    }

    /// Returns a player holding one more `ticket`.
    pub fn give(&self, ticket: Ticket) -> Player {
        let mut next = *self;
        next.tickets.counts[ticket as usize] += 1;
        next
    }

    /// Gives each ticket in turn, left to right.
    pub fn give_all<I: IntoIterator<Item = Ticket>>(&self, tickets: I) -> Player {
        tickets.into_iter().fold(*self, |p, t| p.give(t))
    }

    /// Returns a player holding one fewer `ticket`.
    pub fn use_ticket(&self, ticket: Ticket) -> Result<Player, TicketError> {
        if !self.has(ticket) {
            return Err(TicketError::Insufficient(ticket));
        }
        let mut next = *self;
        next.tickets.counts[ticket as usize] -= 1;
        Ok(next)
    }

    /// Uses each ticket in turn, left to right, failing on the first shortfall.
    pub fn use_all<I: IntoIterator<Item = Ticket>>(
        &self,
        tickets: I,
    ) -> Result<Player, TicketError> {
        tickets.into_iter().try_fold(*self, |p, t| p.use_ticket(t))
    }

    /// Returns this player moved to `station`, tickets unchanged.
    pub fn at(&self, station: Station) -> Player {
        Player { location: station, ..*self }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.piece, self.location)
    }
}
