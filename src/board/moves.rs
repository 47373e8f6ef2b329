//! Move types.
//!
//! A move is either a single leg (one ticket) or a double leg (two tickets
//! plus a double-move ticket). Callers dispatch on the variant with `match`
//! or through [`MoveVisitor`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::graph::Station;
use super::piece::Piece;
use super::ticket::Ticket;

/// A move using one ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SingleMove {
    pub piece: Piece,
    pub source: Station,
    pub ticket: Ticket,
    pub destination: Station,
}

/// Two consecutive legs made in one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DoubleMove {
    pub piece: Piece,
    pub source: Station,
    pub ticket1: Ticket,
    pub destination1: Station,
    pub ticket2: Ticket,
    pub destination2: Station,
}

impl SingleMove {
    pub const fn new(piece: Piece, source: Station, ticket: Ticket, destination: Station) -> Self {
        SingleMove { piece, source, ticket, destination }
    }
}

impl DoubleMove {
    /// Joins two single legs made by the same piece.
    pub const fn from_legs(first: SingleMove, second: SingleMove) -> Self {
        DoubleMove {
            piece: first.piece,
            source: first.source,
            ticket1: first.ticket,
            destination1: first.destination,
            ticket2: second.ticket,
            destination2: second.destination,
        }
    }

    /// Splits the move into its two legs.
    pub const fn legs(&self) -> [SingleMove; 2] {
        [
            SingleMove::new(self.piece, self.source, self.ticket1, self.destination1),
            SingleMove::new(self.piece, self.destination1, self.ticket2, self.destination2),
        ]
    }
}

/// A legal action for one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Move {
    Single(SingleMove),
    Double(DoubleMove),
}

impl Move {
    /// The piece making the move.
    pub const fn commenced_by(&self) -> Piece {
        match self {
            Move::Single(m) => m.piece,
            Move::Double(m) => m.piece,
        }
    }

    /// Where the piece stood before moving.
    pub const fn source(&self) -> Station {
        match self {
            Move::Single(m) => m.source,
            Move::Double(m) => m.source,
        }
    }

    /// Where the piece ends up.
    pub const fn destination(&self) -> Station {
        match self {
            Move::Single(m) => m.destination,
            Move::Double(m) => m.destination2,
        }
    }

    /// Every ticket consumed, in order; a double move also spends a
    /// double-move ticket.
    pub fn tickets(&self) -> Vec<Ticket> {
        match self {
            Move::Single(m) => vec![m.ticket],
            Move::Double(m) => vec![m.ticket1, m.ticket2, Ticket::Double],
        }
    }

    /// Dispatches to the visitor method matching this variant.
    pub fn accept<T, V: MoveVisitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        match self {
            Move::Single(m) => visitor.visit_single(m),
            Move::Double(m) => visitor.visit_double(m),
        }
    }
}

impl From<SingleMove> for Move {
    fn from(m: SingleMove) -> Self {
        Move::Single(m)
    }
}

impl From<DoubleMove> for Move {
    fn from(m: DoubleMove) -> Self {
        Move::Double(m)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Single(m) => write!(
                f,
                "{} {} {} {}",
                m.piece,
                m.source,
                m.ticket.name(),
                m.destination
            ),
            Move::Double(m) => write!(
                f,
                "{} {} {} {} {} {}",
                m.piece,
                m.source,
                m.ticket1.name(),
                m.destination1,
                m.ticket2.name(),
                m.destination2
            ),
        }
    }
}

/// Visitor over the move variants.
pub trait MoveVisitor<T> {
    fn visit_single(&mut self, m: &SingleMove) -> T;
    fn visit_double(&mut self, m: &DoubleMove) -> T;
}

/// Adapts a pair of closures into a [`MoveVisitor`].
pub struct FunctionalVisitor<S, D> {
    single: S,
    double: D,
}

impl<S, D> FunctionalVisitor<S, D> {
    pub fn new(single: S, double: D) -> Self {
        FunctionalVisitor { single, double }
    }
}

impl<T, S, D> MoveVisitor<T> for FunctionalVisitor<S, D>
where
    S: FnMut(&SingleMove) -> T,
    D: FnMut(&DoubleMove) -> T,
{
    fn visit_single(&mut self, m: &SingleMove) -> T {
        (self.single)(m)
    }

    fn visit_double(&mut self, m: &DoubleMove) -> T {
        (self.double)(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::Detective;

    fn double() -> Move {
        Move::Double(DoubleMove {
            piece: Piece::MrX,
            source: 1,
            ticket1: Ticket::Taxi,
            destination1: 2,
            ticket2: Ticket::Secret,
            destination2: 3,
        })
    }

    #[test]
    fn double_move_spends_three_tickets() {
        assert_eq!(double().tickets(), vec![Ticket::Taxi, Ticket::Secret, Ticket::Double]);
        assert_eq!(double().destination(), 3);
        assert_eq!(double().source(), 1);
    }

    #[test]
    fn legs_roundtrip() {
        let Move::Double(d) = double() else { unreachable!() };
        let [a, b] = d.legs();
        assert_eq!(a.destination, b.source);
        assert_eq!(DoubleMove::from_legs(a, b), d);
    }

    #[test]
    fn equality_is_structural() {
        let a = Move::from(SingleMove::new(Piece::MrX, 1, Ticket::Taxi, 2));
        let b = Move::from(SingleMove::new(Piece::MrX, 1, Ticket::Taxi, 2));
        let c = Move::from(SingleMove::new(Piece::MrX, 1, Ticket::Bus, 2));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn functional_visitor_dispatches_by_variant() {
        let mut visitor =
            FunctionalVisitor::new(|m: &SingleMove| m.destination, |m: &DoubleMove| m.destination1);
        let single = Move::from(SingleMove::new(
            Piece::Detective(Detective::Red),
            4,
            Ticket::Bus,
            9,
        ));
        assert_eq!(single.accept(&mut visitor), 9);
        assert_eq!(double().accept(&mut visitor), 2);
    }

    #[test]
    fn display_uses_notation() {
        let single = Move::from(SingleMove::new(
            Piece::Detective(Detective::Blue),
            85,
            Ticket::Taxi,
            68,
        ));
        assert_eq!(single.to_string(), "blue 85 taxi 68");
        assert_eq!(double().to_string(), "mrx 1 taxi 2 secret 3");
    }
}
