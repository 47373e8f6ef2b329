//! Ticket and transport definitions.
//!
//! Every transport mode on the board maps to exactly one required ticket.
//! Tickets are `#[repr(u8)]` so they can index fixed-size ticket boards.

use serde::{Deserialize, Serialize};

/// The number of ticket kinds.
pub const TICKET_COUNT: usize = 5;

/// The number of transport modes.
pub const TRANSPORT_COUNT: usize = 4;

/// A consumable ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Ticket {
    Taxi = 0,
    Bus = 1,
    Underground = 2,
    Double = 3,
    Secret = 4,
}

/// All ticket variants in index order.
pub const ALL_TICKETS: [Ticket; TICKET_COUNT] = [
    Ticket::Taxi,
    Ticket::Bus,
    Ticket::Underground,
    Ticket::Double,
    Ticket::Secret,
];

impl Ticket {
    /// Returns the lowercase name used in move notation.
    pub const fn name(self) -> &'static str {
        match self {
            Ticket::Taxi => "taxi",
            Ticket::Bus => "bus",
            Ticket::Underground => "underground",
            Ticket::Double => "double",
            Ticket::Secret => "secret",
        }
    }

    /// Parses a ticket from its name, ignoring ASCII case.
    pub fn from_name(s: &str) -> Option<Ticket> {
        ALL_TICKETS
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s))
    }

    /// Returns true for tickets only the concealed player may hold.
    pub const fn is_reserved(self) -> bool {
        matches!(self, Ticket::Double | Ticket::Secret)
    }
}

/// A transport mode labelling a board edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Transport {
    Taxi = 0,
    Bus = 1,
    Underground = 2,
    Ferry = 3,
}

/// All transport variants in index order.
pub const ALL_TRANSPORTS: [Transport; TRANSPORT_COUNT] = [
    Transport::Taxi,
    Transport::Bus,
    Transport::Underground,
    Transport::Ferry,
];

impl Transport {
    /// Returns the ticket needed to travel by this mode.
    pub const fn required_ticket(self) -> Ticket {
        match self {
            Transport::Taxi => Ticket::Taxi,
            Transport::Bus => Ticket::Bus,
            Transport::Underground => Ticket::Underground,
            Transport::Ferry => Ticket::Secret,
        }
    }

    /// Returns the lowercase mode name used in board descriptions.
    pub const fn name(self) -> &'static str {
        match self {
            Transport::Taxi => "taxi",
            Transport::Bus => "bus",
            Transport::Underground => "underground",
            Transport::Ferry => "ferry",
        }
    }

    /// Parses a transport mode from its name, ignoring ASCII case.
    pub fn from_name(s: &str) -> Option<Transport> {
        ALL_TRANSPORTS
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s))
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A set of transport modes packed into a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TransportSet(u8);

impl TransportSet {
    /// The empty set.
    pub const EMPTY: TransportSet = TransportSet(0);

    /// Creates a set holding one mode.
    pub const fn single(mode: Transport) -> Self {
        TransportSet(mode.bit())
    }

    /// Returns a copy of this set with `mode` added.
    pub const fn with(self, mode: Transport) -> Self {
        TransportSet(self.0 | mode.bit())
    }

    /// Returns true if the set contains `mode`.
    pub const fn contains(self, mode: Transport) -> bool {
        self.0 & mode.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of modes in the set.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the contained modes in index order.
    pub fn iter(self) -> impl Iterator<Item = Transport> {
        ALL_TRANSPORTS.into_iter().filter(move |m| self.contains(*m))
    }
}

impl FromIterator<Transport> for TransportSet {
    fn from_iter<I: IntoIterator<Item = Transport>>(iter: I) -> Self {
        iter.into_iter().fold(TransportSet::EMPTY, TransportSet::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_name_roundtrip() {
        for t in ALL_TICKETS {
            assert_eq!(Ticket::from_name(t.name()), Some(t));
        }
        assert_eq!(Ticket::from_name("TAXI"), Some(Ticket::Taxi));
        assert_eq!(Ticket::from_name("boat"), None);
    }

    #[test]
    fn ferry_requires_secret() {
        assert_eq!(Transport::Ferry.required_ticket(), Ticket::Secret);
        assert_eq!(Transport::Underground.required_ticket(), Ticket::Underground);
    }

    #[test]
    fn transport_parse_is_case_insensitive() {
        assert_eq!(Transport::from_name("Underground"), Some(Transport::Underground));
        assert_eq!(Transport::from_name("FERRY"), Some(Transport::Ferry));
        assert_eq!(Transport::from_name("tram"), None);
    }

    #[test]
    fn transport_set_accumulates() {
        let set = TransportSet::single(Transport::Taxi).with(Transport::Bus);
        assert!(set.contains(Transport::Taxi));
        assert!(set.contains(Transport::Bus));
        assert!(!set.contains(Transport::Ferry));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Transport::Taxi, Transport::Bus]);
        assert!(TransportSet::EMPTY.is_empty());
    }

    #[test]
    fn reserved_tickets() {
        assert!(Ticket::Double.is_reserved());
        assert!(Ticket::Secret.is_reserved());
        assert!(!Ticket::Bus.is_reserved());
    }
}
