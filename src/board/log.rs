//! Mr X's travel log.

use serde::{Deserialize, Serialize};

use super::graph::Station;
use super::ticket::Ticket;

/// One round of Mr X's travel log: the ticket used, and the station only on
/// reveal rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogEntry {
    ticket: Ticket,
    location: Option<Station>,
}

impl LogEntry {
    /// An entry for a hidden round.
    pub const fn hidden(ticket: Ticket) -> Self {
        LogEntry { ticket, location: None }
    }

    /// An entry for a reveal round.
    pub const fn reveal(ticket: Ticket, location: Station) -> Self {
        LogEntry { ticket, location: Some(location) }
    }

    pub const fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// The revealed station; `None` on hidden rounds.
    pub const fn location(&self) -> Option<Station> {
        self.location
    }
}
