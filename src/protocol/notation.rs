//! Text notation for moves.
//!
//! Single move: `<piece> <source> <ticket> <dest>`, e.g. `blue 85 taxi 68`.
//! Double move: `<piece> <source> <ticket1> <dest1> <ticket2> <dest2>`.
//! `Display` on [`Move`] produces the same form.

use crate::board::{DoubleMove, Move, Piece, SingleMove, Station, Ticket};

/// Errors that can occur while parsing move notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected 4 or 6 fields, got {0}")]
    WrongFieldCount(usize),

    #[error("unknown piece: '{0}'")]
    UnknownPiece(String),

    #[error("unknown ticket: '{0}'")]
    UnknownTicket(String),

    #[error("invalid station: '{0}'")]
    InvalidStation(String),
}

/// Parses one move in notation form.
pub fn parse_move(s: &str) -> Result<Move, NotationError> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    match tokens.as_slice() {
        [piece, source, ticket, dest] => Ok(Move::Single(SingleMove::new(
            parse_piece(piece)?,
            parse_station(source)?,
            parse_ticket(ticket)?,
            parse_station(dest)?,
        ))),
        [piece, source, t1, d1, t2, d2] => Ok(Move::Double(DoubleMove {
            piece: parse_piece(piece)?,
            source: parse_station(source)?,
            ticket1: parse_ticket(t1)?,
            destination1: parse_station(d1)?,
            ticket2: parse_ticket(t2)?,
            destination2: parse_station(d2)?,
        })),
        other => Err(NotationError::WrongFieldCount(other.len())),
    }
}

fn parse_piece(s: &str) -> Result<Piece, NotationError> {
    Piece::from_name(s).ok_or_else(|| NotationError::UnknownPiece(s.to_string()))
}

fn parse_ticket(s: &str) -> Result<Ticket, NotationError> {
    Ticket::from_name(s).ok_or_else(|| NotationError::UnknownTicket(s.to_string()))
}

fn parse_station(s: &str) -> Result<Station, NotationError> {
    s.parse()
        .map_err(|_| NotationError::InvalidStation(s.to_string()))
}
