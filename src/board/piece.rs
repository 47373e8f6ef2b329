//! Player pieces.
//!
//! One concealed piece (Mr X) and five coloured detective pieces. The colour
//! is the identity key: two players holding the same piece are the same
//! participant.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The number of detective colours.
pub const DETECTIVE_COUNT: usize = 5;

/// A detective colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Detective {
    Red = 0,
    Green = 1,
    Blue = 2,
    White = 3,
    Yellow = 4,
}

/// All detectives in piece order.
pub const ALL_DETECTIVES: [Detective; DETECTIVE_COUNT] = [
    Detective::Red,
    Detective::Green,
    Detective::Blue,
    Detective::White,
    Detective::Yellow,
];

impl Detective {
    /// Returns the HTML colour of the counter.
    pub const fn web_colour(self) -> &'static str {
        match self {
            Detective::Red => "#f00",
            Detective::Green => "#0f0",
            Detective::Blue => "#00f",
            Detective::White => "#fff",
            Detective::Yellow => "#ff0",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Detective::Red => "red",
            Detective::Green => "green",
            Detective::Blue => "blue",
            Detective::White => "white",
            Detective::Yellow => "yellow",
        }
    }
}

/// A game piece. Ordering follows piece value: Mr X first, then detectives
/// in colour order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Piece {
    MrX,
    Detective(Detective),
}

/// All pieces in value order.
pub const ALL_PIECES: [Piece; DETECTIVE_COUNT + 1] = [
    Piece::MrX,
    Piece::Detective(Detective::Red),
    Piece::Detective(Detective::Green),
    Piece::Detective(Detective::Blue),
    Piece::Detective(Detective::White),
    Piece::Detective(Detective::Yellow),
];

impl Piece {
    pub const fn is_mr_x(self) -> bool {
        matches!(self, Piece::MrX)
    }

    pub const fn is_detective(self) -> bool {
        !self.is_mr_x()
    }

    /// Returns the detective colour, if this is a detective piece.
    pub const fn detective(self) -> Option<Detective> {
        match self {
            Piece::MrX => None,
            Piece::Detective(d) => Some(d),
        }
    }

    pub const fn web_colour(self) -> &'static str {
        match self {
            Piece::MrX => "#000",
            Piece::Detective(d) => d.web_colour(),
        }
    }

    /// Returns the lowercase name used in move notation.
    pub const fn name(self) -> &'static str {
        match self {
            Piece::MrX => "mrx",
            Piece::Detective(d) => d.name(),
        }
    }

    /// Parses a piece from its notation name, ignoring ASCII case.
    pub fn from_name(s: &str) -> Option<Piece> {
        ALL_PIECES
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
    }
}

impl From<Detective> for Piece {
    fn from(d: Detective) -> Self {
        Piece::Detective(d)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
