//! Move resolution.
//!
//! Applies a chosen move to a snapshot, producing the next snapshot, and
//! decides the winner of a snapshot.

pub mod advance;
pub mod winner;

pub use advance::{advance, AdvanceError};
pub use winner::evaluate_winner;
