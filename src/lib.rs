//! Manhunt engine library.
//!
//! Exposes the board representation, move generation, resolver, game model,
//! agents, and protocol modules for use by integration tests and the binary
//! entry points.

pub mod ai;
pub mod board;
pub mod engine;
pub mod model;
pub mod movegen;
pub mod protocol;
pub mod resolve;
pub mod selfplay;
