//! Text protocol handling.
//!
//! Board description loading, move notation, and the command parser for the
//! main loop.

pub mod graph;
pub mod notation;
pub mod parser;

pub use graph::{load_graph, parse_graph, GraphError};
pub use notation::{parse_move, NotationError};
pub use parser::{parse_command, Command};
