//! Board representation and game-state types.
//!
//! Contains the station graph, tickets and pieces, players, moves, the
//! travel log, game setup, and the immutable game state.

pub mod graph;
pub mod log;
pub mod moves;
pub mod piece;
pub mod player;
pub mod setup;
pub mod start;
pub mod state;
pub mod ticket;

pub use graph::{Station, StationGraph, StationGraphBuilder};
pub use log::LogEntry;
pub use moves::{DoubleMove, FunctionalVisitor, Move, MoveVisitor, SingleMove};
pub use piece::{Detective, Piece, ALL_DETECTIVES, ALL_PIECES, DETECTIVE_COUNT};
pub use player::{
    Player, TicketBoard, TicketError, DEFAULT_DETECTIVE_TICKETS, DEFAULT_MR_X_TICKETS,
};
pub use setup::{
    draw_locations, generate_detective_locations, generate_mr_x_location, standard_schedule,
    GameSetup, DETECTIVE_LOCATIONS, MR_X_LOCATIONS, REVEAL_ROUNDS, STANDARD_ROUNDS,
};
pub use start::{new_game, random_start, StartError};
pub use state::{GameState, SetupError};
pub use ticket::{
    Ticket, Transport, TransportSet, ALL_TICKETS, ALL_TRANSPORTS, TICKET_COUNT,
    TRANSPORT_COUNT,
};
