//! Game model: the single mutating entry point over a chain of snapshots.
//!
//! The model owns the current [`GameState`] and a list of observers. Every
//! successful [`Model::choose_move`] replaces the current state and notifies
//! each observer once, synchronously, in registration order.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::board::{GameState, Move};
use crate::resolve::AdvanceError;

/// What happened to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    MoveMade,
    GameOver,
}

impl Event {
    pub const fn name(self) -> &'static str {
        match self {
            Event::MoveMade => "move_made",
            Event::GameOver => "game_over",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Receives model change notifications.
pub trait Observer: Send + Sync {
    fn on_model_changed(&self, board: &GameState, event: Event);
}

impl<F> Observer for F
where
    F: Fn(&GameState, Event) + Send + Sync,
{
    fn on_model_changed(&self, board: &GameState, event: Event) {
        self(board, event)
    }
}

/// Observer registration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("observer is already registered")]
    AlreadyRegistered,

    #[error("observer was never registered")]
    NotRegistered,
}

/// Wraps the current game state and fans out changes to observers.
pub struct Model {
    state: GameState,
    observers: Vec<Arc<dyn Observer>>,
}

impl Model {
    pub fn new(state: GameState) -> Self {
        Model {
            state,
            observers: Vec::new(),
        }
    }

    /// The current snapshot.
    pub fn current_board(&self) -> &GameState {
        &self.state
    }

    /// Registers `observer`. Observers are compared by handle identity.
    pub fn register_observer(&mut self, observer: Arc<dyn Observer>) -> Result<(), ModelError> {
        if self.observers.iter().any(|o| Arc::ptr_eq(o, &observer)) {
            return Err(ModelError::AlreadyRegistered);
        }
        self.observers.push(observer);
        Ok(())
    }

    pub fn unregister_observer(&mut self, observer: &Arc<dyn Observer>) -> Result<(), ModelError> {
        let idx = self
            .observers
            .iter()
            .position(|o| Arc::ptr_eq(o, observer))
            .ok_or(ModelError::NotRegistered)?;
        self.observers.remove(idx);
        Ok(())
    }

    /// Registered observers, in registration order.
    pub fn observers(&self) -> &[Arc<dyn Observer>] {
        &self.observers
    }

    /// Advances the game with `mv` and notifies observers. On error the
    /// current state is unchanged and nobody is notified.
    pub fn choose_move(&mut self, mv: Move) -> Result<(), AdvanceError> {
        self.state = self.state.advance(mv)?;

        let event = if self.state.is_game_over() {
            info!(winner = ?self.state.winner(), "game over");
            Event::GameOver
        } else {
            Event::MoveMade
        };
        debug!(%mv, %event, observers = self.observers.len(), "notifying");
        for observer in &self.observers {
            observer.on_model_changed(&self.state, event);
        }
        Ok(())
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
