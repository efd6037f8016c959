//! Game session: the single writer of a [`GameState`] and its observers.

use tictactoe_history::{EngineError, GameState, GameView};
use tracing::{debug, info, instrument};

/// Receives the read model after every transition.
///
/// Renderers implement this to redraw whenever the session changes.
pub trait StateObserver {
    /// Called with the fresh view after `apply_move` or `jump_to`.
    fn on_state_changed(&mut self, view: &GameView);
}

/// Owns the current game state and notifies observers on every call.
///
/// Observers are notified even when a move was ignored, so a renderer
/// always reflects the latest request.
pub struct GameSession {
    state: GameState,
    observers: Vec<Box<dyn StateObserver>>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GameSession {
    /// Creates a session with a new game.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self {
            state: GameState::new(),
            observers: Vec::new(),
        }
    }

    /// Registers an observer.
    pub fn subscribe(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current read model.
    pub fn view(&self) -> GameView {
        self.state.view()
    }

    /// Plays the next mark at `cell_index` (0-8).
    ///
    /// Returns whether the state changed. Occupied squares and won boards
    /// leave it as is.
    #[instrument(skip(self), fields(step = self.state.current_step()))]
    pub fn apply_move(&mut self, cell_index: usize) -> Result<bool, EngineError> {
        let next = self.state.apply_move(cell_index)?;
        let changed = next != self.state;
        if changed {
            info!(
                cell_index,
                step = next.current_step(),
                winner = ?next.winner(),
                "Move applied"
            );
        } else {
            debug!(cell_index, "Move ignored");
        }
        self.replace(next);
        Ok(changed)
    }

    /// Moves the view to `step`.
    #[instrument(skip(self), fields(len = self.state.history().len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        let next = self.state.jump_to(step)?;
        info!(step, "Jumped to step");
        self.replace(next);
        Ok(())
    }

    /// Sends the current view to every observer.
    pub fn notify(&mut self) {
        let view = self.state.view();
        for observer in &mut self.observers {
            observer.on_state_changed(&view);
        }
    }

    fn replace(&mut self, next: GameState) {
        self.state = next;
        self.notify();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
