//! Read model pulled by renderers after every transition.

use crate::{Board, GameState, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One entry in the move list: a step the player can jump back to.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Index into the history.
    step: usize,
    /// Button text, e.g. `"Go to move #3"`.
    label: String,
    /// Whether this is the step on view.
    is_current: bool,
}

impl MoveEntry {
    /// Creates the entry for `step`.
    pub fn new(step: usize, is_current: bool) -> Self {
        let label = if step == 0 {
            "Go to start".to_string()
        } else {
            format!("Go to move #{}", step)
        };
        Self {
            step,
            label,
            is_current,
        }
    }
}

/// Snapshot of everything a renderer needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// Board at the current step.
    board: Board,
    /// Winner of that board, if any.
    winner: Option<Player>,
    /// Player to move from the current step.
    next_player: Player,
    /// Step on view.
    current_step: usize,
    /// One entry per snapshot in the history.
    moves: Vec<MoveEntry>,
}

impl GameView {
    /// Status line: `"Winner: X"` once someone has won, else `"Next player: O"`.
    pub fn status(&self) -> String {
        match self.winner {
            Some(winner) => format!("Winner: {}", winner),
            None => format!("Next player: {}", self.next_player),
        }
    }
}

impl GameState {
    /// Projects this state into a [`GameView`].
    #[instrument(skip(self), fields(step = self.current_step()))]
    pub fn view(&self) -> GameView {
        let current_step = self.current_step();
        GameView {
            board: *self.current(),
            winner: self.winner(),
            next_player: self.next_player(),
            current_step,
            moves: (0..self.history().len())
                .map(|step| MoveEntry::new(step, step == current_step))
                .collect(),
        }
    }
}
