//! Game state with immutable move history and time travel.

use crate::error::EngineError;
use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::rules::calculate_winner;
use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Complete game state: every snapshot played so far plus the step on view.
///
/// `GameState` is a value. Transitions borrow the current state and return
/// the next one; nothing is changed in place, so a caller holding an older
/// state keeps an accurate picture of it.
///
/// Invariants (see [`HistoryInvariants`]):
/// - history is never empty and starts with the empty board
/// - each snapshot adds exactly one mark, X on even steps and O on odd
/// - only the last snapshot may have a winner
/// - `current_step < history.len()`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// Snapshots, oldest first.
    history: Vec<Board>,
    /// Index of the snapshot being viewed and played from.
    current_step: usize,
}

impl GameState {
    /// Creates a new game: a single empty snapshot, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_step: 0,
        }
    }

    /// Assembles a state from raw parts, checking every history invariant.
    #[instrument(skip(history), fields(len = history.len()))]
    pub fn from_parts(history: Vec<Board>, current_step: usize) -> Result<Self, EngineError> {
        let state = Self {
            history,
            current_step,
        };
        state.check_invariants()?;
        Ok(state)
    }

    #[cfg(test)]
    pub(crate) fn from_parts_unchecked(history: Vec<Board>, current_step: usize) -> Self {
        Self {
            history,
            current_step,
        }
    }

    /// Plays `cells` in order from a new game.
    ///
    /// Ignored moves (occupied square, game already won) are skipped the
    /// same way [`GameState::apply_move`] skips them.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, EngineError> {
        cells
            .iter()
            .try_fold(Self::new(), |game, &cell| game.apply_move(cell))
    }

    /// Returns every snapshot, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the step currently on view.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the snapshot at the current step.
    pub fn current(&self) -> &Board {
        &self.history[self.current_step]
    }

    /// Returns the player to move from the current step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Returns the winner of the current snapshot, if any.
    pub fn winner(&self) -> Option<Player> {
        calculate_winner(self.current())
    }

    /// Returns true once the current snapshot has a winner.
    pub fn has_winner(&self) -> bool {
        self.winner().is_some()
    }

    /// Places the next player's mark at `cell_index` (0-8).
    ///
    /// Moves on an occupied square, or on a snapshot that already has a
    /// winner, are ignored: the returned state equals `self`.
    ///
    /// Otherwise any snapshots after the current step are discarded, the
    /// new snapshot is appended, and the current step moves to it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CellOutOfRange`] if `cell_index > 8`.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&self, cell_index: usize) -> Result<Self, EngineError> {
        let pos =
            Position::from_index(cell_index).ok_or(EngineError::CellOutOfRange(cell_index))?;
        self.apply_position(pos)
    }

    /// Typed form of [`GameState::apply_move`].
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_position(&self, pos: Position) -> Result<Self, EngineError> {
        let current = self.current();

        if let Some(winner) = calculate_winner(current) {
            debug!(%winner, position = %pos, "Ignoring move on a won board");
            return Ok(self.clone());
        }

        if !current.is_empty(pos) {
            debug!(position = %pos, "Ignoring move on an occupied square");
            return Ok(self.clone());
        }

        let player = self.next_player();
        let next = current.with_mark(pos, player);

        let dropped = self.history.len() - (self.current_step + 1);
        if dropped > 0 {
            debug!(dropped, "Discarding snapshots after current step");
        }

        let mut history = self.history[..=self.current_step].to_vec();
        history.push(next);
        let state = Self {
            current_step: history.len() - 1,
            history,
        };

        #[cfg(debug_assertions)]
        state.check_invariants()?;

        Ok(state)
    }

    /// Moves the view to `step` without touching the history.
    ///
    /// Later snapshots are only discarded if a move is made from here.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StepOutOfRange`] if `step` is not an index
    /// into the history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Result<Self, EngineError> {
        if step >= self.history.len() {
            return Err(EngineError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        Ok(Self {
            history: self.history.clone(),
            current_step: step,
        })
    }

    fn check_invariants(&self) -> Result<(), EngineError> {
        HistoryInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "History invariant violated");
            EngineError::InvariantViolation(descriptions)
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Unvalidated wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<Board>,
    current_step: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = EngineError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        Self::from_parts(raw.history, raw.current_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.history(), &[Board::new()]);
        assert_eq!(game.current_step(), 0);
        assert_eq!(game.next_player(), Player::X);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_apply_move_returns_new_state() {
        let game = GameState::new();
        let next = game.apply_move(4).unwrap();

        assert_eq!(game, GameState::new());
        assert_eq!(next.history().len(), 2);
        assert_eq!(next.current_step(), 1);
        assert_eq!(next.current().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(next.next_player(), Player::O);
    }

    #[test]
    fn test_move_after_jump_truncates() {
        let game = GameState::replay(&[0, 1, 2, 3]).unwrap();
        let branched = game.jump_to(1).unwrap().apply_move(8).unwrap();

        assert_eq!(branched.history().len(), 3);
        assert_eq!(branched.current_step(), 2);
        assert_eq!(&branched.history()[..2], &game.history()[..2]);
        assert_eq!(
            branched.current().get(Position::BottomRight),
            Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_jump_keeps_history() {
        let game = GameState::replay(&[0, 1, 2]).unwrap();
        let back = game.jump_to(1).unwrap();

        assert_eq!(back.history(), game.history());
        assert_eq!(back.current_step(), 1);
        assert_eq!(back.next_player(), Player::O);
    }

    #[test]
    fn test_out_of_range_inputs_rejected() {
        let game = GameState::replay(&[0]).unwrap();
        assert_eq!(game.apply_move(9), Err(EngineError::CellOutOfRange(9)));
        assert_eq!(
            game.jump_to(2),
            Err(EngineError::StepOutOfRange { step: 2, len: 2 })
        );
    }

    #[test]
    fn test_from_parts_rejects_broken_history() {
        let root = Board::new();
        let bad = root.with_mark(Position::Center, Player::O);
        assert!(matches!(
            GameState::from_parts(vec![root, bad], 1),
            Err(EngineError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let game = GameState::replay(&[4, 0]).unwrap();
        let json = serde_json::to_string(&game).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game);

        let broken = r#"{"history":[],"current_step":0}"#;
        assert!(serde_json::from_str::<GameState>(broken).is_err());
    }

    #[test]
    fn test_deserialize_rejects_move_after_win() {
        let won = GameState::replay(&[0, 3, 1, 4, 2]).unwrap();
        let mut history = won.history().to_vec();
        history.push(won.current().with_mark(Position::BottomRight, Player::O));
        let json = serde_json::json!({ "history": history, "current_step": 6 });

        assert!(serde_json::from_value::<GameState>(json).is_err());
    }
}
