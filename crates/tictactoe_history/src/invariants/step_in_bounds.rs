//! Step invariant: the current step points into the history.

use super::Invariant;
use crate::GameState;

/// Invariant: `current_step < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step is an index into the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jumped_game_holds() {
        let game = GameState::replay(&[0, 1, 2]).unwrap().jump_to(1).unwrap();
        assert!(StepInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_step_past_end_violates() {
        let game = GameState::from_parts_unchecked(vec![crate::Board::new()], 1);
        assert!(!StepInBoundsInvariant::holds(&game));
    }
}
