//! Win invariant: nothing is played after a snapshot that has a winner.

use super::Invariant;
use crate::{GameState, calculate_winner};

/// Invariant: Only the last snapshot in the history may have a winner.
///
/// Moves on a won board are ignored, so a history with a snapshot after
/// a won one cannot come from play.
pub struct NoMoveAfterWinInvariant;

impl Invariant<GameState> for NoMoveAfterWinInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        let played_from = history.len().saturating_sub(1);

        history[..played_from]
            .iter()
            .all(|board| calculate_winner(board).is_none())
    }

    fn description() -> &'static str {
        "No snapshot follows one that already has a winner"
    }
}
