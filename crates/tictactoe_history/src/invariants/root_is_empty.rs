//! Root invariant: history starts from exactly one empty board.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: The first snapshot exists and is the empty board.
pub struct RootIsEmptyInvariant;

impl Invariant<GameState> for RootIsEmptyInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with a single empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(RootIsEmptyInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_empty_history_violates() {
        let game = GameState::from_parts_unchecked(Vec::new(), 0);
        assert!(!RootIsEmptyInvariant::holds(&game));
    }

    #[test]
    fn test_marked_root_violates() {
        let root = Board::new().with_mark(Position::TopLeft, Player::O);
        let game = GameState::from_parts_unchecked(vec![root], 0);
        assert!(!RootIsEmptyInvariant::holds(&game));
    }
}
