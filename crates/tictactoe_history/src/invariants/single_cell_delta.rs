//! Delta invariant: each snapshot adds exactly one mark, alternating X and O.

use super::Invariant;
use crate::{GameState, Player, Square};

/// Invariant: Snapshot `i` differs from `i - 1` in exactly one square.
///
/// That square goes from empty to the mark of the player who moves at
/// step `i - 1`: X on even steps, O on odd ones. This is what lets the
/// next player be derived from the step number alone.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let [before, after] = pair else {
                    return false;
                };
                match before.diff(after).as_slice() {
                    [pos] => {
                        before.get(*pos) == Square::Empty
                            && after.get(*pos) == Square::Occupied(Player::for_step(step))
                    }
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark for the player on turn"
    }
}
