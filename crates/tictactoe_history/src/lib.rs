//! Pure tic-tac-toe game state with immutable move history.
//!
//! The crate owns three things:
//!
//! - **Rules**: [`calculate_winner`] checks the eight lines of a single board.
//! - **History**: [`GameState`] keeps every snapshot played so far and the
//!   step on view. [`GameState::apply_move`] and [`GameState::jump_to`] are
//!   the only transitions, and both return a new value.
//! - **Read model**: [`GameView`] is what a renderer redraws from.
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameState, Player};
//!
//! let game = GameState::replay(&[0, 4, 1, 5, 2])?;
//! assert_eq!(game.winner(), Some(Player::X));
//!
//! // Travel back two moves and branch.
//! let game = game.jump_to(3)?.apply_move(8)?;
//! assert_eq!(game.history().len(), 5);
//! assert_eq!(game.winner(), None);
//! # Ok::<(), tictactoe_history::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;
mod view;

pub use error::EngineError;
pub use position::Position;
pub use rules::{calculate_winner, is_full};
pub use state::GameState;
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveEntry};

/// A board captured at one point in the game.
pub type Snapshot = Board;
