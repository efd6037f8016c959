//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board. Rules are kept apart from the
//! history model so that a renderer can evaluate any snapshot directly.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, calculate_winner, winning_line};
