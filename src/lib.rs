//! Time-travel tic-tac-toe - terminal front end for `tictactoe_history`.
//!
//! The engine crate owns the rules and the move history. This crate wires
//! it to a player:
//!
//! - **Session**: [`GameSession`] holds the one live [`GameState`] and
//!   notifies [`StateObserver`]s after each transition
//! - **Rendering**: [`TextRenderer`] draws the board, status and move list
//! - **Input**: [`Command`] parses prompt lines; [`play::run`] drives the loop
//! - **Config**: [`AppConfig`] is read from TOML; [`logging`] applies its filter
//!
//! # Example
//!
//! ```
//! use time_travel_tictactoe::{GameSession, RenderConfig, TextRenderer};
//!
//! let mut session = GameSession::new();
//! session.subscribe(Box::new(TextRenderer::new(std::io::sink(), RenderConfig::default())));
//! session.apply_move(4)?;
//! session.jump_to(0)?;
//! assert_eq!(session.state().history().len(), 2);
//! # Ok::<(), tictactoe_history::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod command;
mod config;
pub mod logging;
pub mod play;
mod render;
mod session;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH, OutputFormat, RenderConfig};

// Crate-level exports - Input
pub use command::{Command, CommandError, HELP};

// Crate-level exports - Rendering
pub use render::{TextRenderer, status_line};

// Crate-level exports - Session management
pub use session::{GameSession, StateObserver};

// Crate-level exports - Game types
pub use tictactoe_history::{
    Board, EngineError, GameState, GameView, MoveEntry, Player, Position, Square,
    calculate_winner, is_full,
};
