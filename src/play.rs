//! Interactive play loop.

use crate::command::{Command, HELP};
use crate::session::GameSession;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_history::EngineError;
use tracing::{debug, info, instrument};

/// Reads commands from `input` until `quit` or end of input.
///
/// The board itself is drawn by the session's observers; `out` only
/// receives prompts, help and messages about rejected input.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(session: &mut GameSession, input: R, mut out: W) -> Result<()> {
    info!("Starting play loop");
    writeln!(out, "Type `help` for commands.")?;
    session.notify();

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        debug!(?command, "Parsed command");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Show => session.notify(),
            Command::Place(pos) => {
                let changed = session
                    .apply_move(pos.to_index())
                    .context("Move broke the game history")?;
                if !changed {
                    let reason = if session.state().has_winner() {
                        "The game is over. Jump back to play a different line."
                    } else {
                        "That square is already taken."
                    };
                    writeln!(out, "{}", reason)?;
                }
            }
            Command::Jump(step) => match session.jump_to(step) {
                Ok(()) => {}
                Err(e @ EngineError::StepOutOfRange { .. }) => writeln!(out, "{}", e)?,
                Err(e) => return Err(e).context("Jump broke the game history"),
            },
        }
    }

    info!(step = session.state().current_step(), "Play loop finished");
    out.flush()?;
    Ok(())
}
