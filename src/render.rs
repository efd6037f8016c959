//! Text and JSON rendering of the game view.

use crate::config::{OutputFormat, RenderConfig};
use crate::session::StateObserver;
use std::io::{self, Write};
use tictactoe_history::{GameView, is_full};
use tracing::{instrument, warn};

/// Status line shown under the board.
///
/// The engine never reports a draw; a full board without a winner is
/// called one here.
pub fn status_line(view: &GameView) -> String {
    if view.winner().is_none() && is_full(view.board()) {
        "Draw".to_string()
    } else {
        view.status()
    }
}

/// Writes each view it receives to `out`.
#[derive(Debug, derive_new::new)]
pub struct TextRenderer<W> {
    out: W,
    config: RenderConfig,
}

impl<W: Write> TextRenderer<W> {
    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Renders `view` in the configured format.
    #[instrument(skip_all, fields(step = view.current_step()))]
    pub fn render(&mut self, view: &GameView) -> io::Result<()> {
        match self.config.format() {
            OutputFormat::Text => self.render_text(view),
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, view)?;
                writeln!(self.out)
            }
        }?;
        self.out.flush()
    }

    fn render_text(&mut self, view: &GameView) -> io::Result<()> {
        writeln!(self.out, "{}", view.board().display(*self.config.show_indices()))?;
        writeln!(self.out, "{}", status_line(view))?;

        if *self.config.show_moves() {
            for entry in view.moves() {
                let marker = if *entry.is_current() { '>' } else { ' ' };
                writeln!(self.out, "{} {}", marker, entry.label())?;
            }
        }
        Ok(())
    }
}

impl<W: Write> StateObserver for TextRenderer<W> {
    fn on_state_changed(&mut self, view: &GameView) {
        if let Err(e) = self.render(view) {
            warn!(error = %e, "Failed to render game view");
        }
    }
}
