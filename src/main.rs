//! Time-travel tic-tac-toe - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, Write};
use time_travel_tictactoe::{
    AppConfig, Board, GameSession, GameState, RenderConfig, TextRenderer, calculate_winner,
    logging, play,
};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let logs = logging::init();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(format) = cli.format {
        let render = config.render().clone().with_format(format);
        config = config.with_render(render);
    }

    logs.apply_config(&config).context("Failed to apply log filter from config")?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(config.render().clone()),
        Command::Replay { moves, jump } => run_replay(config.render().clone(), &moves, jump),
        Command::Winner { board } => run_winner(&board),
    }
}

/// Play interactively on stdin/stdout
#[instrument(skip(render))]
fn run_play(render: RenderConfig) -> Result<()> {
    info!("Starting interactive game");

    let mut session = GameSession::new();
    session.subscribe(Box::new(TextRenderer::new(io::stdout(), render)));

    let stdin = io::stdin();
    play::run(&mut session, stdin.lock(), io::stdout())
}

/// Apply `moves` from a new game and print the final view
#[instrument(skip(render))]
fn run_replay(render: RenderConfig, moves: &[u8], jump: Option<usize>) -> Result<()> {
    let cells: Vec<usize> = moves.iter().map(|&m| usize::from(m)).collect();
    let mut state = GameState::replay(&cells).context("Failed to replay moves")?;

    if let Some(step) = jump {
        state = state.jump_to(step).context("Failed to jump")?;
    }

    info!(step = state.current_step(), "Replay finished");
    TextRenderer::new(io::stdout(), render)
        .render(&state.view())
        .context("Failed to write view")
}

/// Print the winner of a compact board string, or `none`
#[instrument]
fn run_winner(board: &str) -> Result<()> {
    let board: Board = board.parse().context("Failed to parse board")?;

    let mut out = io::stdout().lock();
    match calculate_winner(&board) {
        Some(player) => writeln!(out, "{}", player)?,
        None => writeln!(out, "none")?,
    }
    Ok(())
}
