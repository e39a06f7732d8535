//! Gomoku in the terminal
//!
//! Players type `row,col` to place a stone and `q` to quit.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use gomoku::config::{GameArgs, GameConfig};
use gomoku::console::{Outcome, Session};
use gomoku::Board;

/// Play Gomoku on the command line.
#[derive(Parser)]
#[command(name = "gomoku-cli", about = "Two-player Gomoku in the terminal")]
struct Cli {
    #[command(flatten)]
    game: GameArgs,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    if cli.game.print_config {
        print!("{}", GameConfig::default_toml());
        return Ok(());
    }
    let config = cli
        .game
        .resolve()
        .with_context(|| format!("loading config from {}", cli.game.config.display()))?;
    let mut board = Board::from_config(&config).context("setting up the board")?;

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());
    if let Outcome::Winner(color) = session.run(&mut board).context("console I/O failed")? {
        tracing::debug!(%color, "session finished with a winner");
    }
    Ok(())
}
