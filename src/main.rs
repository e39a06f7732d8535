//! Gomoku GUI
//!
//! Two players share one window and take turns clicking the board.

use anyhow::{Context, Result};
use clap::Parser;
use gomoku::config::{GameArgs, GameConfig};
use gomoku::ui::{GameState, GomokuApp};

/// Play Gomoku in a desktop window.
#[derive(Parser)]
#[command(name = "gomoku", about = "Hotseat Gomoku")]
struct Cli {
    #[command(flatten)]
    game: GameArgs,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    if cli.game.print_config {
        print!("{}", GameConfig::default_toml());
        return Ok(());
    }
    let config = cli
        .game
        .resolve()
        .with_context(|| format!("loading config from {}", cli.game.config.display()))?;
    let state = GameState::new(config).context("setting up the board")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(GomokuApp::new(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}
