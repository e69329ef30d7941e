//! Tic-tac-toe GUI
//!
//! Play X against the engine's O at the chosen difficulty.

use clap::Parser;
use tictactoe::ui::{theme, TicTacToeApp};
use tictactoe::Difficulty;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tictactoe", version, about = "Tic-tac-toe against a minimax AI")]
struct Cli {
    /// Starting difficulty (can be changed in the window)
    #[arg(short, long, value_enum, default_value_t = Difficulty::default())]
    difficulty: Difficulty,

    /// Seed for a reproducible AI
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(difficulty = %cli.difficulty, seed = ?cli.seed, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(theme::WINDOW_SIZE)
            .with_min_inner_size(theme::WINDOW_MIN_SIZE)
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, cli.difficulty, cli.seed)))),
    )
}
