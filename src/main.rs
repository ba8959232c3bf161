//! nxn_tictactoe - console N×N tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use nxn_tictactoe::{Console, GameConfig, GameRng, GameSetup};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let rng = match config.seed() {
        Some(seed) => GameRng::new(*seed),
        None => GameRng::from_entropy(),
    };
    info!(seed = rng.seed(), "Starting game");

    let mut console = Console::stdio();
    let game = GameSetup::new(config)
        .with_size(cli.size.map(usize::from))
        .run(&mut console, rng)
        .context("Game setup failed")?;
    game.play(&mut console).context("Game aborted")?;

    Ok(())
}

#[instrument(skip_all)]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => {
            info!("No config file given, using defaults");
            GameConfig::default()
        }
    };
    Ok(config.with_seed(cli.seed))
}
