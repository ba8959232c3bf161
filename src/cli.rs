//! Command-line interface for nxn_tictactoe.

use clap::Parser;

/// N×N tic-tac-toe against a friend or a random-move bot
#[derive(Parser, Debug)]
#[command(name = "nxn_tictactoe")]
#[command(about = "Console N×N tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Seed for the bot's random moves (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Board size; skips the size prompt
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub size: Option<u16>,
}
