//! N×N tic-tac-toe at the console.
//!
//! # Architecture
//!
//! - **Board**: grid storage, move validation and win detection live in the
//!   `nxn_board` crate.
//! - **Players**: humans typing moves, or a bot choosing random free cells.
//! - **Game**: setup dialogue, turn queue and end-of-game detection.
//!
//! # Example
//!
//! ```no_run
//! use nxn_tictactoe::{Console, GameConfig, GameRng, GameSetup};
//!
//! # fn example() -> Result<(), nxn_tictactoe::ConsoleError> {
//! let mut console = Console::stdio();
//! let game = GameSetup::new(GameConfig::default()).run(&mut console, GameRng::new(7))?;
//! let outcome = game.play(&mut console)?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod game;
mod players;
mod rng;

pub use config::{ConfigError, GameConfig};
pub use console::{Console, ConsoleError, INVALID_NUMBER};
pub use game::{GameInProgress, GameSetup, INVALID_MOVE, Outcome, PlacedMove, TurnResult};
pub use players::{BotPlayer, HumanPlayer, Player};
pub use rng::GameRng;

pub use nxn_board::{Board, Cell, Move, MoveError, Piece};
