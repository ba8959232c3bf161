//! Pure N×N tic-tac-toe board logic.
//!
//! The board owns its grid and free-cell bookkeeping. Moves are validated
//! and applied through [`Board::place`], and wins are detected only along
//! the lines through the last placed cell.

#![warn(missing_docs)]

mod board;
mod error;
pub mod rules;
mod types;

pub use board::Board;
pub use error::MoveError;
pub use types::{Cell, Move, Piece};
