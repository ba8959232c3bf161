//! Human player that types moves at the console.

use super::Player;
use crate::console::{Console, ConsoleError, INVALID_NUMBER};
use nxn_board::{Board, Move, Piece};
use tracing::{debug, instrument};

/// Human player reading a row and column from the console.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
    piece: Piece,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, piece: Piece) -> Self {
        Self {
            name: name.into(),
            piece,
        }
    }
}

impl Player for HumanPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose_move(
        &mut self,
        board: &Board,
        console: &mut Console<'_>,
    ) -> Result<Move, ConsoleError> {
        loop {
            console.write_line(&format!("Player {} ({}) turn.", self.name, self.piece))?;
            console.write(&format!(
                "Enter row and column (0-{}): ",
                board.size().saturating_sub(1)
            ))?;

            let Some(row) = console.read_int()? else {
                console.write_line(INVALID_NUMBER)?;
                continue;
            };
            let Some(col) = console.read_int()? else {
                console.write_line(INVALID_NUMBER)?;
                continue;
            };

            debug!(row, col, "Human entered move");
            return Ok(Move::new(row, col));
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn piece(&self) -> Piece {
        self.piece
    }
}
