//! Bot that picks a uniformly random free cell.

use super::Player;
use crate::console::{Console, ConsoleError};
use crate::rng::GameRng;
use nxn_board::{Board, Move, Piece};
use tracing::{debug, instrument, warn};

/// Random-move bot.
#[derive(Debug, Clone)]
pub struct BotPlayer {
    name: String,
    piece: Piece,
    rng: GameRng,
}

impl BotPlayer {
    /// Creates a new bot drawing its moves from `rng`.
    pub fn new(name: impl Into<String>, piece: Piece, rng: GameRng) -> Self {
        Self {
            name: name.into(),
            piece,
            rng,
        }
    }

    /// Picks a free cell, or [`Move::INVALID`] when the board is full.
    pub fn pick(&mut self, board: &Board) -> Move {
        let free = board.free_cells();
        match self.rng.choose(&free) {
            // Board coordinates always fit in i64.
            Some(&(row, col)) => Move::new(row as i64, col as i64),
            None => {
                warn!(bot = %self.name, "No free cells available");
                Move::INVALID
            }
        }
    }
}

impl Player for BotPlayer {
    #[instrument(skip_all, fields(bot = %self.name))]
    fn choose_move(
        &mut self,
        board: &Board,
        console: &mut Console<'_>,
    ) -> Result<Move, ConsoleError> {
        console.write_line(&format!("Bot {} is thinking...", self.name))?;
        let mv = self.pick(board);
        debug!(%mv, "Bot chose move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn piece(&self) -> Piece {
        self.piece
    }
}
