//! Player trait and implementations.

mod bot;
mod human;

pub use bot::BotPlayer;
pub use human::HumanPlayer;

use crate::console::{Console, ConsoleError};
use nxn_board::{Board, Move, Piece};

/// A participant that produces moves.
pub trait Player {
    /// Gets the next move for the current board.
    ///
    /// The move is not validated here; the board rejects illegal
    /// placements and the game asks again.
    fn choose_move(&mut self, board: &Board, console: &mut Console<'_>)
    -> Result<Move, ConsoleError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns the piece this player places.
    fn piece(&self) -> Piece;
}
