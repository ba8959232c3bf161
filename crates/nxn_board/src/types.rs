//! Core domain types for N×N tic-tac-toe.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// A playing piece.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Piece {
    /// The X piece.
    X,
    /// The O piece.
    O,
}

impl Piece {
    /// Returns the other piece.
    pub fn opponent(self) -> Self {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
        }
    }

    /// Parses a symbol choice. `X` or `x` selects X, anything else selects O.
    pub fn from_choice(choice: char) -> Self {
        match choice {
            'X' | 'x' => Piece::X,
            _ => Piece::O,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Free cell.
    #[default]
    Empty,
    /// Cell holding a piece.
    Occupied(Piece),
}

impl Cell {
    /// Marker used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Occupied(Piece::X) => 'X',
            Cell::Occupied(Piece::O) => 'O',
        }
    }
}

/// A requested placement at `(row, col)`.
///
/// Coordinates are signed so that any console input, and the bot's
/// "no move available" sentinel, can be represented and rejected by
/// [`Board::place`](crate::Board::place) instead of at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Zero-based row.
    pub row: i64,
    /// Zero-based column.
    pub col: i64,
}

impl Move {
    /// Sentinel returned when no free cell exists. Always out of range.
    pub const INVALID: Move = Move { row: -1, col: -1 };
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
