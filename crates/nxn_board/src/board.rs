//! The N×N board.

use crate::rules::win::completes_line;
use crate::{Cell, MoveError, Piece};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// N×N tic-tac-toe board with free-cell bookkeeping.
///
/// Invariant: `free` always equals the number of [`Cell::Empty`] cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
    free: usize,
}

impl Board {
    /// Creates an empty board of the given size.
    #[instrument]
    pub fn new(size: usize) -> Self {
        let count = size * size;
        Self {
            size,
            cells: vec![Cell::Empty; count],
            free: count,
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of empty cells.
    pub fn free_count(&self) -> usize {
        self.free
    }

    /// Returns the cell at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: i64, col: i64) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Maps signed coordinates to a row-major index, if they are on the board.
    fn index(&self, row: i64, col: i64) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Places `piece` at `(row, col)`.
    ///
    /// Fails without touching the board when the coordinates are out of
    /// range or the cell is occupied.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn place(&mut self, row: i64, col: i64, piece: Piece) -> Result<(), MoveError> {
        let idx = self.index(row, col).ok_or(MoveError::OutOfBounds {
            row,
            col,
            size: self.size,
        })?;

        if self.cells[idx] != Cell::Empty {
            return Err(MoveError::Occupied {
                row: idx / self.size,
                col: idx % self.size,
            });
        }

        self.cells[idx] = Cell::Occupied(piece);
        self.free -= 1;
        debug!(free = self.free, "Piece placed");
        Ok(())
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.free == 0
    }

    /// All empty cells as `(row, col)` in row-major order.
    pub fn free_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(idx, _)| (idx / self.size, idx % self.size))
            .collect()
    }

    /// Checks whether the line through `(row, col)` is complete for `piece`.
    ///
    /// Only the row, the column, and whichever diagonals contain the cell
    /// are inspected, since only the last move can complete a line.
    #[instrument(skip(self))]
    pub fn check_win(&self, row: i64, col: i64, piece: Piece) -> bool {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(row), Ok(col)) if row < self.size && col < self.size => {
                completes_line(self, row, col, piece)
            }
            _ => false,
        }
    }

    /// Cell at in-range coordinates.
    pub(crate) fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    /// Renders the board as text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                write!(f, " {} ", self.cell(row, col).symbol())?;
                if col + 1 < self.size {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if row + 1 < self.size {
                for _ in 0..self.size {
                    write!(f, "--- ")?;
                }
                writeln!(f)?;
            }
        }
        writeln!(f)
    }
}
