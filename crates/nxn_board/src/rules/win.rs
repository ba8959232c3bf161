//! Win detection through the last placed cell.

use crate::{Board, Cell, Piece};

/// Checks the lines through `(row, col)` for `piece`.
///
/// The diagonals are only considered when the cell lies on them.
/// Coordinates must be on the board.
pub fn completes_line(board: &Board, row: usize, col: usize, piece: Piece) -> bool {
    let n = board.size();

    line_filled(board, piece, (0..n).map(|i| (row, i)))
        || line_filled(board, piece, (0..n).map(|i| (i, col)))
        || (row == col && line_filled(board, piece, (0..n).map(|i| (i, i))))
        || (row + col + 1 == n && line_filled(board, piece, (0..n).map(|i| (i, n - 1 - i))))
}

fn line_filled(board: &Board, piece: Piece, mut line: impl Iterator<Item = (usize, usize)>) -> bool {
    line.all(|(r, c)| board.cell(r, c) == Cell::Occupied(piece))
}
