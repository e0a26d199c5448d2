//! Move validation and placement.

use super::super::{Board, MoveError, Player, Position, Square};
use tracing::{debug, instrument};

/// Resolves `(row, col)` to an open position on `board`.
///
/// # Errors
///
/// `OutOfRange` if either index is outside 0-2, `SquareOccupied`
/// if the square already holds a mark.
#[instrument(skip(board))]
pub fn validate_move(board: &Board, row: usize, col: usize) -> Result<Position, MoveError> {
    let pos = Position::from_row_col(row, col).ok_or(MoveError::OutOfRange { row, col })?;
    if !board.is_empty(pos) {
        debug!(position = %pos, "Rejected move onto occupied square");
        return Err(MoveError::SquareOccupied(pos));
    }
    Ok(pos)
}

/// Places `player`'s mark at `(row, col)`, returning the new board.
///
/// The input board is left untouched; on error no board is produced.
#[instrument(skip(board))]
pub fn apply_move(
    board: &Board,
    player: Player,
    row: usize,
    col: usize,
) -> Result<Board, MoveError> {
    let pos = validate_move(board, row, col)?;
    let mut next = board.clone();
    next.set(pos, Square::Occupied(player));
    Ok(next)
}
