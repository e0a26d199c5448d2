//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// Only meaningful once a win has been ruled out: a full board
/// with a completed line is a win, not a draw.
#[instrument(skip(board))]
pub fn check_draw(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
