//! Random move selection for the computer opponent.

use super::super::{Board, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// How the computer picks among open squares.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SamplingStrategy {
    /// Draw row and column uniformly from 0-2 until the square is open.
    #[default]
    Rejection,
    /// Choose uniformly from the list of open squares.
    Uniform,
}

/// Picks a random open square, or `None` if the board is full.
///
/// With [`SamplingStrategy::Rejection`] every grid cell is equally likely
/// on each draw and occupied draws are discarded.
#[instrument(skip(board, rng))]
pub fn select_random_move<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
    strategy: SamplingStrategy,
) -> Option<Position> {
    if board.occupied_count() == board.squares().len() {
        return None;
    }

    match strategy {
        SamplingStrategy::Rejection => loop {
            let row = rng.gen_range(0..3);
            let col = rng.gen_range(0..3);
            let pos = Position::from_row_col(row, col)?;
            if board.is_empty(pos) {
                return Some(pos);
            }
            trace!(row, col, "Sampled occupied square, redrawing");
        },
        SamplingStrategy::Uniform => board.empty_positions().choose(rng).copied(),
    }
}
