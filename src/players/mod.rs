//! Move sources that supply positions to the turn loop.

mod human;
mod random;

pub use human::{
    HumanPlayer, INVALID_INPUT_MESSAGE, INVALID_MOVE_MESSAGE, InputError, parse_coordinate,
    resolve_move,
};
pub use random::RandomPlayer;

use crate::games::tictactoe::{Game, Position};

/// Something that can choose a move when its seat is on turn.
///
/// Implementations block until they have a legal position for the
/// current board.
pub trait MoveSource {
    /// Gets a move from this player.
    ///
    /// Returns an open position on `game`'s board.
    fn get_move(&mut self, game: &Game) -> Result<Position, PlayerError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// A move source could not produce a move.
#[derive(Debug, derive_more::Display)]
pub enum PlayerError {
    /// Standard input reached end of file mid-prompt.
    #[display("Input closed before a move was entered")]
    InputClosed,

    /// Reading input or writing a prompt failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),

    /// Asked for a move on a full board.
    #[display("No open squares left")]
    NoMovesAvailable,
}

impl std::error::Error for PlayerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlayerError::Io(err) => Some(err),
            PlayerError::InputClosed | PlayerError::NoMovesAvailable => None,
        }
    }
}

impl From<std::io::Error> for PlayerError {
    fn from(err: std::io::Error) -> Self {
        PlayerError::Io(err)
    }
}
