//! Turn loop between the human and the computer.

use crate::games::tictactoe::{Game, GameStatus, MoveError, Outcome, Player, Seat};
use crate::players::{MoveSource, PlayerError};
use std::io::Write;
use tracing::{debug, info, instrument};

/// Printed once before the empty board.
pub const WELCOME_MESSAGE: &str = "Welcome to Tic-Tac-Toe!";

/// Printed when the board fills with no line.
pub const DRAW_MESSAGE: &str = "It's a draw!";

/// Why the turn loop stopped before the game finished.
#[derive(Debug, derive_more::Display)]
pub enum TurnError {
    /// A move source failed.
    #[display("{}", _0)]
    Player(PlayerError),

    /// The engine refused a move a source claimed was legal.
    #[display("Rejected move from {}: {}", name, error)]
    Move {
        /// Name of the source that produced the move.
        name: String,
        /// Engine error.
        error: MoveError,
    },

    /// Writing to the console failed.
    #[display("Console output failed: {}", _0)]
    Io(std::io::Error),
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::Player(err) => Some(err),
            TurnError::Move { error, .. } => Some(error),
            TurnError::Io(err) => Some(err),
        }
    }
}

impl From<PlayerError> for TurnError {
    fn from(err: PlayerError) -> Self {
        TurnError::Player(err)
    }
}

impl From<std::io::Error> for TurnError {
    fn from(err: std::io::Error) -> Self {
        TurnError::Io(err)
    }
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Line announcing whose turn it is.
pub fn turn_banner(seat: Seat, mark: Player) -> String {
    match seat {
        Seat::Human => format!("Your turn ({}):", mark),
        Seat::Computer => format!("Computer's turn ({}):", mark),
    }
}

/// Orchestrates gameplay between the human and the computer.
pub struct Orchestrator<W> {
    game: Game,
    human: Box<dyn MoveSource>,
    computer: Box<dyn MoveSource>,
    output: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator with the human holding `human_mark`.
    pub fn new(
        human_mark: Player,
        human: Box<dyn MoveSource>,
        computer: Box<dyn MoveSource>,
        output: W,
    ) -> Self {
        Self {
            game: Game::new(human_mark),
            human,
            computer,
            output,
        }
    }

    /// Current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the orchestrator, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the game loop until a win or a draw.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome, TurnError> {
        info!(
            human = %self.human.name(),
            computer = %self.computer.name(),
            "Starting game"
        );

        writeln!(self.output, "{}", WELCOME_MESSAGE)?;
        write!(self.output, "{}", self.game.board())?;

        while let Some(seat) = self.game.seat_to_move() {
            let mark = self.game.mark_of(seat);
            writeln!(self.output, "{}", turn_banner(seat, mark))?;
            self.output.flush()?;

            let source = match seat {
                Seat::Human => &mut self.human,
                Seat::Computer => &mut self.computer,
            };
            debug!(player = %source.name(), "Waiting for move");
            let pos = source.get_move(&self.game)?;

            self.game
                .apply_move(mark, pos.row(), pos.col())
                .map_err(|error| TurnError::Move {
                    name: source.name().to_string(),
                    error,
                })?;

            write!(self.output, "{}", self.game.board())?;
        }

        let outcome = match self.game.status() {
            GameStatus::Won(mark) => {
                let winner = match self.game.seat_of(mark) {
                    Seat::Human => self.human.name(),
                    Seat::Computer => self.computer.name(),
                };
                writeln!(self.output, "{} wins!", capitalize(winner))?;
                Outcome::Winner(mark)
            }
            _ => {
                writeln!(self.output, "{}", DRAW_MESSAGE)?;
                Outcome::Draw
            }
        };
        self.output.flush()?;

        info!(%outcome, moves = self.game.history().len(), "Game over");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("player"), "Player");
        assert_eq!(capitalize("COMPUTER"), "Computer");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_turn_banner() {
        assert_eq!(turn_banner(Seat::Human, Player::X), "Your turn (X):");
        assert_eq!(turn_banner(Seat::Computer, Player::O), "Computer's turn (O):");
    }
}
