//! Game engine: board ownership, turn sequencing, and termination.
//!
//! A [`Game`] starts in `AwaitingHumanMove` and walks the status machine
//! on every accepted move:
//!
//! - apply the move
//! - a completed line moves to `Won` (terminal)
//! - otherwise a full board moves to `Drawn` (terminal)
//! - otherwise the turn passes to the other seat

use super::action::{Move, MoveError};
use super::outcome::Outcome;
use super::rules::{check_draw, check_win, validate_move};
use super::types::{Board, GameStatus, Player, Seat, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One game of human against computer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    human: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with the human holding `human` and moving first.
    #[instrument]
    pub fn new(human: Player) -> Self {
        Self {
            board: Board::new(),
            human,
            status: GameStatus::AwaitingHumanMove,
            history: Vec::new(),
        }
    }

    /// Rebuilds a game by applying `moves` in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] hit while replaying.
    #[instrument(skip(moves), fields(move_count = moves.len()))]
    pub fn replay(human: Player, moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new(human);
        for mv in moves {
            game.place(*mv)?;
        }
        debug!(status = ?game.status, "Replay complete");
        Ok(game)
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves applied so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Mark held by the human.
    pub fn human_mark(&self) -> Player {
        self.human
    }

    /// Mark held by `seat`.
    pub fn mark_of(&self, seat: Seat) -> Player {
        match seat {
            Seat::Human => self.human,
            Seat::Computer => self.human.opponent(),
        }
    }

    /// Seat holding `mark`.
    pub fn seat_of(&self, mark: Player) -> Seat {
        if mark == self.human {
            Seat::Human
        } else {
            Seat::Computer
        }
    }

    /// Seat on turn, or `None` once the game is over.
    pub fn seat_to_move(&self) -> Option<Seat> {
        self.status.seat_to_move()
    }

    /// Mark on turn, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        self.seat_to_move().map(|seat| self.mark_of(seat))
    }

    /// Returns the outcome once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::Won(player) => Some(Outcome::Winner(player)),
            GameStatus::Drawn => Some(Outcome::Draw),
            GameStatus::AwaitingHumanMove | GameStatus::AwaitingComputerMove => None,
        }
    }

    /// Applies `player`'s move at `(row, col)` and advances the status.
    ///
    /// # Errors
    ///
    /// - `GameOver` if the game already ended
    /// - `WrongPlayer` if `player` is not on turn
    /// - `OutOfRange` / `SquareOccupied` for an illegal square
    ///
    /// The game is unchanged on error.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn apply_move(
        &mut self,
        player: Player,
        row: usize,
        col: usize,
    ) -> Result<GameStatus, MoveError> {
        let seat = self.seat_to_move().ok_or(MoveError::GameOver)?;
        if self.mark_of(seat) != player {
            return Err(MoveError::WrongPlayer(player));
        }

        let position = validate_move(&self.board, row, col)?;
        self.board.set(position, Square::Occupied(player));
        self.history.push(Move::new(player, position));

        self.status = if check_win(&self.board, player) {
            info!(winner = %player, "Game won");
            GameStatus::Won(player)
        } else if check_draw(&self.board) {
            info!("Game drawn");
            GameStatus::Drawn
        } else {
            GameStatus::awaiting(seat.other())
        };

        debug!(position = %position, status = ?self.status, "Move applied");
        Ok(self.status)
    }

    /// Applies a [`Move`] value.
    pub fn place(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        self.apply_move(mv.player, mv.position.row(), mv.position.col())
    }
}
