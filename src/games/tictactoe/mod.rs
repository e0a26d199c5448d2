//! Tic-tac-toe game engine.

mod action;
mod game;
mod outcome;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{
    LINES, SamplingStrategy, apply_move, check_draw, check_win, check_winner,
    select_random_move, validate_move,
};
pub use types::{Board, GameStatus, Player, Seat, Square};

