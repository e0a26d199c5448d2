//! Strictly Console - tic-tac-toe against a random computer
//!
//! A human at the terminal plays X (by default) against a computer that
//! picks open squares at random.
//!
//! # Architecture
//!
//! - **Games**: board, rules, and the game engine state machine
//! - **Players**: move sources for the human and the computer
//! - **Orchestrator**: the turn loop that prints the board and results
//! - **Config**: TOML settings for names, marks, and sampling
//!
//! # Example
//!
//! ```
//! use strictly_console::{Game, GameStatus, Player};
//!
//! let mut game = Game::new(Player::X);
//! let status = game.apply_move(Player::X, 0, 0).unwrap();
//! assert_eq!(status, GameStatus::AwaitingComputerMove);
//! assert_eq!(game.board().to_string().lines().next(), Some("X| | "));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod orchestrator;
mod players;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Turn loop
pub use orchestrator::{
    DRAW_MESSAGE, Orchestrator, TurnError, WELCOME_MESSAGE, capitalize, turn_banner,
};

// Crate-level exports - Move sources
pub use players::{
    HumanPlayer, INVALID_INPUT_MESSAGE, INVALID_MOVE_MESSAGE, InputError, MoveSource,
    PlayerError, RandomPlayer, parse_coordinate, resolve_move,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameStatus, LINES, Move, MoveError, Outcome, Player, Position,
    SamplingStrategy, Seat, Square, apply_move, check_draw, check_win, check_winner,
    select_random_move, validate_move,
};
