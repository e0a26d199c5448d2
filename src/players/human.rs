//! Human player that types row and column at a prompt.

use super::{MoveSource, PlayerError};
use crate::games::tictactoe::{Board, Game, MoveError, Position, validate_move};
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, instrument};

/// Printed when a coordinate is not an integer.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter numbers.";

/// Printed when the coordinates are off the board or the square is taken.
pub const INVALID_MOVE_MESSAGE: &str = "Invalid move. Try again.";

const ROW_PROMPT: &str = "Enter row (0-2): ";
const COL_PROMPT: &str = "Enter column (0-2): ";

/// Why a line of human input did not yield a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// The text was not an integer.
    #[display("{:?} is not a number", _0)]
    NotANumber(String),

    /// A coordinate was negative.
    #[display("Position ({}, {}) is off the board", row, col)]
    OffBoard {
        /// Entered row.
        row: i64,
        /// Entered column.
        col: i64,
    },

    /// The engine rejected the square.
    #[display("{}", _0)]
    Move(MoveError),
}

impl InputError {
    /// True when the input parsed but named an illegal square.
    pub fn is_invalid_move(&self) -> bool {
        match self {
            InputError::NotANumber(_) => false,
            InputError::OffBoard { .. } => true,
            InputError::Move(err) => err.is_invalid_move(),
        }
    }

    /// Message shown to the player before re-prompting.
    pub fn message(&self) -> &'static str {
        match self {
            InputError::NotANumber(_) => INVALID_INPUT_MESSAGE,
            InputError::OffBoard { .. } | InputError::Move(_) => INVALID_MOVE_MESSAGE,
        }
    }
}

impl std::error::Error for InputError {}

impl From<MoveError> for InputError {
    fn from(err: MoveError) -> Self {
        InputError::Move(err)
    }
}

/// Parses one typed coordinate.
///
/// Single `_` separators between digits are accepted (`1_0` is ten).
/// Integers too large for `i64` saturate, so they still count as a
/// number that is off the board.
pub fn parse_coordinate(text: &str) -> Result<i64, InputError> {
    let trimmed = text.trim();
    let not_a_number = || InputError::NotANumber(trimmed.to_string());

    let digits = strip_digit_separators(trimmed).ok_or_else(not_a_number)?;
    match digits.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(not_a_number()),
        },
    }
}

/// Removes `_` separators, or `None` if one is not between two digits.
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'_' {
            let before = i.checked_sub(1).and_then(|j| bytes.get(j));
            let after = bytes.get(i + 1);
            let between_digits =
                before.is_some_and(u8::is_ascii_digit) && after.is_some_and(u8::is_ascii_digit);
            if !between_digits {
                return None;
            }
        }
    }
    Some(text.replace('_', ""))
}

/// Checks typed coordinates against `board`.
#[instrument(skip(board))]
pub fn resolve_move(board: &Board, row: i64, col: i64) -> Result<Position, InputError> {
    let off_board = || InputError::OffBoard { row, col };
    let r = usize::try_from(row).map_err(|_| off_board())?;
    let c = usize::try_from(col).map_err(|_| off_board())?;
    Ok(validate_move(board, r, c)?)
}

/// Human player reading from `input` and prompting on `output`.
///
/// Bad input is answered with a message and a fresh row prompt; only
/// end of input or an I/O failure escapes [`MoveSource::get_move`].
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Consumes the player, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, PlayerError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PlayerError::InputClosed);
        }
        Ok(line)
    }

    fn read_coordinate(&mut self, prompt: &str) -> Result<Result<i64, InputError>, PlayerError> {
        let line = self.read_line(prompt)?;
        Ok(parse_coordinate(&line))
    }

    fn reject(&mut self, err: &InputError) -> Result<(), PlayerError> {
        debug!(player = %self.name, error = %err, "Rejected human input");
        writeln!(self.output, "{}", err.message())?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> MoveSource for HumanPlayer<R, W> {
    #[instrument(skip(self, game), fields(player = %self.name))]
    fn get_move(&mut self, game: &Game) -> Result<Position, PlayerError> {
        loop {
            let row = match self.read_coordinate(ROW_PROMPT)? {
                Ok(row) => row,
                Err(err) => {
                    self.reject(&err)?;
                    continue;
                }
            };
            let col = match self.read_coordinate(COL_PROMPT)? {
                Ok(col) => col,
                Err(err) => {
                    self.reject(&err)?;
                    continue;
                }
            };

            match resolve_move(game.board(), row, col) {
                Ok(pos) => {
                    debug!(position = %pos, "Human chose position");
                    return Ok(pos);
                }
                Err(err) => self.reject(&err)?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    fn play(input: &str, game: &Game) -> (Result<Position, PlayerError>, String) {
        let mut human = HumanPlayer::new("player", input.as_bytes(), Vec::new());
        let result = human.get_move(game);
        let output = String::from_utf8(human.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate(" 2\n"), Ok(2));
        assert_eq!(parse_coordinate("-1"), Ok(-1));
        assert_eq!(
            parse_coordinate("two"),
            Err(InputError::NotANumber("two".to_string()))
        );
    }

    #[test]
    fn test_valid_input_returns_position() {
        let game = Game::new(Player::X);
        let (result, output) = play("1\n2\n", &game);
        assert_eq!(result.unwrap(), Position::MiddleRight);
        assert_eq!(output, "Enter row (0-2): Enter column (0-2): ");
    }

    #[test]
    fn test_non_numeric_row_reprompts_without_asking_column() {
        let game = Game::new(Player::X);
        let (result, output) = play("a\n0\n0\n", &game);
        assert_eq!(result.unwrap(), Position::TopLeft);
        assert_eq!(
            output,
            "Enter row (0-2): Invalid input. Please enter numbers.\n\
             Enter row (0-2): Enter column (0-2): "
        );
    }

    #[test]
    fn test_out_of_range_and_occupied_reprompt() {
        let mut game = Game::new(Player::X);
        game.apply_move(Player::X, 0, 0).unwrap();
        let (result, output) = play("3\n0\n-1\n1\n0\n0\n2\n2\n", &game);
        assert_eq!(result.unwrap(), Position::BottomRight);
        assert_eq!(output.matches(INVALID_MOVE_MESSAGE).count(), 3);
        assert!(!output.contains(INVALID_INPUT_MESSAGE));
    }

    #[test]
    fn test_parse_coordinate_digit_separators() {
        assert_eq!(parse_coordinate("1_0"), Ok(10));
        assert!(matches!(parse_coordinate("_1"), Err(InputError::NotANumber(_))));
        assert!(matches!(parse_coordinate("1__0"), Err(InputError::NotANumber(_))));
        assert!(matches!(parse_coordinate("1_"), Err(InputError::NotANumber(_))));
    }

    #[test]
    fn test_huge_integers_are_invalid_moves() {
        assert_eq!(parse_coordinate("99999999999999999999"), Ok(i64::MAX));
        assert_eq!(parse_coordinate("-99999999999999999999"), Ok(i64::MIN));

        let game = Game::new(Player::X);
        let (result, output) = play("99999999999999999999\n0\n1_0\n0\n0\n0\n", &game);
        assert_eq!(result.unwrap(), Position::TopLeft);
        assert_eq!(
            output,
            "Enter row (0-2): Enter column (0-2): Invalid move. Try again.\n\
             Enter row (0-2): Enter column (0-2): Invalid move. Try again.\n\
             Enter row (0-2): Enter column (0-2): "
        );
        assert!(!output.contains(INVALID_INPUT_MESSAGE));
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let game = Game::new(Player::X);
        let (result, _) = play("1\n", &game);
        assert!(matches!(result, Err(PlayerError::InputClosed)));
    }

    #[test]
    fn test_input_error_classification() {
        assert!(!InputError::NotANumber("x".into()).is_invalid_move());
        assert!(InputError::OffBoard { row: -1, col: 0 }.is_invalid_move());
        assert!(InputError::from(MoveError::SquareOccupied(Position::Center)).is_invalid_move());
    }
}
