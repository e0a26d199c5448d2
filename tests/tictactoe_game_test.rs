//! Tests for the game engine state machine.

use strictly_console::{
    Board, Game, GameStatus, Move, MoveError, Outcome, Player, Position, Square, check_draw,
    check_win,
};

fn board_from(rows: [&str; 3]) -> Board {
    let mut squares = [Square::Empty; 9];
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            squares[r * 3 + c] = match ch {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
    }
    Board::from_squares(squares)
}

#[test]
fn test_first_move_top_left() {
    let mut game = Game::new(Player::X);
    assert_eq!(game.apply_move(Player::X, 0, 0), Ok(GameStatus::AwaitingComputerMove));
    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(game.board().to_string().lines().next(), Some("X| | "));
}

#[test]
fn test_row_win() {
    let board = board_from(["XXX", "O O", "   "]);
    assert!(check_win(&board, Player::X));
    assert!(!check_win(&board, Player::O));
}

#[test]
fn test_diagonal_win() {
    let board = board_from(["OX ", "XO ", "  O"]);
    assert!(check_win(&board, Player::O));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = board_from(["XOX", "XOO", "OXX"]);
    assert!(check_draw(&board));
    assert!(!check_win(&board, Player::X));
    assert!(!check_win(&board, Player::O));
}

#[test]
fn test_turns_alternate_strictly() {
    let mut game = Game::new(Player::X);
    let script = [(0, 0), (1, 1), (0, 1), (2, 2)];
    let mut expected = Player::X;
    for (row, col) in script {
        assert_eq!(game.to_move(), Some(expected));
        game.apply_move(expected, row, col).unwrap();
        expected = expected.opponent();
    }
    assert_eq!(game.status(), GameStatus::AwaitingHumanMove);
}

#[test]
fn test_wrong_player_rejected() {
    let mut game = Game::new(Player::X);
    assert_eq!(
        game.apply_move(Player::O, 1, 1),
        Err(MoveError::WrongPlayer(Player::O))
    );
    assert!(game.history().is_empty());
}

#[test]
fn test_replay_from_history() {
    let moves = vec![
        Move::new(Player::X, Position::Center),
        Move::new(Player::O, Position::TopLeft),
        Move::new(Player::X, Position::BottomRight),
        Move::new(Player::O, Position::TopRight),
        Move::new(Player::X, Position::BottomLeft),
    ];

    let game = Game::replay(Player::X, &moves).expect("Valid replay");
    assert_eq!(game.history(), moves.as_slice());
    assert_eq!(game.to_move(), Some(Player::O));
    assert_eq!(game.status(), GameStatus::AwaitingComputerMove);
}

#[test]
fn test_replay_stops_at_first_bad_move() {
    let moves = [
        Move::new(Player::X, Position::Center),
        Move::new(Player::O, Position::Center),
    ];
    assert_eq!(
        Game::replay(Player::X, &moves),
        Err(MoveError::SquareOccupied(Position::Center))
    );
}

#[test]
fn test_draw_detection() {
    let moves = vec![
        Move::new(Player::X, Position::TopLeft),
        Move::new(Player::O, Position::Center),
        Move::new(Player::X, Position::TopRight),
        Move::new(Player::O, Position::TopCenter),
        Move::new(Player::X, Position::BottomCenter),
        Move::new(Player::O, Position::MiddleLeft),
        Move::new(Player::X, Position::MiddleRight),
        Move::new(Player::O, Position::BottomRight),
        Move::new(Player::X, Position::BottomLeft),
    ];

    let mut game = Game::replay(Player::X, &moves).expect("Valid replay");
    assert_eq!(game.status(), GameStatus::Drawn);
    assert_eq!(game.outcome(), Some(Outcome::Draw));
    assert_eq!(game.apply_move(Player::O, 0, 0), Err(MoveError::GameOver));
}
