//! Property tests over arbitrary boards.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strictly_console::{
    Board, LINES, MoveError, Player, SamplingStrategy, Square, apply_move, check_draw,
    check_win, select_random_move,
};

fn square(code: u8) -> Square {
    match code {
        1 => Square::Occupied(Player::X),
        2 => Square::Occupied(Player::O),
        _ => Square::Empty,
    }
}

fn arb_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(0u8..3).prop_map(|codes| Board::from_squares(codes.map(square)))
}

fn arb_strategy() -> impl Strategy<Value = SamplingStrategy> {
    prop_oneof![
        Just(SamplingStrategy::Rejection),
        Just(SamplingStrategy::Uniform),
    ]
}

proptest! {
    #[test]
    fn win_iff_some_line_is_all_one_mark(board in arb_board()) {
        for player in [Player::X, Player::O] {
            let expected = LINES
                .iter()
                .any(|line| line.iter().all(|&pos| board.get(pos) == Square::Occupied(player)));
            prop_assert_eq!(check_win(&board, player), expected);
        }
    }

    #[test]
    fn draw_iff_no_empty_squares(board in arb_board()) {
        let has_empty = board.squares().iter().any(|s| *s == Square::Empty);
        prop_assert_eq!(check_draw(&board), !has_empty);
    }

    #[test]
    fn apply_move_never_overwrites(board in arb_board(), row in 0usize..5, col in 0usize..5) {
        match apply_move(&board, Player::O, row, col) {
            Ok(next) => {
                prop_assert!(row < 3 && col < 3);
                prop_assert_eq!(next.occupied_count(), board.occupied_count() + 1);
            }
            Err(MoveError::OutOfRange { .. }) => prop_assert!(row > 2 || col > 2),
            Err(MoveError::SquareOccupied(pos)) => prop_assert!(!board.is_empty(pos)),
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }
    }

    #[test]
    fn random_move_is_always_open(
        board in arb_board(),
        seed in any::<u64>(),
        strategy in arb_strategy(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        match select_random_move(&board, &mut rng, strategy) {
            Some(pos) => prop_assert!(board.is_empty(pos)),
            None => prop_assert!(check_draw(&board)),
        }
    }
}
