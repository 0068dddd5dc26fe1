use othello_board::{BOARD_SIZE, Board, BoardError, Color, DIRECTIONS, Position};
use proptest::prelude::*;
use proptest::sample::Index;

fn all_positions() -> impl Iterator<Item = Position> {
    (0..BOARD_SIZE as i32).flat_map(|r| (0..BOARD_SIZE as i32).map(move |c| Position::new(r, c)))
}

/// Plays up to `choices.len()` plies, passing whenever the side to move is
/// stuck. Returns the board and the color to move next.
fn playout(choices: &[Index]) -> (Board, Color) {
    let mut board = Board::new();
    let mut color = Color::Black;
    for choice in choices {
        if board.is_over() {
            break;
        }
        let moves = board.valid_moves(color);
        if !moves.is_empty() {
            board.place_piece(*choice.get(&moves), color).unwrap();
        }
        color = color.opponent();
    }
    (board, color)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn valid_moves_agrees_with_valid_move(choices in prop::collection::vec(any::<Index>(), 0..60)) {
        let (board, _) = playout(&choices);
        for color in [Color::Black, Color::White] {
            let expected: Vec<Position> = all_positions()
                .filter(|&p| board.valid_move(p, color))
                .collect();
            prop_assert_eq!(board.valid_moves(color), expected);
        }
        prop_assert_eq!(
            board.is_over(),
            board.valid_moves(Color::Black).is_empty() && board.valid_moves(Color::White).is_empty()
        );
    }

    #[test]
    fn placement_flips_only_bracketed_runs(
        choices in prop::collection::vec(any::<Index>(), 0..60),
        pick in any::<Index>(),
    ) {
        let (before, color) = playout(&choices);
        let moves = before.valid_moves(color);
        prop_assume!(!moves.is_empty());
        let pos = *pick.get(&moves);
        let flips = before.flips(pos, color);
        prop_assert!(!flips.is_empty());

        // Each ray's flipped cells are contiguous from `pos` and closed by a mover piece.
        let mut covered = 0;
        for dir in DIRECTIONS {
            let mut cursor = pos.offset(dir);
            let mut run = 0;
            while flips.contains(&cursor) {
                prop_assert!(before.is_mine(cursor, color.opponent()));
                run += 1;
                cursor = cursor.offset(dir);
            }
            if run > 0 {
                prop_assert!(before.is_mine(cursor, color));
            }
            covered += run;
        }
        prop_assert_eq!(covered, flips.len());

        let mut after = before;
        after.place_piece(pos, color).unwrap();
        prop_assert!(after.is_mine(pos, color));
        for &p in &flips {
            prop_assert!(after.is_mine(p, color));
        }

        let (black_before, white_before) = before.count();
        let (black_after, white_after) = after.count();
        let n = flips.len() as u8;
        match color {
            Color::Black => {
                prop_assert_eq!(black_after, black_before + 1 + n);
                prop_assert_eq!(white_after, white_before - n);
            }
            Color::White => {
                prop_assert_eq!(white_after, white_before + 1 + n);
                prop_assert_eq!(black_after, black_before - n);
            }
        }
    }

    #[test]
    fn illegal_placement_changes_nothing(
        choices in prop::collection::vec(any::<Index>(), 0..60),
        row in -2i32..10,
        col in -2i32..10,
    ) {
        let (mut board, color) = playout(&choices);
        let pos = Position::new(row, col);
        prop_assume!(!board.valid_move(pos, color));
        let before = board;

        let err = board.place_piece(pos, color).unwrap_err();

        prop_assert_eq!(err, BoardError::InvalidMove { row, col, color });
        prop_assert_eq!(board, before);
    }

    #[test]
    fn occupied_cells_stay_occupied(choices in prop::collection::vec(any::<Index>(), 0..60)) {
        let (board, _) = playout(&choices);
        let (black, white) = board.count();
        prop_assert_eq!(black as usize + white as usize + board.empty_count() as usize, 64);
        for p in [Position::new(3, 3), Position::new(3, 4), Position::new(4, 3), Position::new(4, 4)] {
            prop_assert!(board.is_occupied(p));
        }
    }
}
