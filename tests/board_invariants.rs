//! Property-based tests for board and move generation invariants

use checkers::rules::{generate_moves, legal_moves, legal_targets};
use checkers::{Board, Cell, Move, Pos, Side, BOARD_SIZE};
use proptest::prelude::*;

/// Play `choices.len()` plies, picking each move by index, stopping early
/// when the side to move is stuck or the game is over.
fn play_random(choices: &[usize]) -> Board {
    let mut board = Board::new();
    for &choice in choices {
        if board.is_game_over() {
            break;
        }
        let moves = legal_moves(&board, board.turn());
        if moves.is_empty() {
            break;
        }
        assert!(board.make_move(moves[choice % moves.len()]));
    }
    board
}

fn random_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(any::<usize>(), 0..80).prop_map(|choices| play_random(&choices))
}

proptest! {
    #[test]
    fn test_counts_match_grid(board in random_board()) {
        prop_assert_eq!(board.player_count(), board.count_on_grid(Side::Player));
        prop_assert_eq!(board.ai_count(), board.count_on_grid(Side::Ai));
    }

    #[test]
    fn test_captures_credit_the_capturer(board in random_board()) {
        prop_assert_eq!(board.player_score() + board.ai_count(), 12);
        prop_assert_eq!(board.ai_score() + board.player_count(), 12);
    }

    #[test]
    fn test_pieces_stay_on_dark_squares(board in random_board()) {
        for side in [Side::Player, Side::Ai] {
            for pos in board.pieces(side) {
                prop_assert!(pos.is_dark(), "{} piece on light square {}", side.name(), pos);
            }
        }
    }

    #[test]
    fn test_off_board_destination_never_legal(
        board in random_board(),
        from_row in 0i32..8,
        from_col in 0i32..8,
        to_row in -3i32..11,
        to_col in -3i32..11,
    ) {
        prop_assume!(!Pos::is_valid(to_row, to_col));
        prop_assert!(!board.is_legal_move(from_row, from_col, to_row, to_col));

        let mut copy = board.clone();
        prop_assert!(!copy.apply_move(from_row, from_col, to_row, to_col));
        prop_assert_eq!(copy, board);
    }

    #[test]
    fn test_generated_moves_are_legal_and_ordered(board in random_board()) {
        for side in [Side::Player, Side::Ai] {
            let generated = generate_moves(&board, side);

            let first_step = generated.iter().position(|(_, mv)| !mv.is_capture());
            if let Some(first_step) = first_step {
                prop_assert!(generated[first_step..].iter().all(|(_, mv)| !mv.is_capture()));
            }

            for (child, mv) in &generated {
                prop_assert!(board.is_legal(*mv));
                prop_assert_eq!(board.get(mv.from).side(), Some(side));

                let mut expected = board.clone();
                prop_assert!(expected.make_move(*mv));
                prop_assert_eq!(child, &expected);
            }
        }
    }

    #[test]
    fn test_generator_finds_every_legal_move(board in random_board()) {
        for side in [Side::Player, Side::Ai] {
            let mut brute = Vec::new();
            for from in board.pieces(side) {
                for row in 0..BOARD_SIZE as u8 {
                    for col in 0..BOARD_SIZE as u8 {
                        let mv = Move::new(from, Pos::new(row, col));
                        if board.is_legal(mv) {
                            brute.push(mv);
                        }
                    }
                }
            }

            let mut generated = legal_moves(&board, side);
            prop_assert_eq!(generated.len(), brute.len());
            generated.sort_by_key(|mv| mv.coords());
            brute.sort_by_key(|mv| mv.coords());
            prop_assert_eq!(generated, brute);
        }
    }

    #[test]
    fn test_targets_match_moves_from_square(board in random_board()) {
        let side = board.turn();
        for from in board.pieces(side) {
            let from_moves: Vec<Pos> = legal_moves(&board, side)
                .into_iter()
                .filter(|mv| mv.from == from)
                .map(|mv| mv.to)
                .collect();
            prop_assert_eq!(legal_targets(&board, from), from_moves);
        }
    }

    #[test]
    fn test_display_parse_keeps_grid(board in random_board()) {
        let parsed: Board = board.to_string().parse().unwrap();
        for side in [Side::Player, Side::Ai] {
            prop_assert_eq!(parsed.pieces(side).collect::<Vec<_>>(), board.pieces(side).collect::<Vec<_>>());
        }
    }
}

#[test]
fn test_directionality_example() {
    let mut board = Board::empty();
    board.place_piece(Pos::new(5, 2), Cell::PlayerMan);

    assert!(!board.is_legal_move(5, 2, 6, 1));
    assert!(board.is_legal_move(5, 2, 4, 1));
}

#[test]
fn test_capture_example() {
    let mut board = Board::empty();
    board.place_piece(Pos::new(2, 3), Cell::AiMan);
    board.place_piece(Pos::new(3, 4), Cell::PlayerMan);
    board.place_piece(Pos::new(7, 0), Cell::PlayerMan);
    board.set_turn(Side::Ai);

    assert!(board.apply_move(2, 3, 4, 5));
    assert_eq!(board.get(Pos::new(3, 4)), Cell::Empty);
    assert_eq!(board.get(Pos::new(4, 5)), Cell::AiMan);
    assert_eq!(board.ai_score(), 1);
    assert_eq!(board.player_count(), 1);
    assert_eq!(board.turn(), Side::Player);
}
