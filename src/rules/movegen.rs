//! Legal move generation for men
//!
//! Every man of the requested side is probed in eight directions: the four
//! jumps first, then the four single steps. Jumps are collected ahead of
//! steps so the search always tries captures first. Ties in the search go
//! to the earliest move, which makes this order observable.

use crate::board::{Board, Move, Pos, Side};

/// Direction vectors in probe order: jumps, then single steps
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-2, -2),
    (-2, 2),
    (2, -2),
    (2, 2),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// All legal moves for `side`, each paired with the board it produces.
///
/// Captures come before simple moves; within each group the order is
/// row-major over pieces, then `DIRECTIONS` order. Returns an empty vector
/// when the side is blocked or has no pieces.
pub fn generate_moves(board: &Board, side: Side) -> Vec<(Board, Move)> {
    let mut jumps = Vec::new();
    let mut steps = Vec::new();

    for mv in candidate_moves(board, side) {
        let mut next = board.clone();
        if !next.make_move(mv) {
            continue;
        }
        if mv.is_capture() {
            jumps.push((next, mv));
        } else {
            steps.push((next, mv));
        }
    }

    jumps.extend(steps);
    jumps
}

/// Legal moves for `side` in generation order, without successor boards
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let (mut jumps, steps): (Vec<Move>, Vec<Move>) =
        candidate_moves(board, side).partition(|mv| mv.is_capture());
    jumps.extend(steps);
    jumps
}

/// Destinations reachable by the piece standing on `from`
pub fn legal_targets(board: &Board, from: Pos) -> Vec<Pos> {
    DIRECTIONS
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&to| board.is_legal(Move::new(from, to)))
        .collect()
}

/// Whether `side` has at least one legal move
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    candidate_moves(board, side).next().is_some()
}

/// Every on-board, legal probe for the side's men, unsorted by kind
fn candidate_moves(board: &Board, side: Side) -> impl Iterator<Item = Move> + '_ {
    board.pieces(side).flat_map(move |from| {
        DIRECTIONS
            .iter()
            .filter_map(move |&(dr, dc)| from.offset(dr, dc))
            .map(move |to| Move::new(from, to))
            .filter(move |&mv| board.is_legal(mv))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_opening_moves() {
        let board = Board::new();

        // Only the front row (5) can move: (5,0) has one step, the others two
        let player = legal_moves(&board, Side::Player);
        assert_eq!(player.len(), 7);
        assert!(player.iter().all(|mv| mv.from.row == 5 && mv.to.row == 4));

        let ai = legal_moves(&board, Side::Ai);
        assert_eq!(ai.len(), 7);
        assert!(ai.iter().all(|mv| mv.from.row == 2 && mv.to.row == 3));
    }

    #[test]
    fn test_successor_boards_match_moves() {
        let board = Board::new();
        for (next, mv) in generate_moves(&board, Side::Player) {
            assert_eq!(next.get(mv.to), Cell::PlayerMan);
            assert_eq!(next.get(mv.from), Cell::Empty);
            assert_eq!(next.turn(), Side::Ai);
        }
        // Generation never touches the source board
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_captures_come_first() {
        let mut board = Board::empty();
        board.place_piece(Pos::new(1, 0), Cell::AiMan);
        board.place_piece(Pos::new(4, 3), Cell::AiMan);
        board.place_piece(Pos::new(5, 4), Cell::PlayerMan);
        board.set_turn(Side::Ai);

        let moves = generate_moves(&board, Side::Ai);
        let kinds: Vec<bool> = moves.iter().map(|(_, mv)| mv.is_capture()).collect();

        assert_eq!(moves[0].1, Move::from_coords(4, 3, 6, 5));
        assert!(kinds[0]);
        assert!(kinds[1..].iter().all(|&capture| !capture));
        // (1,0) has one step, (4,3) has one step left and the jump right
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn test_later_capture_precedes_earlier_step() {
        let board: Board = "........
                            ........
                            ........
                            ........
                            ........
                            ........
                            ..A.....
                            .P.P....".parse().unwrap();

        let moves = legal_moves(&board, Side::Player);
        assert_eq!(
            moves,
            vec![
                Move::from_coords(7, 1, 5, 3),
                Move::from_coords(7, 3, 5, 1),
                Move::from_coords(7, 1, 6, 0),
                Move::from_coords(7, 3, 6, 4),
            ]
        );
    }

    #[test]
    fn test_generate_and_legal_moves_agree() {
        let mut board = Board::new();
        assert!(board.apply_move(5, 2, 4, 3));
        assert!(board.apply_move(2, 5, 3, 4));

        let with_boards: Vec<Move> = generate_moves(&board, Side::Player)
            .into_iter()
            .map(|(_, mv)| mv)
            .collect();
        assert_eq!(with_boards, legal_moves(&board, Side::Player));
        assert!(with_boards[0].is_capture());
    }

    #[test]
    fn test_blocked_side_has_no_moves() {
        let mut board = Board::empty();
        board.place_piece(Pos::new(0, 1), Cell::PlayerMan);
        board.place_piece(Pos::new(7, 0), Cell::AiMan);

        assert!(generate_moves(&board, Side::Player).is_empty());
        assert!(generate_moves(&board, Side::Ai).is_empty());
        assert!(!has_legal_move(&board, Side::Player));
    }

    #[test]
    fn test_legal_targets_for_selected_piece() {
        let board = Board::new();
        let targets = legal_targets(&board, Pos::new(5, 2));
        assert_eq!(targets, vec![Pos::new(4, 1), Pos::new(4, 3)]);

        assert!(legal_targets(&board, Pos::new(6, 1)).is_empty());
        assert!(legal_targets(&board, Pos::new(4, 4)).is_empty());
    }
}
