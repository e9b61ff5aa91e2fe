//! Advancement heuristic
//!
//! Each man earns points from its row, read from one end of the board or
//! the other depending on the parity of its column. Player men score
//! `7 - row` on even columns and `row` on odd columns; AI men score `row`
//! on even columns and `7 - row` on odd columns.

use crate::board::{Board, Side, BOARD_SIZE};

const LAST_ROW: i32 = BOARD_SIZE as i32 - 1;

/// Evaluate the board for the AI.
///
/// Positive values favor the AI, negative values favor the Player.
/// Terminal positions get no special score.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    side_advancement(board, Side::Ai) - side_advancement(board, Side::Player)
}

/// Advancement subtotal for one side
#[must_use]
pub fn side_advancement(board: &Board, side: Side) -> i32 {
    board
        .pieces(side)
        .map(|pos| {
            let row = i32::from(pos.row);
            let even_col = pos.col % 2 == 0;
            match (side, even_col) {
                (Side::Player, true) | (Side::Ai, false) => LAST_ROW - row,
                (Side::Player, false) | (Side::Ai, true) => row,
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Pos};

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::empty();
        assert_eq!(evaluate(&board), 0, "Empty board should have score 0");
    }

    #[test]
    fn test_starting_subtotals() {
        let board = Board::new();
        // Player: row 5 even cols 4 x 2, row 6 odd cols 4 x 6, row 7 even cols 4 x 0
        assert_eq!(side_advancement(&board, Side::Player), 32);
        // AI: row 0 odd cols 4 x 7, row 1 even cols 4 x 1, row 2 odd cols 4 x 5
        assert_eq!(side_advancement(&board, Side::Ai), 52);
        assert_eq!(evaluate(&board), 20);
    }

    #[test]
    fn test_single_man_scores() {
        let mut board = Board::empty();
        board.place_piece(Pos::new(3, 2), Cell::PlayerMan);
        assert_eq!(evaluate(&board), -(7 - 3));

        let mut board = Board::empty();
        board.place_piece(Pos::new(3, 4), Cell::AiMan);
        assert_eq!(evaluate(&board), 3);

        let mut board = Board::empty();
        board.place_piece(Pos::new(4, 1), Cell::PlayerMan);
        board.place_piece(Pos::new(2, 1), Cell::AiMan);
        assert_eq!(evaluate(&board), (7 - 2) - 4);
    }

    #[test]
    fn test_capture_removes_contribution() {
        let mut board = Board::empty();
        board.place_piece(Pos::new(4, 3), Cell::AiMan);
        board.place_piece(Pos::new(5, 4), Cell::PlayerMan);
        board.place_piece(Pos::new(7, 0), Cell::PlayerMan);
        board.set_turn(Side::Ai);

        let before = evaluate(&board);
        assert!(board.apply_move(4, 3, 6, 5));
        let after = evaluate(&board);

        // Lost player man at (5,4) was worth 7 - 5; AI man moved (4,3) -> (6,5)
        assert_eq!(before, (7 - 4) - ((7 - 5) + (7 - 7)));
        assert_eq!(after, (7 - 6) - (7 - 7));
    }
}
