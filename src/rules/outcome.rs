//! Game outcome detection

use crate::board::{Board, Side};

use super::movegen::has_legal_move;

/// Why the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// The loser has no pieces left
    AllCaptured,
    /// The loser is to move, still has pieces, but no legal move
    Blocked,
}

/// Finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Side,
    pub reason: WinReason,
}

/// Terminal check used by the board: a side with zero pieces has lost.
#[must_use]
pub fn check_outcome(board: &Board) -> Option<GameOutcome> {
    board.winner().map(|winner| GameOutcome {
        winner,
        reason: WinReason::AllCaptured,
    })
}

/// Terminal check for front-ends: also ends the game when the side to move
/// cannot move. The search does not use this rule and evaluates blocked
/// positions statically.
#[must_use]
pub fn check_outcome_with_blocking(board: &Board) -> Option<GameOutcome> {
    if let Some(outcome) = check_outcome(board) {
        return Some(outcome);
    }

    let to_move = board.turn();
    if has_legal_move(board, to_move) {
        None
    } else {
        Some(GameOutcome {
            winner: to_move.opponent(),
            reason: WinReason::Blocked,
        })
    }
}
