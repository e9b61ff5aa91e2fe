//! Minimax search with alpha-beta pruning
//!
//! Depth-limited, depth-first search over successor boards produced by the
//! move generator. The AI is always the maximizing side. Every node works on
//! its own copy of the board, so nothing is undone on the way back up.
//!
//! # Example
//!
//! ```
//! use checkers::board::{Board, Side};
//! use checkers::search::{search, SearchStats};
//!
//! let mut board = Board::new();
//! assert!(board.apply_move(5, 2, 4, 3));
//!
//! let mut stats = SearchStats::new();
//! let result = search(&board, Side::Ai, 3, &mut stats);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {}", best_move);
//! }
//! ```

use std::time::Instant;

use crate::board::{Board, Move, Side};
use crate::eval::evaluate;
use crate::rules::generate_moves;

use super::SearchStats;

/// Infinity score for alpha-beta bounds. Larger than any evaluation.
pub const INF: i32 = 1_000_000;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when the side cannot move or the game is over
    pub best_move: Option<Move>,
    /// Minimax value of the position (positive favors the AI)
    pub score: i32,
    /// Depth searched
    pub depth: i8,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Top-level search for `side`.
///
/// Resets `stats`, runs [`alpha_beta`] with a full window and records the
/// wall-clock time. Depths below 1 just evaluate the board.
pub fn search(board: &Board, side: Side, depth: i8, stats: &mut SearchStats) -> SearchResult {
    *stats = SearchStats::new();
    let start = Instant::now();

    let (best_move, score) = alpha_beta(board, depth, -INF, INF, side == Side::Ai, stats);

    stats.elapsed = start.elapsed();
    SearchResult {
        best_move,
        score,
        depth: depth.max(0),
        stats: *stats,
    }
}

/// Recursive minimax with alpha-beta pruning.
///
/// `maximizing` selects the side to generate moves for: `true` is the AI.
/// Returns the best move at this node (first one found on ties) and its
/// score. Positions at depth 0, with a side out of pieces, or where the side
/// to move is blocked are scored statically.
pub fn alpha_beta(
    board: &Board,
    depth: i8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    stats: &mut SearchStats,
) -> (Option<Move>, i32) {
    if depth <= 0 || board.is_game_over() {
        return (None, evaluate(board));
    }

    let moves = generate_moves(board, side_for(maximizing));
    stats.nodes_expanded += moves.len() as u64;
    if moves.is_empty() {
        return (None, evaluate(board));
    }

    let mut best_move = None;

    if maximizing {
        let mut best_score = -INF;
        for (child, mv) in &moves {
            let (_, score) = alpha_beta(child, depth - 1, alpha, beta, false, stats);
            if score > best_score {
                best_score = score;
                best_move = Some(*mv);
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                stats.prunes += 1;
                break;
            }
        }
        (best_move, best_score)
    } else {
        let mut best_score = INF;
        for (child, mv) in &moves {
            let (_, score) = alpha_beta(child, depth - 1, alpha, beta, true, stats);
            if score < best_score {
                best_score = score;
                best_move = Some(*mv);
            }
            beta = beta.min(score);
            if beta <= alpha {
                stats.prunes += 1;
                break;
            }
        }
        (best_move, best_score)
    }
}

/// Plain minimax over the same tree, without pruning.
///
/// Visits every node, so it is only practical at shallow depth. Used to
/// measure how much work pruning saves and to cross-check results.
pub fn minimax(
    board: &Board,
    depth: i8,
    maximizing: bool,
    stats: &mut SearchStats,
) -> (Option<Move>, i32) {
    if depth <= 0 || board.is_game_over() {
        return (None, evaluate(board));
    }

    let moves = generate_moves(board, side_for(maximizing));
    stats.nodes_expanded += moves.len() as u64;
    if moves.is_empty() {
        return (None, evaluate(board));
    }

    let mut best_move = None;
    let mut best_score = if maximizing { -INF } else { INF };
    for (child, mv) in &moves {
        let (_, score) = minimax(child, depth - 1, !maximizing, stats);
        let better = if maximizing { score > best_score } else { score < best_score };
        if better {
            best_score = score;
            best_move = Some(*mv);
        }
    }
    (best_move, best_score)
}

#[inline]
fn side_for(maximizing: bool) -> Side {
    if maximizing {
        Side::Ai
    } else {
        Side::Player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Pos};

    fn opened_board() -> Board {
        let mut board = Board::new();
        assert!(board.apply_move(5, 2, 4, 3));
        board
    }

    #[test]
    fn test_search_returns_legal_ai_move() {
        let board = opened_board();
        let mut stats = SearchStats::new();

        let result = search(&board, Side::Ai, 3, &mut stats);
        let mv = result.best_move.expect("AI has moves");

        let mut after = board.clone();
        assert!(after.make_move(mv));
        assert_eq!(board.get(mv.from), Cell::AiMan);
        assert!(stats.nodes_expanded > 0);
        assert_eq!(result.stats, stats);
    }

    #[test]
    fn test_depth_zero_just_evaluates() {
        let board = opened_board();
        let mut stats = SearchStats::new();

        let (mv, score) = alpha_beta(&board, 0, -INF, INF, true, &mut stats);
        assert_eq!(mv, None);
        assert_eq!(score, evaluate(&board));
        assert_eq!(stats.nodes_expanded, 0);

        let (mv, score) = alpha_beta(&board, -3, -INF, INF, true, &mut stats);
        assert_eq!(mv, None);
        assert_eq!(score, evaluate(&board));
    }

    #[test]
    fn test_terminal_position_is_not_expanded() {
        let mut board = Board::empty();
        board.place_piece(Pos::new(2, 3), Cell::AiMan);
        board.set_turn(Side::Ai);
        let mut stats = SearchStats::new();

        let result = search(&board, Side::Ai, 5, &mut stats);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, evaluate(&board));
        assert_eq!(stats.nodes_expanded, 0);
        assert_eq!(stats.prunes, 0);
    }

    #[test]
    fn test_blocked_side_falls_back_to_evaluation() {
        let mut board = Board::empty();
        board.place_piece(Pos::new(7, 0), Cell::AiMan);
        board.place_piece(Pos::new(4, 3), Cell::PlayerMan);
        board.set_turn(Side::Ai);
        let mut stats = SearchStats::new();

        let result = search(&board, Side::Ai, 4, &mut stats);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, evaluate(&board));
    }

    #[test]
    fn test_takes_free_capture() {
        let mut board = Board::empty();
        board.place_piece(Pos::new(2, 3), Cell::AiMan);
        board.place_piece(Pos::new(3, 4), Cell::PlayerMan);
        board.place_piece(Pos::new(7, 0), Cell::PlayerMan);
        board.set_turn(Side::Ai);
        let mut stats = SearchStats::new();

        // Jumping wins the player's advanced man for free
        let result = search(&board, Side::Ai, 1, &mut stats);
        assert_eq!(result.best_move, Some(Move::from_coords(2, 3, 4, 5)));
    }

    #[test]
    fn test_ties_go_to_first_generated_move() {
        // Two AI men whose steps score identically at depth 1
        let mut board = Board::empty();
        board.place_piece(Pos::new(0, 3), Cell::AiMan);
        board.place_piece(Pos::new(7, 0), Cell::PlayerMan);
        board.set_turn(Side::Ai);
        let mut stats = SearchStats::new();

        // (0,3) -> (1,2) and (1,4): both land on even columns, worth row 1
        let result = search(&board, Side::Ai, 1, &mut stats);
        assert_eq!(result.best_move, Some(Move::from_coords(0, 3, 1, 2)));
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_matches_plain_minimax() {
        let mut board = opened_board();
        assert!(board.apply_move(2, 5, 3, 4));

        for depth in 1..=4 {
            for side in [Side::Player, Side::Ai] {
                let mut pruned = SearchStats::new();
                let mut full = SearchStats::new();
                let maximizing = side == Side::Ai;

                let expected = minimax(&board, depth, maximizing, &mut full);
                let got = alpha_beta(&board, depth, -INF, INF, maximizing, &mut pruned);

                assert_eq!(got, expected, "depth {depth}, side {side:?}");
                assert!(pruned.nodes_expanded <= full.nodes_expanded);
            }
        }
    }

    #[test]
    fn test_pruning_happens_at_default_depth() {
        let board = opened_board();
        let mut stats = SearchStats::new();

        search(&board, Side::Ai, 5, &mut stats);
        assert!(stats.prunes > 0);
        assert!(stats.elapsed.as_nanos() > 0);
    }

    #[test]
    fn test_search_resets_stats() {
        let board = opened_board();
        let mut stats = SearchStats {
            nodes_expanded: 1_000_000,
            prunes: 1_000_000,
            ..SearchStats::default()
        };

        search(&board, Side::Ai, 2, &mut stats);
        assert!(stats.nodes_expanded < 1_000);
        assert!(stats.prunes < 1_000);
    }
}
