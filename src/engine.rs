//! Main AI engine
//!
//! Thin facade over the alpha-beta search: it holds the configured depth,
//! runs a search for the requested side and keeps running totals of the
//! search statistics for the current game.
//!
//! # Example
//!
//! ```
//! use checkers::{AIEngine, Board, Side};
//!
//! // Use smaller depth for faster example
//! let mut engine = AIEngine::with_depth(3);
//! let mut board = Board::new();
//! assert!(board.apply_move(5, 2, 4, 3));
//!
//! let result = engine.get_move_with_stats(&board, Side::Ai);
//! println!("Best move: {:?}", result.best_move);
//! println!("Nodes: {} Prunes: {}", result.nodes, result.prunes);
//! println!("Time: {}ms", result.time_ms);
//! ```

use crate::board::{Board, Move, Side};
use crate::search::{search, SearchStats};

/// Search depth used when none is configured (plies)
pub const DEFAULT_DEPTH: i8 = 5;

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Minimax value of the position (positive favors the AI)
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of moves enumerated
    pub nodes: u64,
    /// Number of alpha-beta cutoffs
    pub prunes: u64,
    /// Full statistics of this search
    pub stats: SearchStats,
}

impl MoveResult {
    fn from_search(best_move: Option<Move>, score: i32, stats: SearchStats) -> Self {
        Self {
            best_move,
            score,
            time_ms: stats.elapsed.as_millis() as u64,
            nodes: stats.nodes_expanded,
            prunes: stats.prunes,
            stats,
        }
    }
}

/// Main AI Engine for checkers.
///
/// The depth is fixed per engine (no iterative deepening, no time budget).
///
/// # Example
///
/// ```
/// use checkers::{AIEngine, Board, Side};
///
/// let mut engine = AIEngine::with_depth(2);
///
/// let mut board = Board::new();
/// assert!(board.apply_move(5, 0, 4, 1));
/// if let Some(mv) = engine.get_move(&board, Side::Ai) {
///     assert!(board.make_move(mv));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AIEngine {
    /// Search depth in plies
    max_depth: i8,
    /// Totals over every search since creation or the last reset
    session: SearchStats,
}

impl AIEngine {
    /// Create a new AI engine searching `DEFAULT_DEPTH` plies.
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create an AI engine with a custom search depth.
    ///
    /// Depths below 1 make the engine return no move and the static
    /// evaluation of the position.
    #[must_use]
    pub fn with_depth(max_depth: i8) -> Self {
        Self {
            max_depth,
            session: SearchStats::new(),
        }
    }

    /// Get the best move for `side`, or `None` if it cannot move or the game
    /// is over.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, side: Side) -> Option<Move> {
        self.get_move_with_stats(board, side).best_move
    }

    /// Get the best move for `side` along with the search statistics.
    ///
    /// The AI maximizes, the Player minimizes, so the same engine can
    /// suggest moves for either side.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, side: Side) -> MoveResult {
        let mut stats = SearchStats::new();
        let result = search(board, side, self.max_depth, &mut stats);
        self.session.merge(&stats);
        MoveResult::from_search(result.best_move, result.score, stats)
    }

    /// Set the search depth.
    pub fn set_max_depth(&mut self, depth: i8) {
        self.max_depth = depth;
    }

    /// Get the current search depth.
    #[must_use]
    pub fn max_depth(&self) -> i8 {
        self.max_depth
    }

    /// Statistics accumulated over this engine's searches
    #[must_use]
    pub fn session_stats(&self) -> &SearchStats {
        &self.session
    }

    /// Forget accumulated statistics, e.g. when a new game starts
    pub fn reset_session(&mut self) {
        self.session = SearchStats::new();
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Pos};

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.max_depth(), DEFAULT_DEPTH);
        assert_eq!(engine.session_stats(), &SearchStats::default());
    }

    #[test]
    fn test_engine_set_depth() {
        let mut engine = AIEngine::new();
        engine.set_max_depth(3);
        assert_eq!(engine.max_depth(), 3);
    }

    #[test]
    fn test_engine_default() {
        let engine = AIEngine::default();
        assert_eq!(engine.max_depth(), 5);
    }

    #[test]
    fn test_engine_replies_after_opening() {
        let mut board = Board::new();
        assert!(board.apply_move(5, 2, 4, 3));

        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&board, Side::Ai);
        let mv = result.best_move.expect("AI should have a move");

        assert_eq!(board.get(mv.from), Cell::AiMan);
        assert!(board.make_move(mv));
        assert_eq!(board.turn(), Side::Player);
        assert!(result.nodes > 0);
        assert_eq!(result.nodes, result.stats.nodes_expanded);
        assert_eq!(result.prunes, result.stats.prunes);
    }

    #[test]
    fn test_engine_suggests_for_player() {
        let board = Board::new();
        let mut engine = AIEngine::with_depth(3);

        let mv = engine.get_move(&board, Side::Player).expect("player can move");
        assert_eq!(board.get(mv.from), Cell::PlayerMan);
        assert!(board.is_legal(mv));
    }

    #[test]
    fn test_engine_no_move_when_game_over() {
        let mut board = Board::empty();
        board.place_piece(Pos::new(3, 2), Cell::AiMan);
        board.set_turn(Side::Ai);

        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&board, Side::Ai);
        assert!(result.best_move.is_none());
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_session_stats_accumulate_and_reset() {
        let mut board = Board::new();
        assert!(board.apply_move(5, 2, 4, 3));
        let mut engine = AIEngine::with_depth(3);

        let first = engine.get_move_with_stats(&board, Side::Ai);
        let second = engine.get_move_with_stats(&board, Side::Ai);
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(
            engine.session_stats().nodes_expanded,
            first.nodes + second.nodes
        );

        engine.reset_session();
        assert_eq!(engine.session_stats().nodes_expanded, 0);
    }
}
