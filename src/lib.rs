//! Checkers AI Engine
//!
//! A two-player checkers engine on the standard 8x8 board:
//! - 12 men per side on the dark squares
//! - Men move one diagonal step forward, or jump an adjacent opposing piece
//! - A side with no pieces left loses
//! - The AI picks its moves with depth-limited minimax and alpha-beta pruning
//!
//! Kings, multi-jumps and draw detection are not part of this engine.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, move legality and move application
//! - [`rules`]: Move generation and game outcome
//! - [`eval`]: Static evaluation (advancement heuristic)
//! - [`search`]: Minimax with alpha-beta pruning and search statistics
//! - [`engine`]: AI engine wrapping the search with a configured depth
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use checkers::{AIEngine, Board, Side};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_depth(3);
//!
//! // Player opens
//! assert!(board.apply_move(5, 2, 4, 3));
//!
//! // AI responds
//! if let Some(mv) = engine.get_move(&board, Side::Ai) {
//!     board.make_move(mv);
//!     println!("AI plays {}", mv);
//! }
//! println!("{}", board);
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Move, Pos, Side, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult, DEFAULT_DEPTH};
pub use rules::{GameOutcome, WinReason};
pub use search::SearchStats;
