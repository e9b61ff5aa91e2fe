//! Game rules for checkers (men only)
//!
//! This module implements:
//! - Legal move generation with captures ordered first
//! - Game outcome detection (side eliminated or blocked)
//!
//! Single-move legality and move application live on [`Board`](crate::Board).

pub mod movegen;
pub mod outcome;

// Re-exports for convenient access
pub use movegen::{generate_moves, has_legal_move, legal_moves, legal_targets, DIRECTIONS};
pub use outcome::{check_outcome, check_outcome_with_blocking, GameOutcome, WinReason};
