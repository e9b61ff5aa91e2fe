//! Search module for the checkers AI
//!
//! Contains:
//! - Minimax with alpha-beta pruning over successor boards
//! - An unpruned minimax reference used to measure pruning gains
//! - Search statistics (moves enumerated, cutoffs, time)

pub mod alphabeta;
pub mod stats;

pub use alphabeta::{alpha_beta, minimax, search, SearchResult, INF};
pub use stats::SearchStats;
