//! Evaluation module for checkers positions
//!
//! A single advancement heuristic scored from the AI's point of view.
//! It does not weigh material or mobility directly: a captured man simply
//! stops contributing.

pub mod heuristic;

pub use heuristic::{evaluate, side_advancement};
