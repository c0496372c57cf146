//! Core domain types for the game
//!
//! Pure values with no I/O: validated words, key input, and the per-cell
//! feedback rules. Everything stateful lives in [`crate::engine`].

mod feedback;
mod key;
mod word;

pub use feedback::{CellColor, KeyHint, ScoringRule, row_to_emoji, score_row};
pub use key::Key;
pub use word::{Word, WordError};
