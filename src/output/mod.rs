//! Terminal output formatting
//!
//! Coloured rendering of the board, keyboard and end-of-game summary for
//! the line-based front ends.

pub mod display;
pub mod formatters;

pub use display::{write_board, write_game_over, write_keyboard};
