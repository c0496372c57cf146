//! Wordle
//!
//! A single-player word-guessing game: find the hidden word within a fixed
//! number of tries, with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{CellColor, Key, KeyHint};
//! use wordle_game::engine::{GameConfig, GameEngine, Status};
//!
//! let mut game = GameEngine::initialize(&["hello"], GameConfig::default()).unwrap();
//!
//! for key in Key::typing("world").chain([Key::Submit]) {
//!     game.submit_key(key);
//! }
//! assert_eq!(game.cell_color(0, 1), CellColor::PresentElsewhere);
//! assert_eq!(game.keyboard_classification('w'), KeyHint::Absent);
//! assert_eq!(game.status(), Status::Playing);
//! ```

// Core domain types
pub mod core;

// Game state and rules
pub mod engine;

// Word lists
pub mod wordlists;

// Line-based front ends
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
