//! Game engine
//!
//! [`GameEngine`] is the single owner of a game's state: the puzzle word, the
//! attempt grid, the cursor and the status. Front ends feed it [`Key`]s and
//! read back colours, keyboard hints and share text.
//!
//! [`Key`]: crate::core::Key

mod config;
mod error;
mod game;
mod grid;
mod keyboard;

pub use config::{DEFAULT_MAX_TRIES, DEFAULT_TITLE, GameConfig, MAX_TRIES};
pub use error::ConfigError;
pub use game::{Cursor, GameEngine, Outcome, Status, validate_word_list};
pub use grid::{Cell, Grid};
pub use keyboard::{KEYBOARD_ROWS, KeyboardHints};
