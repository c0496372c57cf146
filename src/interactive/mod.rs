//! Interactive TUI front end
//!
//! Renders a [`GameEngine`](crate::engine::GameEngine) and feeds it key
//! presses from the terminal.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Overlay, Screen, run_tui};
pub use rendering::ui;
