//! Formatting utilities for terminal output

use crate::core::{CellColor, KeyHint};
use crate::engine::{Cell, GameEngine, Status};
use colored::{ColoredString, Colorize};

/// Three-column label for a grid cell: the uppercase letter padded by spaces
#[must_use]
pub fn cell_label(cell: Cell) -> String {
    cell.map_or_else(|| " · ".to_string(), |letter| {
        format!(" {} ", char::from(letter).to_ascii_uppercase())
    })
}

/// Grid cell with its feedback colour as background
#[must_use]
pub fn paint_cell(cell: Cell, color: CellColor) -> ColoredString {
    let label = cell_label(cell);
    match color {
        CellColor::Correct => label.black().on_green().bold(),
        CellColor::PresentElsewhere => label.black().on_yellow().bold(),
        CellColor::Absent => label.white().on_bright_black(),
        CellColor::Default => label.bright_white(),
    }
}

/// Keyboard key tinted by its hint
#[must_use]
pub fn paint_key(letter: char, hint: KeyHint) -> ColoredString {
    let label = letter.to_ascii_uppercase().to_string();
    match hint {
        KeyHint::Correct => label.black().on_green().bold(),
        KeyHint::PresentElsewhere => label.black().on_yellow().bold(),
        KeyHint::Absent => label.bright_black(),
        KeyHint::Unused => label.white(),
    }
}

/// One-line summary of how the game ended, `None` while still playing
#[must_use]
pub fn outcome_line(game: &GameEngine) -> Option<String> {
    match game.status() {
        Status::Playing => None,
        Status::Won => {
            let tries = game.completed_rows();
            Some(format!(
                "Hooray, you won! Solved in {tries}/{} {}",
                game.max_tries(),
                if tries == 1 { "guess" } else { "guesses" }
            ))
        }
        Status::Lost => Some(format!(
            "Meh. Try again tomorrow! The word was {}",
            game.word().text().to_uppercase()
        )),
    }
}
