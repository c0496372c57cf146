//! Display functions for the line-based front ends

use super::formatters::{outcome_line, paint_cell, paint_key};
use crate::core::KeyHint;
use crate::engine::{GameEngine, KEYBOARD_ROWS, Status};
use colored::Colorize;
use std::io::{self, Write};

/// Print every row of the grid with feedback colours
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_board<W: Write>(out: &mut W, game: &GameEngine) -> io::Result<()> {
    for (row, cells) in game.grid().rows().enumerate() {
        write!(out, "  ")?;
        for (col, &cell) in cells.iter().enumerate() {
            write!(out, "{}", paint_cell(cell, game.cell_color(row, col)))?;
            if col + 1 < cells.len() {
                write!(out, " ")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Print the keyboard with each letter tinted by its best hint
///
/// Letters known to be absent are also listed on a line of their own.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_keyboard<W: Write>(out: &mut W, game: &GameEngine) -> io::Result<()> {
    let hints = game.keyboard();
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        write!(out, "  {}", " ".repeat(indent))?;
        for letter in row.chars() {
            write!(out, "{} ", paint_key(letter, hints.hint(letter)))?;
        }
        writeln!(out)?;
    }

    let ruled_out: Vec<String> = hints
        .letters_with(KeyHint::Absent)
        .map(|letter| letter.to_ascii_uppercase().to_string())
        .collect();
    if !ruled_out.is_empty() {
        writeln!(out, "  {}", format!("Ruled out: {}", ruled_out.join(" ")).dimmed())?;
    }
    Ok(())
}

/// Print the end-of-game banner and the share text
///
/// Does nothing while the game is still being played.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_game_over<W: Write>(out: &mut W, game: &GameEngine) -> io::Result<()> {
    let Some(line) = outcome_line(game) else {
        return Ok(());
    };

    writeln!(out, "\n{}", "═".repeat(40).bright_cyan())?;
    if game.status() == Status::Won {
        writeln!(out, "  {}", line.bright_green().bold())?;
    } else {
        writeln!(out, "  {}", line.bright_red().bold())?;
    }
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    writeln!(out, "\nShare your score:\n{}\n", game.share_text())?;
    Ok(())
}
