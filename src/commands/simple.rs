//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line.

use super::enter_guess;
use crate::engine::{GameConfig, GameEngine, Outcome};
use crate::output::{write_board, write_game_over, write_keyboard};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the simple mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if the word list cannot start a game or on I/O failure.
pub fn run_simple(words: &[String], config: &GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(words, config, stdin.lock(), &mut stdout.lock())
}

/// Run the simple mode on any reader and writer
///
/// Ends on `:quit` or end of input. A line as long as the puzzle word is
/// always played as a guess, so bare `quit`, `exit` and `new` only act as
/// commands when they cannot be one.
///
/// # Errors
///
/// Returns an error if the word list cannot start a game or on I/O failure.
pub fn run_simple_with<R: BufRead, W: Write>(
    words: &[String],
    config: &GameConfig,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════╗")?;
    writeln!(out, "║           W O R D L E                ║")?;
    writeln!(out, "╚══════════════════════════════════════╝\n")?;
    writeln!(out, "Type a guess and press Enter.")?;
    writeln!(out, "Commands: ':quit' to exit, ':new' for a new word\n")?;

    let mut game = new_game(words, config)?;

    loop {
        write_board(out, &game)?;
        writeln!(out)?;
        write_keyboard(out, &game)?;

        if game.status().is_over() {
            write_game_over(out, &game)?;

            match prompt(&mut input, out, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    game = new_game(words, config)?;
                    writeln!(out, "\n🔄 New game started!\n")?;
                    continue;
                }
                _ => break,
            }
        }

        let label = format!(
            "\nGuess {}/{}",
            game.completed_rows() + 1,
            game.max_tries()
        );
        let Some(line) = prompt(&mut input, out, &label)? else {
            break;
        };

        match command(&line, game.word_len()) {
            Some("new") => {
                game = new_game(words, config)?;
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            Some(_) => break,
            None if line.chars().count() != game.word_len() => {
                writeln!(
                    out,
                    "{}",
                    format!("❌ Guess must be {} letters", game.word_len()).red()
                )?;
            }
            None => {
                if enter_guess(&mut game, &line) == Outcome::Ignored {
                    writeln!(out, "{}", "❌ Letters only, please".red())?;
                }
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Command named by `line`, if any
fn command(line: &str, word_len: usize) -> Option<&str> {
    let name = match line.strip_prefix(':') {
        Some(name) => name,
        None if line.chars().count() != word_len => line,
        None => return None,
    };
    matches!(name, "quit" | "exit" | "new").then_some(name)
}

fn new_game(words: &[String], config: &GameConfig) -> Result<GameEngine> {
    let game = GameEngine::initialize(words, config.clone()).context("cannot start a game")?;
    debug!(letters = game.word_len(), "simple mode game ready");
    Ok(game)
}

/// Prompt and read one trimmed, lowercased line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(words: &[&str], input: &str) -> Result<String> {
        let words: Vec<String> = words.iter().map(|w| (*w).to_string()).collect();
        let mut out = Vec::new();
        run_simple_with(&words, &GameConfig::default(), input.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_game_prints_share_text() {
        let text = play(&["hello"], "world\nhello\nno\n").unwrap();
        assert!(text.contains("Hooray, you won!"));
        assert!(text.contains("Wordle\n⬛🟨⬛🟩⬛\n🟩🟩🟩🟩🟩"));
        assert!(text.contains("Thanks for playing"));
    }

    #[test]
    fn wrong_length_is_reported() {
        let text = play(&["hello"], "abc\nquit\n").unwrap();
        assert!(text.contains("Guess must be 5 letters"));
        assert!(text.contains("Guess 1/6"));
    }

    #[test]
    fn invalid_letters_are_reported() {
        let text = play(&["hello"], "he11o\nquit\n").unwrap();
        assert!(text.contains("Letters only"));
    }

    #[test]
    fn end_of_input_quits() {
        let text = play(&["hello"], "").unwrap();
        assert!(text.contains("Thanks for playing"));
    }

    #[test]
    fn losing_game_reveals_word() {
        let input = "world\n".repeat(6) + "no\n";
        let text = play(&["hello"], &input).unwrap();
        assert!(text.contains("The word was HELLO"));
    }

    #[test]
    fn play_again_starts_fresh() {
        let text = play(&["hello"], "hello\nyes\nquit\n").unwrap();
        assert!(text.contains("New game started"));
    }

    #[test]
    fn command_words_play_as_guesses_when_they_fit() {
        let text = play(&["new"], "new\nno\n").unwrap();
        assert!(text.contains("Hooray, you won!"));
        assert!(!text.contains("New game started"));

        let text = play(&["quit"], "exit\n:quit\n").unwrap();
        assert!(text.contains("Guess 2/6"));
        assert!(text.contains("Thanks for playing"));
    }

    #[test]
    fn prefixed_commands_always_apply() {
        let text = play(&["hello"], ":new\n:exit\n").unwrap();
        assert!(text.contains("New game started"));
        assert!(!text.contains("Guess 2/6"));
        assert!(text.contains("Thanks for playing"));
    }

    #[test]
    fn bad_word_list_is_an_error() {
        assert!(play(&[], "").is_err());
        assert!(play(&["hello", "hi"], "").is_err());
    }
}
