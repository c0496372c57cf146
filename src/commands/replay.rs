//! Replay a list of guesses against a known answer
//!
//! Handy for scripting and for checking how a finished game would share.

use super::enter_guess;
use crate::core::Word;
use crate::engine::{GameConfig, GameEngine, Outcome};
use crate::output::{write_board, write_game_over, write_keyboard};
use anyhow::{Context, Result, bail};
use std::io::Write;
use tracing::warn;

/// Play `guesses` in order against `answer`
///
/// Guesses after the game has ended are skipped with a warning.
///
/// # Errors
///
/// Returns an error if the answer is not a valid word, the configuration
/// cannot start a game, or a guess has the wrong length or non-letters.
///
/// # Examples
/// ```
/// use wordle_game::commands::replay;
/// use wordle_game::engine::{GameConfig, Status};
///
/// let guesses = vec!["world".to_string(), "hello".to_string()];
/// let game = replay("hello", &guesses, GameConfig::default()).unwrap();
/// assert_eq!(game.status(), Status::Won);
/// ```
pub fn replay(answer: &str, guesses: &[String], config: GameConfig) -> Result<GameEngine> {
    let word = Word::new(answer).with_context(|| format!("invalid answer {answer:?}"))?;
    let mut game = GameEngine::with_word(word, config)?;

    for (turn, guess) in guesses.iter().enumerate() {
        if game.status().is_over() {
            warn!(
                skipped = guesses.len() - turn,
                "game already over, ignoring remaining guesses"
            );
            break;
        }

        let guess = guess.trim();
        if guess.chars().count() != game.word_len() {
            bail!(
                "guess {} ({guess:?}) must be {} letters",
                turn + 1,
                game.word_len()
            );
        }
        if enter_guess(&mut game, guess) == Outcome::Ignored {
            bail!("guess {} ({guess:?}) must contain only letters", turn + 1);
        }
    }

    Ok(game)
}

/// Print the board, keyboard and, if finished, the result and share text
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_replay<W: Write>(out: &mut W, game: &GameEngine) -> Result<()> {
    write_board(out, game)?;
    writeln!(out)?;
    write_keyboard(out, game)?;

    if game.status().is_over() {
        write_game_over(out, game)?;
    } else {
        writeln!(
            out,
            "\n{} of {} tries left\n{}",
            game.remaining_tries(),
            game.max_tries(),
            game.share_text()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Status;

    fn guesses(list: &[&str]) -> Vec<String> {
        list.iter().map(|g| (*g).to_string()).collect()
    }

    #[test]
    fn replay_scores_guesses() {
        let game = replay("hello", &guesses(&["world", "brick"]), GameConfig::default()).unwrap();
        assert_eq!(game.status(), Status::Playing);
        assert_eq!(game.completed_rows(), 2);
    }

    #[test]
    fn replay_stops_after_win() {
        let game = replay(
            "hello",
            &guesses(&["hello", "world"]),
            GameConfig::default(),
        )
        .unwrap();
        assert_eq!(game.status(), Status::Won);
        assert_eq!(game.completed_rows(), 1);
    }

    #[test]
    fn replay_rejects_wrong_length() {
        let err = replay("hello", &guesses(&["hi"]), GameConfig::default()).unwrap_err();
        assert!(err.to_string().contains("must be 5 letters"));
    }

    #[test]
    fn replay_rejects_non_letters() {
        let err = replay("hello", &guesses(&["he11o"]), GameConfig::default()).unwrap_err();
        assert!(err.to_string().contains("only letters"));
    }

    #[test]
    fn replay_rejects_bad_answer() {
        assert!(replay("h3llo", &[], GameConfig::default()).is_err());
    }

    #[test]
    fn print_unfinished_game_shows_tries_left() {
        let game = replay("hello", &guesses(&["world"]), GameConfig::default()).unwrap();
        let mut out = Vec::new();
        print_replay(&mut out, &game).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("5 of 6 tries left"));
        assert!(text.ends_with("Wordle\n⬛🟨⬛🟩⬛\n"));
    }
}
